use objcheck::locale::{LocaleCatalog, LocaleTable, MessageCode};
use serde::Serialize;

use crate::cmd::{load_catalog, LocalesArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{new_table, print_json, OutputFormat};

const DEFAULT_LOCALE: &str = "default";

#[derive(Serialize)]
struct LocaleRow {
    locale: String,
    entries: usize,
    /// Codes served by the default table instead.
    fallback: Vec<MessageCode>,
    /// Codes that render as the bare code.
    unresolved: Vec<MessageCode>,
}

pub fn run(args: LocalesArgs, format: OutputFormat) -> CliResult<i32> {
    let catalog = load_catalog(args.locale_dir.as_deref())?;
    let rows = locale_rows(&catalog);

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = new_table(vec!["LOCALE", "ENTRIES", "FALLBACK", "UNRESOLVED"]);
            for row in &rows {
                table.add_row(vec![
                    row.locale.clone(),
                    row.entries.to_string(),
                    row.fallback.len().to_string(),
                    row.unresolved.len().to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in &rows {
                let status = if row.unresolved.is_empty() && row.fallback.is_empty() {
                    "complete"
                } else if row.unresolved.is_empty() {
                    "partial"
                } else {
                    "incomplete"
                };
                println!("{} entries={} {status}", row.locale, row.entries);
            }
        }
        OutputFormat::Raw => {
            for row in &rows {
                println!("{}", row.locale);
            }
        }
    }

    Ok(SUCCESS)
}

fn locale_rows(catalog: &LocaleCatalog) -> Vec<LocaleRow> {
    let mut rows = vec![row_for(
        DEFAULT_LOCALE,
        catalog.default_table(),
        catalog.missing_codes(None),
    )];
    for locale in catalog.locales() {
        if let Some(table) = catalog.table(locale) {
            rows.push(row_for(locale, table, catalog.missing_codes(Some(locale))));
        }
    }
    rows
}

fn row_for(locale: &str, table: &LocaleTable, unresolved: Vec<MessageCode>) -> LocaleRow {
    let fallback = table
        .missing_codes()
        .into_iter()
        .filter(|code| !unresolved.contains(code))
        .collect();
    LocaleRow {
        locale: locale.to_string(),
        entries: table.len(),
        fallback,
        unresolved,
    }
}
