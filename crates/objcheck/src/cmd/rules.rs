use objcheck::engine::{Rule, REQUIRED};
use objcheck::locale::MessageCode;
use serde::Serialize;

use crate::cmd::RulesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{new_table, print_json, OutputFormat};

#[derive(Serialize)]
struct RuleRow {
    name: &'static str,
    applies_to: &'static str,
    codes: Vec<MessageCode>,
}

pub fn run(_args: RulesArgs, format: OutputFormat) -> CliResult<i32> {
    let rows = catalog_rows();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = new_table(vec!["RULE", "APPLIES TO", "CODES"]);
            for row in &rows {
                table.add_row(vec![
                    row.name.to_string(),
                    row.applies_to.to_string(),
                    join_codes(&row.codes),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in &rows {
                println!(
                    "{} ({}): {}",
                    row.name,
                    row.applies_to,
                    join_codes(&row.codes)
                );
            }
        }
        OutputFormat::Raw => {
            for row in &rows {
                println!("{}", row.name);
            }
        }
    }

    Ok(SUCCESS)
}

fn catalog_rows() -> Vec<RuleRow> {
    let mut rows = vec![RuleRow {
        name: REQUIRED,
        applies_to: "pattern",
        codes: vec![MessageCode::Required],
    }];
    rows.extend(Rule::ALL.iter().map(|rule| RuleRow {
        name: rule.name(),
        applies_to: "each match",
        codes: rule.failure_codes().to_vec(),
    }));
    rows
}

fn join_codes(codes: &[MessageCode]) -> String {
    codes
        .iter()
        .map(|code| code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_required_first_then_every_rule() {
        let rows = catalog_rows();
        assert_eq!(rows.len(), Rule::ALL.len() + 1);
        assert_eq!(rows[0].name, "required");
        assert!(rows.iter().any(|row| row.name == "isStrictNumber"));
    }

    #[test]
    fn length_rules_report_missing_length() {
        let rows = catalog_rows();
        let min_length = rows
            .iter()
            .find(|row| row.name == "minLength")
            .expect("minLength should be listed");
        assert!(min_length.codes.contains(&MessageCode::NoLengthProperty));
        assert!(min_length.codes.contains(&MessageCode::LengthTooShort));
    }
}
