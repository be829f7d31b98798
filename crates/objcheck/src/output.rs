use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use objcheck::Violation;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct CheckReport<'a> {
    status: &'static str,
    violation_count: usize,
    violations: &'a [Violation],
}

pub fn print_report(violations: &[Violation], format: OutputFormat) {
    let status = if violations.is_empty() {
        "passed"
    } else {
        "failed"
    };

    match format {
        OutputFormat::Json => {
            let out = CheckReport {
                status,
                violation_count: violations.len(),
                violations,
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            if violations.is_empty() {
                println!("{status}");
                return;
            }
            let mut table = new_table(vec!["PATH", "RULE", "CODE", "MESSAGE"]);
            for violation in violations {
                table.add_row(vec![
                    violation.path.clone(),
                    violation.rule.to_string(),
                    violation.code.to_string(),
                    violation.message.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("status={status} violations={}", violations.len());
            for violation in violations {
                println!(
                    "  {} [{}] {}",
                    violation.path, violation.rule, violation.message
                );
            }
        }
        OutputFormat::Raw => {
            for violation in violations {
                println!("{}", violation.message);
            }
        }
    }
}

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}
