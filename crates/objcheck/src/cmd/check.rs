use std::io::Read;
use std::path::Path;

use objcheck::{Validator, ValidatorConfig};
use serde_json::Value;

use crate::cmd::{load_catalog, CheckArgs};
use crate::exit::{engine_error, io_error, json_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_report, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = read_json_file(&args.schema, "schema")?;
    let catalog = load_catalog(args.locale_dir.as_deref())?;
    let config = ValidatorConfig {
        locale: args.locale.clone(),
        reject_unknown_rules: args.strict,
    };
    let validator = Validator::with_catalog(&schema, &config, catalog)
        .map_err(|err| engine_error("invalid schema", err))?;

    let data = read_document(&args)?;
    let violations = validator
        .violations(&data)
        .map_err(|err| engine_error("validation aborted", err))?;

    tracing::info!(
        schema = %args.schema.display(),
        violations = violations.len(),
        "check complete"
    );
    print_report(&violations, format);

    if violations.is_empty() {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}

fn read_document(args: &CheckArgs) -> CliResult<Value> {
    if let Some(inline) = &args.data {
        return serde_json::from_str(inline).map_err(|err| json_error("--data", err));
    }

    match args.input.as_deref() {
        Some(path) if path != Path::new("-") => read_json_file(path, "document"),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| io_error("failed to read stdin", err))?;
            serde_json::from_str(&text).map_err(|err| json_error("stdin", err))
        }
    }
}

fn read_json_file(path: &Path, what: &str) -> CliResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|err| {
        io_error(&format!("failed to read {what} {}", path.display()), err)
    })?;
    serde_json::from_str(&text)
        .map_err(|err| json_error(&format!("{what} {}", path.display()), err))
}
