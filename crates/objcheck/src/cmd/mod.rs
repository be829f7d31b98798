use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use objcheck::locale::LocaleCatalog;

use crate::exit::{locale_error, CliResult};
use crate::output::OutputFormat;

pub mod check;
pub mod locales;
pub mod rules;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON document against a schema.
    Check(CheckArgs),
    /// List the rule catalog and the codes each rule can report.
    Rules(RulesArgs),
    /// List available locales and their completeness.
    Locales(LocalesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Rules(args) => rules::run(args, format),
        Command::Locales(args) => locales::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file: a JSON object of path patterns to rule declarations.
    pub schema: PathBuf,
    /// Document to validate. Reads stdin when omitted or `-`.
    #[arg(conflicts_with = "data")]
    pub input: Option<PathBuf>,
    /// Inline JSON document.
    #[arg(long)]
    pub data: Option<String>,
    /// Locale for failure messages.
    #[arg(long, env = "OBJCHECK_LOCALE")]
    pub locale: Option<String>,
    /// Directory of `<locale>.json` message tables.
    #[arg(long, value_name = "DIR", env = "OBJCHECK_LOCALE_DIR")]
    pub locale_dir: Option<PathBuf>,
    /// Reject unknown rule names before reading the document.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Default)]
pub struct RulesArgs {}

#[derive(Args, Debug, Default)]
pub struct LocalesArgs {
    /// Directory of `<locale>.json` message tables.
    #[arg(long, value_name = "DIR", env = "OBJCHECK_LOCALE_DIR")]
    pub locale_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn load_catalog(dir: Option<&Path>) -> CliResult<Arc<LocaleCatalog>> {
    match dir {
        Some(dir) => {
            let catalog = LocaleCatalog::from_directory(dir)
                .map_err(|err| locale_error("failed to load locale directory", err))?;
            tracing::debug!(
                dir = %dir.display(),
                locales = catalog.locales().len(),
                "loaded locale directory"
            );
            Ok(Arc::new(catalog))
        }
        None => Ok(LocaleCatalog::shared()),
    }
}
