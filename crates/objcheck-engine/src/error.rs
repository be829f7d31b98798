/// Errors that abort schema construction or execution.
///
/// These describe a broken schema, never a failed validation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A rule declaration is neither a rule name, a `{type, ...}` record nor a list of those.
    #[error("unexpected definition: {0}")]
    UnexpectedDefinition(String),

    /// The schema itself is not a mapping of path patterns to declarations.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// A declaration names a rule that does not exist.
    #[error("unknown validator: {0}")]
    UnknownRule(String),

    /// A path pattern could not be compiled.
    #[error("path error: {0}")]
    Path(#[from] objcheck_path::PathError),

    /// Locale tables could not be loaded.
    #[error("locale error: {0}")]
    Locale(#[from] objcheck_locale::LocaleError),

    /// Schema text is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
