/// Errors that can occur while loading locale tables.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// A locale file or directory could not be read.
    #[error("failed to load locale: {0}")]
    LoadFailed(String),

    /// The table is valid JSON but not a flat code-to-template mapping.
    #[error("invalid locale table {locale:?}: {message}")]
    InvalidTable { locale: String, message: String },

    /// The table is not valid JSON.
    #[error("locale table is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LocaleError>;
