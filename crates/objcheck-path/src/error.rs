/// Errors that can occur while compiling a path pattern.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// The pattern could not be compiled into a matcher.
    #[error("invalid path pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, PathError>;
