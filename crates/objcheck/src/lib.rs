//! Declarative validation of nested JSON data.
//!
//! A schema maps dotted path patterns (with `*` for one level) to ordered
//! rule lists. objcheck walks the data, applies every rule to every value
//! found, and returns locale-resolved failure messages.
//!
//! # Crate Structure
//!
//! - [`path`] - Flattening and wildcard path matching
//! - [`locale`] - Locale tables and message resolution
//! - [`engine`] - Rule catalog, schema parsing and the validator

/// Re-export path types.
pub mod path {
    pub use objcheck_path::*;
}

/// Re-export locale types.
pub mod locale {
    pub use objcheck_locale::*;
}

/// Re-export engine types.
pub mod engine {
    pub use objcheck_engine::*;
}

pub use objcheck_engine::{EngineError, Outcome, Validator, ValidatorConfig, Violation};
