//! Declarative path-and-rule validation of JSON values.
//!
//! A schema maps path patterns to ordered rule lists:
//!
//! ```
//! use objcheck_engine::{Outcome, Validator};
//! use serde_json::json;
//!
//! let validator = Validator::new(
//!     &json!({ "name": "required", "tags.*": ["isString", { "type": "maxLength", "args": 8 }] }),
//!     None,
//! )
//! .unwrap();
//!
//! let outcome = validator.execute(&json!({ "name": "x", "tags": ["a", 3] })).unwrap();
//! assert_eq!(outcome, Outcome::Failed(vec!["tags.1 is not a string.".to_string(), "Invalid data type for tags.1.".to_string()]));
//! ```
//!
//! Rule failures are data in the [`Outcome`]. Schema mistakes (an
//! unrecognized declaration shape, an unknown rule) are [`EngineError`]s.

pub mod catalog;
pub mod config;
pub mod error;
pub mod outcome;
pub mod rule;
pub mod schema;
pub mod validator;
pub mod value;

pub use catalog::Rule;
pub use config::ValidatorConfig;
pub use error::{EngineError, Result};
pub use outcome::{Outcome, Violation};
pub use rule::{RuleKind, RuleSpec, REQUIRED};
pub use schema::{FieldSchema, Schema};
pub use validator::Validator;
pub use value::ValueKind;
