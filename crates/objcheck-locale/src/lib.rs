//! Locale message tables and message resolution for objcheck.
//!
//! A [`LocaleCatalog`] holds a default table plus any number of named
//! tables. A [`MessageResolver`] picks the template for a [`MessageCode`]
//! (override, selected locale, default table, raw code) and interpolates
//! `%args[N]%` and `%name%` into it.

pub mod catalog;
pub mod code;
pub mod config;
pub mod error;
pub mod resolver;
pub mod table;

pub use catalog::LocaleCatalog;
pub use code::MessageCode;
pub use config::CatalogConfig;
pub use error::{LocaleError, Result};
pub use resolver::{display_value, interpolate, MessageContext, MessageResolver, UNKNOWN_NAME};
pub use table::LocaleTable;
