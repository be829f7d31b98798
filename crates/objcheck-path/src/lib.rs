//! Dotted-path flattening and single-level wildcard matching over JSON values.
//!
//! Every node of a document is addressable by a dotted path (`orders.0.sku`).
//! A [`PathPattern`] may use `*` to stand for exactly one key or index at
//! its level, so `orders.*.sku` reaches the `sku` of every order.

pub mod error;
pub mod flatten;
pub mod matcher;
pub mod pattern;

pub use error::{PathError, Result};
pub use flatten::{flatten, FlatPaths, SEPARATOR};
pub use matcher::{match_path, PathMatch};
pub use pattern::{normalize, PathPattern, WILDCARD};
