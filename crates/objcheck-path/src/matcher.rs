use serde_json::Value;

use crate::error::Result;
use crate::flatten::{flatten, FlatPaths};
use crate::pattern::PathPattern;

/// A concrete path selected by a pattern, with the value found there.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatch<'a> {
    pub key: String,
    pub value: &'a Value,
}

impl PathPattern {
    /// Select every entry of an already flattened document matched by this pattern.
    ///
    /// Matches come back in traversal order. No match is an empty vector.
    pub fn select<'a>(&self, flat: &FlatPaths<'a>) -> Vec<PathMatch<'a>> {
        if !self.has_wildcard() {
            return flat
                .get_key_value(self.as_str())
                .map(|(key, value)| PathMatch {
                    key: key.clone(),
                    value: *value,
                })
                .into_iter()
                .collect();
        }

        flat.iter()
            .filter(|(key, _)| self.is_match(key))
            .map(|(key, value)| PathMatch {
                key: key.clone(),
                value: *value,
            })
            .collect()
    }

    /// Flatten `data` and select the entries matched by this pattern.
    pub fn resolve<'a>(&self, data: &'a Value) -> Vec<PathMatch<'a>> {
        self.select(&flatten(data))
    }
}

/// Compile `pattern` and resolve it against `data` in one step.
pub fn match_path<'a>(pattern: &str, data: &'a Value) -> Result<Vec<PathMatch<'a>>> {
    Ok(PathPattern::parse(pattern)?.resolve(data))
}
