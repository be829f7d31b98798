use std::collections::HashMap;

use serde_json::Value;

use crate::code::MessageCode;
use crate::error::{LocaleError, Result};

/// A flat mapping from message code to template.
///
/// Templates may contain `%name%` and `%args[N]%` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTable {
    entries: HashMap<String, String>,
}

impl LocaleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its JSON text.
    pub fn from_json_str(locale: &str, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(locale, &value)
    }

    /// Build a table from a JSON object of string templates.
    pub fn from_value(locale: &str, value: &Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| LocaleError::InvalidTable {
            locale: locale.to_string(),
            message: "expected a JSON object".to_string(),
        })?;

        let mut entries = HashMap::with_capacity(map.len());
        for (code, template) in map {
            let template = template.as_str().ok_or_else(|| LocaleError::InvalidTable {
                locale: locale.to_string(),
                message: format!("template for {code:?} is not a string"),
            })?;
            entries.insert(code.clone(), template.to_string());
        }

        Ok(Self { entries })
    }

    /// Insert or replace a template.
    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(code.into(), template.into());
    }

    /// Look up a template. Empty templates count as absent.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .get(code)
            .map(String::as_str)
            .filter(|template| !template.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known message codes this table has no template for.
    pub fn missing_codes(&self) -> Vec<MessageCode> {
        MessageCode::ALL
            .into_iter()
            .filter(|code| self.get(code.as_str()).is_none())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(code, template)| (code.into(), template.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_object() {
        let table =
            LocaleTable::from_json_str("fr", r#"{"error_required":"%name% est requis."}"#).unwrap();
        assert_eq!(table.get("error_required"), Some("%name% est requis."));
        assert_eq!(table.len(), 1);
        assert!(table.get("error_not_a_number").is_none());
    }

    #[test]
    fn rejects_non_object() {
        assert!(matches!(
            LocaleTable::from_json_str("fr", "[]"),
            Err(LocaleError::InvalidTable { .. })
        ));
    }

    #[test]
    fn rejects_non_string_template() {
        assert!(matches!(
            LocaleTable::from_json_str("fr", r#"{"error_required": 1}"#),
            Err(LocaleError::InvalidTable { .. })
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            LocaleTable::from_json_str("fr", "{"),
            Err(LocaleError::InvalidJson(_))
        ));
    }

    #[test]
    fn empty_template_is_absent() {
        let table: LocaleTable = [("error_required", "")].into_iter().collect();
        assert!(table.get("error_required").is_none());
        assert!(table.missing_codes().contains(&MessageCode::Required));
    }
}
