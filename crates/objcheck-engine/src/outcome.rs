use objcheck_locale::MessageCode;
use serde::Serialize;

use crate::rule::RuleKind;

/// One failing (path, rule) application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Concrete path of the failing value, or the pattern for a missing required path.
    pub path: String,
    pub rule: RuleKind,
    pub code: MessageCode,
    /// Final, locale-resolved text.
    pub message: String,
}

/// Result of a completed validation run.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "messages", rename_all = "lowercase")]
pub enum Outcome {
    /// Every rule held.
    Passed,
    /// Messages in encounter order. Never empty.
    Failed(Vec<String>),
}

impl Outcome {
    pub fn from_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Outcome::Passed
        } else {
            Outcome::Failed(messages)
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Failure messages; empty when passed.
    pub fn messages(&self) -> &[String] {
        match self {
            Outcome::Passed => &[],
            Outcome::Failed(messages) => messages,
        }
    }

    /// `None` when passed.
    pub fn into_messages(self) -> Option<Vec<String>> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(messages) => Some(messages),
        }
    }
}

impl From<Vec<Violation>> for Outcome {
    fn from(violations: Vec<Violation>) -> Self {
        Self::from_messages(violations.into_iter().map(|v| v.message).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_messages_are_passed() {
        let outcome = Outcome::from_messages(Vec::new());
        assert!(outcome.is_passed());
        assert!(outcome.messages().is_empty());
        assert_eq!(outcome.into_messages(), None);
    }

    #[test]
    fn failed_keeps_order() {
        let outcome = Outcome::from_messages(vec!["a".to_string(), "b".to_string()]);
        assert!(!outcome.is_passed());
        assert_eq!(outcome.messages(), ["a", "b"]);
    }

    #[test]
    fn serializes_with_status_tag() {
        assert_eq!(
            serde_json::to_value(Outcome::Passed).unwrap(),
            json!({ "status": "passed" })
        );
        assert_eq!(
            serde_json::to_value(Outcome::Failed(vec!["x".to_string()])).unwrap(),
            json!({ "status": "failed", "messages": ["x"] })
        );
    }
}
