use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::catalog::Rule;
use crate::error::{EngineError, Result};

/// Name of the presence rule.
pub const REQUIRED: &str = "required";

/// What a declared rule name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Asserts at least one value exists at the path.
    Required,
    /// A predicate applied to every value found at the path.
    Check(Rule),
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Required => REQUIRED,
            RuleKind::Check(rule) => rule.name(),
        }
    }
}

impl FromStr for RuleKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        if s == REQUIRED {
            return Ok(RuleKind::Required);
        }
        Rule::from_name(s)
            .map(RuleKind::Check)
            .ok_or_else(|| EngineError::UnknownRule(s.to_string()))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for RuleKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// One declared rule instance.
///
/// `kind` keeps the declared name; it is resolved against the catalog when
/// the rule runs, so a typo surfaces as [`EngineError::UnknownRule`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSpec {
    #[serde(rename = "type")]
    kind: String,
    args: Vec<Value>,
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl RuleSpec {
    /// A rule with no arguments, no override and no display name.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            args: Vec::new(),
            message: None,
            name: None,
        }
    }

    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }

    /// Override every locale table with `message`. Empty text means no override.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into()).filter(|m| !m.is_empty());
        self
    }

    /// Label substituted for `%name%`. Empty text means no label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into()).filter(|n| !n.is_empty());
        self
    }

    /// The declared rule name.
    pub fn kind_name(&self) -> &str {
        &self.kind
    }

    /// Resolve the declared name against the catalog.
    pub fn kind(&self) -> Result<RuleKind> {
        self.kind.parse()
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
