use objcheck_path::PathPattern;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::rule::RuleSpec;

/// Rules declared for one path pattern, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pattern: PathPattern,
    rules: Vec<RuleSpec>,
}

impl FieldSchema {
    /// Compile `pattern` and attach already built rules.
    pub fn new(pattern: &str, rules: Vec<RuleSpec>) -> Result<Self> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            rules,
        })
    }

    /// Compile `pattern` and normalize a rule declaration.
    pub fn parse(pattern: &str, declaration: &Value) -> Result<Self> {
        Self::new(pattern, parse_declaration(declaration)?)
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }
}

impl Serialize for FieldSchema {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FieldSchema", 2)?;
        state.serialize_field("path", self.pattern.as_str())?;
        state.serialize_field("rules", &self.rules)?;
        state.end()
    }
}

/// An ordered list of field schemas, immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    /// Build from a mapping of path pattern to rule declaration.
    ///
    /// A declaration is a rule name, a `{type, args?, message?, name?}`
    /// record, or a (possibly nested) list of those. `null` is an empty schema.
    pub fn from_value(definitions: &Value) -> Result<Self> {
        match definitions {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => {
                let fields = map
                    .iter()
                    .map(|(pattern, declaration)| FieldSchema::parse(pattern, declaration))
                    .collect::<Result<Vec<_>>>()?;
                debug!(fields = fields.len(), "parsed schema");
                Ok(Self { fields })
            }
            other => Err(EngineError::InvalidSchema(format!(
                "expected an object of path patterns, got {other}"
            ))),
        }
    }

    /// Parse schema JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definitions: Value = serde_json::from_str(json)?;
        Self::from_value(&definitions)
    }

    pub fn from_fields(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared rule names that resolve to nothing, in declaration order.
    pub fn unknown_rules(&self) -> Vec<&str> {
        self.fields
            .iter()
            .flat_map(|field| field.rules())
            .filter(|spec| spec.kind().is_err())
            .map(RuleSpec::kind_name)
            .collect()
    }
}

/// Flatten one declaration into its rule list.
pub fn parse_declaration(declaration: &Value) -> Result<Vec<RuleSpec>> {
    let mut rules = Vec::new();
    collect(declaration, &mut rules)?;
    Ok(rules)
}

fn collect(declaration: &Value, rules: &mut Vec<RuleSpec>) -> Result<()> {
    match declaration {
        Value::Array(items) => {
            for item in items {
                collect(item, rules)?;
            }
        }
        Value::String(kind) => rules.push(RuleSpec::new(kind.as_str())),
        Value::Object(record) => rules.push(parse_record(declaration, record)?),
        _ => return Err(unexpected(declaration)),
    }
    Ok(())
}

fn parse_record(declaration: &Value, record: &Map<String, Value>) -> Result<RuleSpec> {
    let kind = match record.get("type") {
        Some(Value::String(kind)) if !kind.is_empty() => kind.as_str(),
        _ => return Err(unexpected(declaration)),
    };

    // A lone scalar argument is shorthand for a one-element list.
    let args = match record.get("args") {
        None => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(scalar) => vec![scalar.clone()],
    };

    let mut spec = RuleSpec::new(kind).with_args(args);
    if let Some(message) = optional_text(declaration, record.get("message"))? {
        spec = spec.with_message(message);
    }
    if let Some(name) = optional_text(declaration, record.get("name"))? {
        spec = spec.with_name(name);
    }
    Ok(spec)
}

fn optional_text<'a>(declaration: &Value, field: Option<&'a Value>) -> Result<Option<&'a str>> {
    match field {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(unexpected(declaration)),
    }
}

fn unexpected(declaration: &Value) -> EngineError {
    EngineError::UnexpectedDefinition(declaration.to_string())
}
