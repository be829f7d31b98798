use std::sync::Arc;

use objcheck_locale::{LocaleCatalog, MessageCode, MessageContext, MessageResolver};
use objcheck_path::flatten;
use serde_json::Value;
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::error::{EngineError, Result};
use crate::outcome::{Outcome, Violation};
use crate::rule::{RuleKind, RuleSpec};
use crate::schema::Schema;

/// A parsed schema bound to a message resolver.
///
/// Immutable after construction; one validator can run against any number
/// of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Schema,
    resolver: MessageResolver,
}

impl Validator {
    /// Parse `definitions` and resolve messages through the bundled tables.
    pub fn new(definitions: &Value, locale: Option<&str>) -> Result<Self> {
        let config = ValidatorConfig {
            locale: locale.map(str::to_string),
            ..ValidatorConfig::default()
        };
        Self::with_config(definitions, &config)
    }

    /// Parse `definitions` with explicit config and the bundled tables.
    pub fn with_config(definitions: &Value, config: &ValidatorConfig) -> Result<Self> {
        Self::with_catalog(definitions, config, LocaleCatalog::shared())
    }

    /// Parse `definitions` with explicit config and locale catalog.
    pub fn with_catalog(
        definitions: &Value,
        config: &ValidatorConfig,
        catalog: Arc<LocaleCatalog>,
    ) -> Result<Self> {
        let schema = Schema::from_value(definitions)?;
        let resolver = MessageResolver::new(catalog, config.locale.as_deref());
        Self::from_parts(schema, resolver, config)
    }

    /// Bind an already built schema to a resolver.
    pub fn from_parts(
        schema: Schema,
        resolver: MessageResolver,
        config: &ValidatorConfig,
    ) -> Result<Self> {
        if config.reject_unknown_rules {
            if let Some(name) = schema.unknown_rules().first() {
                return Err(EngineError::UnknownRule((*name).to_string()));
            }
        }

        debug!(
            fields = schema.len(),
            locale = resolver.locale().unwrap_or("default"),
            "validator ready"
        );
        Ok(Self { schema, resolver })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn resolver(&self) -> &MessageResolver {
        &self.resolver
    }

    /// Validate `data` and return only the messages.
    pub fn execute(&self, data: &Value) -> Result<Outcome> {
        self.violations(data).map(Outcome::from)
    }

    /// Validate `data` and return every failing application.
    ///
    /// Fields and rules run in declaration order and every failure is kept.
    /// An unknown rule aborts the whole run.
    pub fn violations(&self, data: &Value) -> Result<Vec<Violation>> {
        let flat = flatten(data);
        let mut violations = Vec::new();

        for field in self.schema.fields() {
            let matches = field.pattern().select(&flat);

            for spec in field.rules() {
                match spec.kind()? {
                    RuleKind::Required => {
                        if matches.is_empty() {
                            violations.push(self.violation(
                                field.pattern().as_str(),
                                RuleKind::Required,
                                MessageCode::Required,
                                spec,
                                spec.name(),
                            ));
                        }
                    }
                    RuleKind::Check(rule) => {
                        for found in &matches {
                            if let Err(code) = rule.check(found.value, spec.args()) {
                                let name = spec.name().unwrap_or(&found.key);
                                violations.push(self.violation(
                                    &found.key,
                                    RuleKind::Check(rule),
                                    code,
                                    spec,
                                    Some(name),
                                ));
                            }
                        }
                    }
                }
            }
        }

        debug!(
            fields = self.schema.len(),
            violations = violations.len(),
            "validation finished"
        );
        Ok(violations)
    }

    fn violation(
        &self,
        path: &str,
        rule: RuleKind,
        code: MessageCode,
        spec: &RuleSpec,
        name: Option<&str>,
    ) -> Violation {
        let ctx = MessageContext {
            message: spec.message(),
            args: spec.args(),
            name,
        };
        Violation {
            path: path.to_string(),
            rule,
            code,
            message: self.resolver.resolve(code, &ctx),
        }
    }
}
