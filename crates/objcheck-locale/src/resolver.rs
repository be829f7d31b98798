use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::catalog::LocaleCatalog;
use crate::code::MessageCode;

/// Display name substituted for `%name%` when none is known.
pub const UNKNOWN_NAME: &str = "Unknown";

const NAME_PLACEHOLDER: &str = "%name%";

static ARGS_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%args\[([0-9]+)\]%").expect("args placeholder regex is valid"));

/// Per-rule inputs to message resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageContext<'a> {
    /// Explicit template overriding every locale table.
    pub message: Option<&'a str>,
    /// Rule arguments available to `%args[N]%`.
    pub args: &'a [Value],
    /// Field label substituted for `%name%`.
    pub name: Option<&'a str>,
}

/// Resolves message codes to final text for one selected locale.
#[derive(Debug, Clone)]
pub struct MessageResolver {
    catalog: Arc<LocaleCatalog>,
    locale: Option<String>,
}

impl MessageResolver {
    /// Resolve against `catalog`, preferring `locale` when it is registered.
    ///
    /// An unknown locale is not an error; lookups fall through to the default table.
    pub fn new(catalog: Arc<LocaleCatalog>, locale: Option<&str>) -> Self {
        if let Some(code) = locale {
            if !catalog.has_locale(code) {
                debug!(locale = code, "locale not registered, using default table");
            }
        }

        Self {
            catalog,
            locale: locale.map(str::to_string),
        }
    }

    /// Resolve against the bundled tables.
    pub fn builtin(locale: Option<&str>) -> Self {
        Self::new(LocaleCatalog::shared(), locale)
    }

    /// The requested locale, registered or not.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    /// Pick the template for `code`.
    ///
    /// Order: explicit override, selected locale, default table, the code itself.
    pub fn template<'a>(&'a self, code: &'a str, message: Option<&'a str>) -> &'a str {
        if let Some(message) = message.filter(|m| !m.is_empty()) {
            return message;
        }

        self.locale
            .as_deref()
            .and_then(|locale| self.catalog.table(locale))
            .and_then(|table| table.get(code))
            .or_else(|| self.catalog.default_table().get(code))
            .unwrap_or(code)
    }

    /// Produce the final text for `code`.
    pub fn resolve(&self, code: MessageCode, ctx: &MessageContext<'_>) -> String {
        let template = self.template(code.as_str(), ctx.message);
        interpolate(template, ctx.args, ctx.name)
    }
}

/// Fill placeholders of `template`.
///
/// The first `%args[N]%` is replaced with `args[N]`; every `%name%` is
/// replaced with `name`, or [`UNKNOWN_NAME`] when it is absent or empty.
pub fn interpolate(template: &str, args: &[Value], name: Option<&str>) -> String {
    let text = match ARGS_PLACEHOLDER.captures(template) {
        Some(captures) => {
            let arg = captures[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index));
            let range = captures.get(0).map_or(0..0, |m| m.range());
            let mut text = String::with_capacity(template.len());
            text.push_str(&template[..range.start]);
            text.push_str(&display_value(arg));
            text.push_str(&template[range.end..]);
            text
        }
        None => template.to_string(),
    };

    let name = name.filter(|n| !n.is_empty()).unwrap_or(UNKNOWN_NAME);
    text.replace(NAME_PLACEHOLDER, name)
}

/// Render a value the way it reads inside a message.
///
/// Integral numbers drop their fraction, arrays are comma-joined, objects
/// render as `[object Object]` and a missing value as `undefined`.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(value) => render(value),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
                    format!("{f:.0}")
                } else {
                    f.to_string()
                }
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
