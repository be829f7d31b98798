use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{PathError, Result};

/// Segment marker matching exactly one key or index.
pub const WILDCARD: char = '*';

/// What a wildcard expands to: one or more characters that are not a separator.
const WILDCARD_CLASS: &str = "[^.]+";

/// Quoted bracket access such as `['bar']` or `["bar"]`.
static BRACKET_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[("|')([0-9A-Za-z_]+)("|')\]"#).expect("bracket segment regex is valid")
});

/// Rewrite the first quoted bracket segment of `raw` into dotted form.
///
/// `foo['bar'].*` becomes `foo.bar.*`. Only the first bracket segment is
/// rewritten; later ones are kept verbatim.
pub fn normalize(raw: &str) -> Cow<'_, str> {
    BRACKET_SEGMENT.replace(raw, ".${2}")
}

/// A compiled, immutable path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    normalized: String,
    wildcard: bool,
    regex: Regex,
}

impl PathPattern {
    /// Normalize and compile a pattern.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let normalized = normalize(&raw).into_owned();
        let regex = compile(&normalized)?;
        let wildcard = normalized.contains(WILDCARD);

        debug!(
            pattern = %raw,
            normalized = %normalized,
            wildcard,
            "compiled path pattern"
        );
        Ok(Self {
            wildcard,
            raw,
            normalized,
            regex,
        })
    }

    /// The pattern as it was declared.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The bracket-free dotted form used for matching.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Whether the pattern contains at least one wildcard.
    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Whether `key` is fully matched by this pattern.
    pub fn is_match(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for PathPattern {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for PathPattern {}

fn compile(normalized: &str) -> Result<Regex> {
    let body = normalized
        .split(WILDCARD)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(WILDCARD_CLASS);

    Regex::new(&format!("^{body}$")).map_err(|source| PathError::InvalidPattern {
        pattern: normalized.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn normalize_rewrites_quoted_brackets() {
        assert_eq!(normalize("foo['bar1'].*"), "foo.bar1.*");
        assert_eq!(normalize(r#"foo["bar"]"#), "foo.bar");
        assert_eq!(normalize("plain.path"), "plain.path");
    }

    #[test]
    fn normalize_only_rewrites_first_bracket_segment() {
        assert_eq!(normalize("a['b']['c']"), "a.b['c']");
    }

    #[test]
    fn normalize_ignores_unquoted_brackets() {
        assert_eq!(normalize("items[0]"), "items[0]");
    }

    #[test]
    fn literal_pattern_matches_exactly() {
        let pattern = PathPattern::parse("key1").unwrap();
        assert!(!pattern.has_wildcard());
        assert!(pattern.is_match("key1"));
        assert!(!pattern.is_match("key10"));
        assert!(!pattern.is_match("xkey1"));
    }

    #[test]
    fn dots_are_literal() {
        let pattern = PathPattern::parse("a.b").unwrap();
        assert!(pattern.is_match("a.b"));
        assert!(!pattern.is_match("axb"));
    }

    #[test]
    fn wildcard_spans_exactly_one_segment() {
        let pattern = PathPattern::parse("key6.*.key8").unwrap();
        assert!(pattern.has_wildcard());
        assert!(pattern.is_match("key6.key7.key8"));
        assert!(!pattern.is_match("key6.key8"));
        assert!(!pattern.is_match("key6.a.b.key8"));
    }

    #[test]
    fn every_wildcard_is_expanded() {
        let pattern = PathPattern::parse("*.*").unwrap();
        assert!(pattern.is_match("a.0"));
        assert!(!pattern.is_match("a"));
        assert!(!pattern.is_match("a.0.b"));
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        let pattern = PathPattern::parse("price($)+").unwrap();
        assert!(pattern.is_match("price($)+"));
        assert!(!pattern.is_match("price"));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn parse_logs_normalized_form() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            PathPattern::parse("orders['lines'].*").unwrap();
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("compiled path pattern"), "{logs}");
        assert!(logs.contains("normalized=orders.lines.*"), "{logs}");
        assert!(logs.contains("wildcard=true"), "{logs}");
    }

    #[test]
    fn display_and_raw_forms() {
        let pattern: PathPattern = "foo['bar'].*".parse().unwrap();
        assert_eq!(pattern.raw(), "foo['bar'].*");
        assert_eq!(pattern.as_str(), "foo.bar.*");
        assert_eq!(pattern.to_string(), "foo.bar.*");
    }
}
