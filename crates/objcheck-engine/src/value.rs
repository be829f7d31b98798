use serde_json::Value;

/// Coarse shape of a value, computed once and matched on by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    Sequence,
    Mapping,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::Text,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }

    /// Sequences and mappings.
    pub fn is_composite(self) -> bool {
        matches!(self, ValueKind::Sequence | ValueKind::Mapping)
    }

    /// Only text and sequences have a length.
    pub fn has_length(self) -> bool {
        matches!(self, ValueKind::Text | ValueKind::Sequence)
    }
}

/// Read `value` as a number, accepting native numbers and integer strings (`-12`, `007`).
pub fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if is_integer_text(s) => s.parse().ok(),
        _ => None,
    }
}

/// Length of text (in UTF-16 code units) or of a sequence.
pub fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.encode_utf16().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Coerce a rule argument to a number for comparison.
///
/// `null` is 0, booleans are 0/1, blank text is 0. Text is read as a
/// decimal or exponent literal, `Infinity`, or a `0x`/`0o`/`0b` integer.
/// Composites and any other text have no numeric reading.
pub fn numeric_arg(arg: &Value) -> Option<f64> {
    match arg {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => text_number(s.trim()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn text_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return radix_integer(&s[2..], radix);
    }

    // `str::parse` also takes `inf`, `nan` and `infinity`; only literal forms count here.
    let literal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !literal || !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn radix_integer(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Whether an argument counts as "not supplied" for bounds that default to zero.
pub fn is_falsy(arg: &Value) -> bool {
    match arg {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn is_integer_text(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
