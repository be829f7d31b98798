//! The built-in predicate rules.
//!
//! Each rule is a pure function of the value and the rule arguments. A
//! failure is reported as the [`MessageCode`] to look up, never as text.

use std::fmt;

use objcheck_locale::MessageCode;
use serde_json::Value;

use crate::value::{is_falsy, length_of, lenient_number, numeric_arg, ValueKind};

/// A rule from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    IsNumber,
    IsStrictNumber,
    IsString,
    IsArray,
    IsObject,
    MinLength,
    MaxLength,
    Min,
    Max,
}

impl Rule {
    pub const ALL: [Rule; 9] = [
        Rule::IsNumber,
        Rule::IsStrictNumber,
        Rule::IsString,
        Rule::IsArray,
        Rule::IsObject,
        Rule::MinLength,
        Rule::MaxLength,
        Rule::Min,
        Rule::Max,
    ];

    /// The name used in schema declarations.
    pub fn name(self) -> &'static str {
        match self {
            Rule::IsNumber => "isNumber",
            Rule::IsStrictNumber => "isStrictNumber",
            Rule::IsString => "isString",
            Rule::IsArray => "isArray",
            Rule::IsObject => "isObject",
            Rule::MinLength => "minLength",
            Rule::MaxLength => "maxLength",
            Rule::Min => "min",
            Rule::Max => "max",
        }
    }

    /// Look up a rule by its declaration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Rule::ALL.into_iter().find(|rule| rule.name() == name)
    }

    /// Codes this rule can fail with, in the order they are checked.
    pub fn failure_codes(self) -> &'static [MessageCode] {
        match self {
            Rule::IsNumber => &[MessageCode::NotANumber],
            Rule::IsStrictNumber => &[MessageCode::NotAStrictNumber],
            Rule::IsString => &[MessageCode::NotAString],
            Rule::IsArray => &[MessageCode::NotAnArray],
            Rule::IsObject => &[MessageCode::NotAnObject],
            Rule::MinLength => &[MessageCode::NoLengthProperty, MessageCode::LengthTooShort],
            Rule::MaxLength => &[MessageCode::NoLengthProperty, MessageCode::LengthTooLong],
            Rule::Min => &[MessageCode::NotANumber, MessageCode::ValueTooLess],
            Rule::Max => &[MessageCode::NotANumber, MessageCode::ValueTooGreat],
        }
    }

    /// Apply the rule to one value.
    pub fn check(self, value: &Value, args: &[Value]) -> Result<(), MessageCode> {
        let kind = ValueKind::of(value);
        match self {
            Rule::IsNumber => is_number(value).map(|_| ()),
            Rule::IsStrictNumber => expect(kind == ValueKind::Number, MessageCode::NotAStrictNumber),
            Rule::IsString => expect(kind == ValueKind::Text, MessageCode::NotAString),
            Rule::IsArray => expect(kind == ValueKind::Sequence, MessageCode::NotAnArray),
            Rule::IsObject => expect(kind.is_composite(), MessageCode::NotAnObject),
            Rule::MinLength => {
                let length = length_of(value).ok_or(MessageCode::NoLengthProperty)?;
                let bound = length_bound(args);
                expect(
                    bound.is_some_and(|b| length as f64 >= b),
                    MessageCode::LengthTooShort,
                )
            }
            Rule::MaxLength => {
                let length = length_of(value).ok_or(MessageCode::NoLengthProperty)?;
                let bound = length_bound(args);
                expect(
                    bound.is_some_and(|b| length as f64 <= b),
                    MessageCode::LengthTooLong,
                )
            }
            Rule::Min => {
                let number = is_number(value)?;
                let bound = args.first().and_then(numeric_arg);
                expect(
                    bound.is_some_and(|b| number >= b),
                    MessageCode::ValueTooLess,
                )
            }
            Rule::Max => {
                let number = is_number(value)?;
                let bound = args.first().and_then(numeric_arg);
                expect(
                    bound.is_some_and(|b| number <= b),
                    MessageCode::ValueTooGreat,
                )
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn expect(valid: bool, code: MessageCode) -> Result<(), MessageCode> {
    if valid {
        Ok(())
    } else {
        Err(code)
    }
}

fn is_number(value: &Value) -> Result<f64, MessageCode> {
    lenient_number(value).ok_or(MessageCode::NotANumber)
}

// A missing or falsy first argument means a bound of zero.
fn length_bound(args: &[Value]) -> Option<f64> {
    match args.first() {
        None => Some(0.0),
        Some(arg) if is_falsy(arg) => Some(0.0),
        Some(arg) => numeric_arg(arg),
    }
}
