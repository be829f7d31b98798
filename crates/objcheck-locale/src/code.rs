use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Stable identifier of a failure reason, used as the locale table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCode {
    Required,
    NotANumber,
    NotAStrictNumber,
    NotAString,
    NotAnArray,
    NotAnObject,
    NoLengthProperty,
    LengthTooShort,
    LengthTooLong,
    ValueTooLess,
    ValueTooGreat,
}

impl MessageCode {
    /// Every code a complete locale table supplies.
    pub const ALL: [MessageCode; 11] = [
        MessageCode::Required,
        MessageCode::NotANumber,
        MessageCode::NotAStrictNumber,
        MessageCode::NotAString,
        MessageCode::NotAnArray,
        MessageCode::NotAnObject,
        MessageCode::NoLengthProperty,
        MessageCode::LengthTooShort,
        MessageCode::LengthTooLong,
        MessageCode::ValueTooLess,
        MessageCode::ValueTooGreat,
    ];

    /// The locale table key for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageCode::Required => "error_required",
            MessageCode::NotANumber => "error_not_a_number",
            MessageCode::NotAStrictNumber => "error_not_a_strict_number",
            MessageCode::NotAString => "error_not_a_string",
            MessageCode::NotAnArray => "error_not_a_array",
            MessageCode::NotAnObject => "error_not_a_object",
            MessageCode::NoLengthProperty => "error_no_length_property",
            MessageCode::LengthTooShort => "error_length_too_short",
            MessageCode::LengthTooLong => "error_length_too_long",
            MessageCode::ValueTooLess => "error_value_too_less",
            MessageCode::ValueTooGreat => "error_value_too_great",
        }
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageCode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        MessageCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("unknown message code: {s}"))
    }
}

impl Serialize for MessageCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
