//! A small recursive-descent parser for JSON scalar values: `null`, `true`, `false` and
//! numbers.
//!
//! ```
//! use chisel_scalar::{parse, JsonType, JsonValue};
//!
//! let mut value = JsonValue::default();
//! assert!(parse(&mut value, " -1.5e3 ").is_err());
//! assert!(parse(&mut value, " -1.5e3").is_ok());
//! assert_eq!(value.get_type(), JsonType::Number);
//! assert_eq!(value.get_number(), -1500.0);
//! ```
use std::fmt::{Display, Formatter};

use crate::errors::ParserResult;
use crate::parser::Parser;

pub mod coords;
mod cursor;
pub mod decoders;
pub mod errors;
mod lexer;
pub mod number;
pub mod parser;

/// The type discriminant of a [JsonValue]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    False,
    True,
    Number,
}

/// Basic enumeration of different Json values
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// Canonical null value
    #[default]
    Null,
    /// Canonical false value
    False,
    /// Canonical true value
    True,
    /// Floating point numeric value
    Number(f64),
}

impl JsonValue {
    /// Get the type discriminant for the value
    pub fn get_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::False => JsonType::False,
            JsonValue::True => JsonType::True,
            JsonValue::Number(_) => JsonType::Number,
        }
    }

    /// Get the numeric payload of the value.
    ///
    /// # Panics
    ///
    /// Panics if the value isn't a [JsonValue::Number]. Use [JsonValue::as_number] where the
    /// type isn't already known.
    pub fn get_number(&self) -> f64 {
        match self {
            JsonValue::Number(n) => *n,
            other => panic!(
                "attempted to read a number from a value of type {:?}",
                other.get_type()
            ),
        }
    }

    /// Get the numeric payload of the value, if there is one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        if value {
            JsonValue::True
        } else {
            JsonValue::False
        }
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value)
    }
}

impl Display for JsonValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonValue::Null => write!(f, "null"),
            JsonValue::False => write!(f, "false"),
            JsonValue::True => write!(f, "true"),
            JsonValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Parse a single root value from `json` into `value`, using a default [Parser]. On failure
/// `value` is left as [JsonValue::Null].
pub fn parse(value: &mut JsonValue, json: &str) -> ParserResult<()> {
    Parser::default().parse_into(value, json)
}
