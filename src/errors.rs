//! General error types for the parser

use std::fmt::{Display, Formatter};

use crate::coords::Coords;

/// Global result type used throughout the parser stages
pub type ParserResult<T> = Result<T, ParserError>;

/// A global enumeration of error codes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParserErrorDetails {
    /// The input was empty or contained nothing but whitespace
    ExpectValue,
    /// The lookahead or the number grammar didn't match any known value
    InvalidValue,
    /// A complete value was followed by further non-whitespace content
    RootNotSingular,
    /// A syntactically valid number fell outside the range of an `f64`
    NumberTooBig,
    /// A file couldn't be opened for parsing
    InvalidFile,
    /// The supplied bytes couldn't be decoded using the selected encoding
    NonUtf8InputDetected,
}

impl ParserErrorDetails {
    /// The conventional status name for each error
    pub fn status(&self) -> &'static str {
        match self {
            ParserErrorDetails::ExpectValue => "EXPECT_VALUE",
            ParserErrorDetails::InvalidValue => "INVALID_VALUE",
            ParserErrorDetails::RootNotSingular => "ROOT_NOT_SINGULAR",
            ParserErrorDetails::NumberTooBig => "NUMBER_TOO_BIG",
            ParserErrorDetails::InvalidFile => "INVALID_FILE",
            ParserErrorDetails::NonUtf8InputDetected => "NON_UTF8_INPUT",
        }
    }
}

impl Display for ParserErrorDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserErrorDetails::ExpectValue => write!(f, "expected a value"),
            ParserErrorDetails::InvalidValue => write!(f, "invalid value"),
            ParserErrorDetails::RootNotSingular => {
                write!(f, "unexpected content after the root value")
            }
            ParserErrorDetails::NumberTooBig => write!(f, "number too big"),
            ParserErrorDetails::InvalidFile => write!(f, "invalid file"),
            ParserErrorDetails::NonUtf8InputDetected => write!(f, "undecodable input"),
        }
    }
}

/// The general error structure
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParserError {
    /// The global error code for the error
    pub details: ParserErrorDetails,
    /// Optional parser coordinates
    pub coords: Option<Coords>,
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.coords {
            Some(coords) => write!(
                f,
                "{} ({}) at {}",
                self.details,
                self.details.status(),
                coords
            ),
            None => write!(f, "{} ({})", self.details, self.details.status()),
        }
    }
}

impl std::error::Error for ParserError {}

#[macro_export]
macro_rules! parser_error {
    ($details: expr, $coords: expr) => {
        Err($crate::errors::ParserError {
            details: $details,
            coords: Some($coords),
        })
    };
    ($details: expr) => {
        Err($crate::errors::ParserError {
            details: $details,
            coords: None,
        })
    };
}
