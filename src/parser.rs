//! The parser
//!
//! A [Parser] drives a single parse of a root value: leading whitespace is skipped, exactly
//! one value is matched and then, after any trailing whitespace, the input must be exhausted.
//! Parsers are small `Copy` values which carry configuration only, so a single instance may
//! be shared freely between threads.
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::decoders::{DecoderSelector, Encoding};
use crate::errors::{ParserErrorDetails, ParserResult};
use crate::lexer::{literal_for, match_literal, match_number};
use crate::number::NumberScan;
use crate::parser_error;
use crate::JsonValue;

/// Main JSON parser struct
#[derive(Debug, Copy, Clone, Default)]
pub struct Parser {
    decoders: DecoderSelector,
    encoding: Encoding,
    scan: NumberScan,
}

impl Parser {
    /// Create a new instance of the parser using a specific [Encoding]
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self {
            encoding,
            ..Default::default()
        }
    }

    /// Switch the way in which numbers are scanned
    pub fn with_number_scan(self, scan: NumberScan) -> Self {
        Self { scan, ..self }
    }

    /// The [Encoding] used when parsing bytes and files
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The [NumberScan] mode used when validating numbers
    pub fn number_scan(&self) -> NumberScan {
        self.scan
    }

    /// Parse a file, decoding its contents using the configured [Encoding]
    pub fn parse_file<PathLike: AsRef<Path>>(&self, path: PathLike) -> ParserResult<JsonValue> {
        match fs::read(&path) {
            Ok(bytes) => self.parse_bytes(&bytes),
            Err(err) => {
                debug!(path = %path.as_ref().display(), error = %err, "failed to read input file");
                parser_error!(ParserErrorDetails::InvalidFile)
            }
        }
    }

    /// Parse a slice of bytes, decoding them using the configured [Encoding]
    pub fn parse_bytes(&self, bytes: &[u8]) -> ParserResult<JsonValue> {
        match self.decoders.decode_bytes(bytes, self.encoding) {
            Some(decoded) => self.parse_str(&decoded),
            None => {
                debug!(length = bytes.len(), encoding = ?self.encoding, "input could not be decoded");
                parser_error!(ParserErrorDetails::NonUtf8InputDetected)
            }
        }
    }

    /// Parse a string slice and return the resulting [JsonValue]
    pub fn parse_str(&self, json: &str) -> ParserResult<JsonValue> {
        let mut value = JsonValue::Null;
        self.parse_into(&mut value, json)?;
        Ok(value)
    }

    /// Parse a string slice into a caller supplied [JsonValue]. The value is reset to
    /// [JsonValue::Null] up front, and is left as [JsonValue::Null] on any failure.
    pub fn parse_into(&self, value: &mut JsonValue, json: &str) -> ParserResult<()> {
        *value = JsonValue::Null;
        let mut cursor = Cursor::new(json);
        trace!(length = json.len(), scan = ?self.scan, "parsing root value");
        cursor.skip_whitespace();
        let parsed = match self.parse_value(&mut cursor) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(status = err.details.status(), coords = ?err.coords, "rejected value");
                return Err(err);
            }
        };
        cursor.skip_whitespace();
        if !cursor.is_end() {
            debug!(coords = %cursor.coords(), "trailing content after root value");
            return parser_error!(ParserErrorDetails::RootNotSingular, cursor.coords());
        }
        *value = parsed;
        Ok(())
    }

    /// Dispatch on the lookahead to match a single value
    fn parse_value(&self, cursor: &mut Cursor) -> ParserResult<JsonValue> {
        match cursor.lookahead() {
            None => parser_error!(ParserErrorDetails::ExpectValue, cursor.coords()),
            Some(lead) => match literal_for(lead) {
                Some(literal) => match_literal(cursor, literal),
                None => match_number(cursor, self.scan),
            },
        }
    }
}
