//! Matching of individual values at the current [Cursor] position. Literals are matched
//! exactly against a static table of descriptors, numbers are validated by the DFA within
//! [crate::number] and then converted.
use crate::cursor::Cursor;
use crate::errors::{ParserErrorDetails, ParserResult};
use crate::number::{self, NumberScan};
use crate::parser_error;
use crate::JsonValue;

/// Pairs the spelling of a literal with the value it produces
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Literal {
    /// The exact sequence of characters making up the literal
    pub spelling: &'static str,
    /// The value produced by a successful match
    pub value: JsonValue,
}

/// The 'null' literal
pub(crate) const NULL_LITERAL: Literal = Literal {
    spelling: "null",
    value: JsonValue::Null,
};
/// The 'true' literal
pub(crate) const TRUE_LITERAL: Literal = Literal {
    spelling: "true",
    value: JsonValue::True,
};
/// The 'false' literal
pub(crate) const FALSE_LITERAL: Literal = Literal {
    spelling: "false",
    value: JsonValue::False,
};

/// All the literals, keyed on their leading character
pub(crate) static LITERALS: [Literal; 3] = [NULL_LITERAL, TRUE_LITERAL, FALSE_LITERAL];

/// Look up the literal that starts with a given byte
pub(crate) fn literal_for(lead: u8) -> Option<&'static Literal> {
    LITERALS
        .iter()
        .find(|literal| literal.spelling.as_bytes()[0] == lead)
}

/// Consume and match (exactly) the spelling of a literal. On a mismatch the cursor is left
/// at the offending byte.
pub(crate) fn match_literal(cursor: &mut Cursor, literal: &Literal) -> ParserResult<JsonValue> {
    for expected in literal.spelling.bytes() {
        if cursor.lookahead() != Some(expected) {
            return parser_error!(ParserErrorDetails::InvalidValue, cursor.coords());
        }
        cursor.advance();
    }
    Ok(literal.value)
}

/// Validate and then convert a number, consuming exactly the bytes that make it up
pub(crate) fn match_number(cursor: &mut Cursor, scan: NumberScan) -> ParserResult<JsonValue> {
    let start_coords = cursor.coords();
    let remaining = cursor.remaining();
    let length = match number::validate(remaining, scan) {
        Ok(length) => length,
        Err(details) => return parser_error!(details, start_coords),
    };
    match number::convert(&remaining[..length]) {
        Ok((value, consumed)) => {
            cursor.advance_by(consumed);
            Ok(JsonValue::Number(value))
        }
        Err(details) => parser_error!(details, start_coords),
    }
}
