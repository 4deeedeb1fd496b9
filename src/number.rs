//! Numeric handling. Validation of the JSON number grammar is carried out by a small DFA
//! *before* any conversion takes place, given that fast_float will happily accept forms that
//! JSON doesn't allow (leading '+', multiple leading zeros, bare '.5' etc...).
//!
//! The grammar is the usual one:
//!
//! ```text
//! number = [ "-" ] int [ frac ] [ exp ]
//! int    = "0" / digit1-9 *digit
//! frac   = "." 1*digit
//! exp    = ("e" / "E") ["-" / "+"] 1*digit
//! ```
use crate::errors::ParserErrorDetails;

/// Positions within the number grammar
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumberState {
    /// Nothing consumed yet
    Start,
    /// A leading minus sign
    LeadingNegative,
    /// A single leading zero, which can only be followed by a fraction or an exponent
    LeadingZero,
    /// The first digit (1-9) of the integer part
    LeadingDigit,
    /// Subsequent digits of the integer part
    IntDigit,
    /// The decimal point
    Dot,
    /// Digits of the fractional part
    FracDigit,
    /// The exponent marker ('e' or 'E')
    Exp,
    /// The sign of the exponent
    ExpSign,
    /// Digits of the exponent
    ExpDigit,
}

/// The outcome of feeding a single byte into a [NumberState]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Move to the given state
    To(NumberState),
    /// A leading zero followed by something other than a fraction or exponent. The zero is a
    /// complete number in its own right, but whatever follows it can't be part of it
    Stop,
    /// No rule exists for the byte
    Reject,
}

impl NumberState {
    /// The transition function for the DFA
    pub fn next(self, byte: u8) -> Transition {
        use NumberState::*;
        use Transition::*;
        match (self, byte) {
            (Start, b'-') => To(LeadingNegative),
            (Start | LeadingNegative, b'0') => To(LeadingZero),
            (Start | LeadingNegative, b'1'..=b'9') => To(LeadingDigit),
            (LeadingZero | LeadingDigit | IntDigit, b'.') => To(Dot),
            (LeadingZero | LeadingDigit | IntDigit | FracDigit, b'e' | b'E') => To(Exp),
            (LeadingZero, _) => Stop,
            (LeadingDigit | IntDigit, b'0'..=b'9') => To(IntDigit),
            (Dot | FracDigit, b'0'..=b'9') => To(FracDigit),
            (Exp, b'+' | b'-') => To(ExpSign),
            (Exp | ExpSign | ExpDigit, b'0'..=b'9') => To(ExpDigit),
            _ => Reject,
        }
    }

    /// Is it syntactically complete to stop in this state?
    pub fn is_accepting(self) -> bool {
        matches!(
            self,
            NumberState::LeadingZero
                | NumberState::LeadingDigit
                | NumberState::FracDigit
                | NumberState::ExpDigit
        )
    }
}

/// Controls how far the validator scans
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum NumberScan {
    /// The whole of the remaining input must form a single number. A leading zero followed
    /// by anything else is reported as [ParserErrorDetails::RootNotSingular], any other
    /// stray byte as [ParserErrorDetails::InvalidValue]
    #[default]
    ToEndOfInput,
    /// The number is the longest valid prefix of the remaining input, and whatever follows
    /// is left for the caller to deal with
    Prefix,
}

/// Check that `input` starts with a valid JSON number, returning the length in bytes of the
/// span that makes up the number. Nothing is consumed.
pub fn validate(input: &[u8], scan: NumberScan) -> Result<usize, ParserErrorDetails> {
    let mut state = NumberState::Start;
    for (index, b) in input.iter().enumerate() {
        match (state.next(*b), scan) {
            (Transition::To(next), _) => state = next,
            (Transition::Stop, NumberScan::ToEndOfInput) => {
                return Err(ParserErrorDetails::RootNotSingular)
            }
            (Transition::Reject, NumberScan::ToEndOfInput) => {
                return Err(ParserErrorDetails::InvalidValue)
            }
            (Transition::Stop, NumberScan::Prefix) => return Ok(index),
            (Transition::Reject, NumberScan::Prefix) => {
                return if state.is_accepting() {
                    Ok(index)
                } else {
                    Err(ParserErrorDetails::InvalidValue)
                };
            }
        }
    }
    if state.is_accepting() {
        Ok(input.len())
    } else {
        Err(ParserErrorDetails::InvalidValue)
    }
}

/// Convert a validated span into an `f64`, returning the value along with the number of bytes
/// consumed. Out of range values are reported as [ParserErrorDetails::NumberTooBig].
pub fn convert(span: &[u8]) -> Result<(f64, usize), ParserErrorDetails> {
    match fast_float::parse_partial::<f64, _>(span) {
        Ok((_, 0)) | Err(_) => Err(ParserErrorDetails::InvalidValue),
        Ok((value, _)) if value.is_infinite() => Err(ParserErrorDetails::NumberTooBig),
        Ok((value, consumed)) => Ok((value, consumed)),
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ParserErrorDetails;
    use crate::number::{convert, validate, NumberScan, NumberState, Transition};

    #[test]
    fn should_follow_the_integer_transitions() {
        assert_eq!(
            NumberState::Start.next(b'-'),
            Transition::To(NumberState::LeadingNegative)
        );
        assert_eq!(
            NumberState::Start.next(b'0'),
            Transition::To(NumberState::LeadingZero)
        );
        assert_eq!(
            NumberState::LeadingNegative.next(b'7'),
            Transition::To(NumberState::LeadingDigit)
        );
        assert_eq!(
            NumberState::LeadingDigit.next(b'0'),
            Transition::To(NumberState::IntDigit)
        );
        assert_eq!(
            NumberState::IntDigit.next(b'9'),
            Transition::To(NumberState::IntDigit)
        );
    }

    #[test]
    fn should_follow_the_fraction_and_exponent_transitions() {
        assert_eq!(
            NumberState::LeadingZero.next(b'.'),
            Transition::To(NumberState::Dot)
        );
        assert_eq!(
            NumberState::Dot.next(b'3'),
            Transition::To(NumberState::FracDigit)
        );
        assert_eq!(
            NumberState::FracDigit.next(b'E'),
            Transition::To(NumberState::Exp)
        );
        assert_eq!(
            NumberState::Exp.next(b'+'),
            Transition::To(NumberState::ExpSign)
        );
        assert_eq!(
            NumberState::Exp.next(b'4'),
            Transition::To(NumberState::ExpDigit)
        );
        assert_eq!(
            NumberState::ExpSign.next(b'0'),
            Transition::To(NumberState::ExpDigit)
        );
        assert_eq!(
            NumberState::ExpDigit.next(b'1'),
            Transition::To(NumberState::ExpDigit)
        );
    }

    #[test]
    fn should_reject_bytes_without_a_rule() {
        assert_eq!(NumberState::Start.next(b'.'), Transition::Reject);
        assert_eq!(NumberState::Start.next(b'+'), Transition::Reject);
        assert_eq!(NumberState::LeadingNegative.next(b'-'), Transition::Reject);
        assert_eq!(NumberState::Dot.next(b'e'), Transition::Reject);
        assert_eq!(NumberState::FracDigit.next(b'.'), Transition::Reject);
        assert_eq!(NumberState::Exp.next(b'e'), Transition::Reject);
        assert_eq!(NumberState::ExpSign.next(b'-'), Transition::Reject);
        assert_eq!(NumberState::ExpDigit.next(b'.'), Transition::Reject);
        assert_eq!(NumberState::IntDigit.next(b' '), Transition::Reject);
    }

    #[test]
    fn should_stop_after_a_leading_zero() {
        assert_eq!(NumberState::LeadingZero.next(b'1'), Transition::Stop);
        assert_eq!(NumberState::LeadingZero.next(b'x'), Transition::Stop);
        assert_eq!(NumberState::LeadingZero.next(b' '), Transition::Stop);
    }

    #[test]
    fn should_only_accept_complete_states() {
        assert!(NumberState::LeadingZero.is_accepting());
        assert!(NumberState::LeadingDigit.is_accepting());
        assert!(NumberState::FracDigit.is_accepting());
        assert!(NumberState::ExpDigit.is_accepting());
        assert!(!NumberState::Start.is_accepting());
        assert!(!NumberState::LeadingNegative.is_accepting());
        assert!(!NumberState::Dot.is_accepting());
        assert!(!NumberState::Exp.is_accepting());
        assert!(!NumberState::ExpSign.is_accepting());
    }

    #[test]
    fn should_validate_the_whole_input() {
        let scan = NumberScan::ToEndOfInput;
        assert_eq!(validate(b"0", scan), Ok(1));
        assert_eq!(validate(b"-1.5e+10", scan), Ok(8));
        assert_eq!(validate(b"0123", scan), Err(ParserErrorDetails::RootNotSingular));
        assert_eq!(validate(b"0x0", scan), Err(ParserErrorDetails::RootNotSingular));
        assert_eq!(validate(b"1e", scan), Err(ParserErrorDetails::InvalidValue));
        assert_eq!(validate(b"1.", scan), Err(ParserErrorDetails::InvalidValue));
        assert_eq!(validate(b".5", scan), Err(ParserErrorDetails::InvalidValue));
        assert_eq!(validate(b"-", scan), Err(ParserErrorDetails::InvalidValue));
        assert_eq!(validate(b"12 ", scan), Err(ParserErrorDetails::InvalidValue));
    }

    #[test]
    fn should_validate_a_prefix() {
        let scan = NumberScan::Prefix;
        assert_eq!(validate(b"0123", scan), Ok(1));
        assert_eq!(validate(b"12 ", scan), Ok(2));
        assert_eq!(validate(b"1.25x", scan), Ok(4));
        assert_eq!(validate(b"3e7,", scan), Ok(3));
        assert_eq!(validate(b"1e", scan), Err(ParserErrorDetails::InvalidValue));
        assert_eq!(validate(b"1.x", scan), Err(ParserErrorDetails::InvalidValue));
        assert_eq!(validate(b"x", scan), Err(ParserErrorDetails::InvalidValue));
    }

    #[test]
    fn should_convert_validated_spans() {
        assert_eq!(convert(b"1.5"), Ok((1.5, 3)));
        assert_eq!(convert(b"-0"), Ok((-0.0, 2)));
        assert_eq!(convert(b"1E-10"), Ok((1e-10, 5)));
    }

    #[test]
    fn should_detect_overflow() {
        assert_eq!(convert(b"1e400"), Err(ParserErrorDetails::NumberTooBig));
        assert_eq!(convert(b"-1e309"), Err(ParserErrorDetails::NumberTooBig));
    }

    #[test]
    fn should_underflow_to_zero() {
        assert_eq!(convert(b"1e-400"), Ok((0.0, 6)));
    }

    #[test]
    fn should_fail_when_nothing_is_consumed() {
        assert_eq!(convert(b""), Err(ParserErrorDetails::InvalidValue));
        assert_eq!(convert(b"x"), Err(ParserErrorDetails::InvalidValue));
    }
}
