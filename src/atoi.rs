//! Bounded decimal integer parser
//!
//! Digits are folded one at a time and every fold is preceded by a comparison
//! against the target type's cutoff, so overflow is detected before it
//! happens. Negative numbers accumulate downwards from zero, which is what
//! lets the most negative value of every signed width parse exactly.

use crate::error::ParseError;
use crate::integer::Integer;
use crate::IntParse;

/// A parsed value together with its validity flag.
///
/// When `valid` is false, `value` holds whatever had been accumulated when
/// the parser gave up and carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub valid: bool,
}

impl<T: Integer> Parsed<T> {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn ok(self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<T, ParseError> {
        self.ok().ok_or(ParseError)
    }
}

#[inline(always)]
fn valid<T>(value: T) -> Parsed<T> {
    Parsed { value, valid: true }
}

#[cold]
#[inline(never)]
fn invalid<T>(value: T) -> Parsed<T> {
    Parsed { value, valid: false }
}

/// Parse an optionally signed base-10 integer.
///
/// Accepts one leading `+` or `-` followed by at least one ASCII digit and
/// nothing else. A leading `-` is rejected for unsigned types, even for
/// `"-0"`. No whitespace is trimmed.
///
/// ```
/// use bounded_atoi::parse;
///
/// assert_eq!(parse::<i64>(b"-9223372036854775808").ok(), Some(i64::MIN));
/// assert_eq!(parse::<u8>(b"256").ok(), None);
/// assert!(!parse::<u32>(b"-0").valid);
/// ```
#[inline]
pub fn parse<T: Integer>(input: &[u8]) -> Parsed<T> {
    match input {
        [] => invalid(T::ZERO),
        [b'-', rest @ ..] => {
            if !T::SIGNED || rest.is_empty() {
                return invalid(T::ZERO);
            }
            accumulate_negative(rest)
        }
        [b'+', rest @ ..] => {
            if rest.is_empty() {
                return invalid(T::ZERO);
            }
            accumulate_positive(rest)
        }
        _ => accumulate_positive(input),
    }
}

/// [`parse`] for string slices.
#[inline]
pub fn parse_str<T: Integer>(input: &str) -> Parsed<T> {
    parse(input.as_bytes())
}

/// Parse an unsigned digit run with full validation but no sign handling.
///
/// A leading `+` or `-` is treated like any other non-digit.
#[inline]
pub fn parse_positive<T: Integer>(input: &[u8]) -> Parsed<T> {
    if input.is_empty() {
        return invalid(T::ZERO);
    }
    accumulate_positive(input)
}

/// Fold a digit run without any character or range checks.
///
/// Only for input the caller has already validated as an in-range digit run.
/// On anything else the result is unspecified. Arithmetic wraps, so misuse
/// produces garbage rather than a panic.
#[inline]
pub fn parse_positive_unchecked<T: Integer>(input: &[u8]) -> T {
    input.iter().fold(T::ZERO, |result, &byte| {
        result.wrapping_push_digit(byte.wrapping_sub(b'0'))
    })
}

// `digits` must not be empty
#[inline]
fn accumulate_positive<T: Integer>(digits: &[u8]) -> Parsed<T> {
    debug_assert!(!digits.is_empty());

    let mut result = T::ZERO;
    for &byte in digits {
        let digit = byte.wrapping_sub(b'0');
        if digit > 9 {
            return invalid(result);
        }
        if result > T::POSITIVE_CUTOFF
            || (result == T::POSITIVE_CUTOFF && digit > T::POSITIVE_LIMIT)
        {
            return invalid(result);
        }
        result = result.push_digit(digit);
    }
    valid(result)
}

// `digits` must not be empty
#[inline]
fn accumulate_negative<T: Integer>(digits: &[u8]) -> Parsed<T> {
    debug_assert!(!digits.is_empty());

    let mut result = T::ZERO;
    for &byte in digits {
        let digit = byte.wrapping_sub(b'0');
        if digit > 9 {
            return invalid(result);
        }
        if result < T::NEGATIVE_CUTOFF
            || (result == T::NEGATIVE_CUTOFF && digit > T::NEGATIVE_LIMIT)
        {
            return invalid(result);
        }
        result = result.push_digit_negative(digit);
    }
    valid(result)
}

/// Signed parser, see [`parse`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedParser;

impl<T: Integer> IntParse<T> for BoundedParser {
    #[inline]
    fn parse(&self, input: &[u8]) -> Option<T> {
        parse(input).ok()
    }
}

/// Checked digit-run parser, see [`parse_positive`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveParser;

impl<T: Integer> IntParse<T> for PositiveParser {
    #[inline]
    fn parse(&self, input: &[u8]) -> Option<T> {
        parse_positive(input).ok()
    }
}

/// Unchecked digit-run parser, see [`parse_positive_unchecked`]
#[derive(Debug, Clone, Copy, Default)]
pub struct UncheckedParser;

impl<T: Integer> IntParse<T> for UncheckedParser {
    #[inline]
    fn parse(&self, input: &[u8]) -> Option<T> {
        Some(parse_positive_unchecked(input))
    }
}
