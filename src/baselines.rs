//! Baseline implementations for integer parsing

use crate::integer::Integer;
use crate::IntParse;

/// Standard library parser using str::parse
#[derive(Debug, Clone, Copy, Default)]
pub struct StdParser;

impl<T: Integer> IntParse<T> for StdParser {
    #[inline]
    fn parse(&self, input: &[u8]) -> Option<T> {
        std::str::from_utf8(input).ok()?.parse().ok()
    }
}

/// Naive byte-by-byte parser built on checked arithmetic
/// Negative input accumulates downwards so MIN parses
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveParser;

impl<T: Integer> IntParse<T> for NaiveParser {
    #[inline]
    fn parse(&self, input: &[u8]) -> Option<T> {
        let (negative, digits) = match input.split_first()? {
            (&b'-', rest) if T::SIGNED => (true, rest),
            (&b'-', _) => return None,
            (&b'+', rest) => (false, rest),
            _ => (false, input),
        };

        if digits.is_empty() {
            return None;
        }

        let mut result = T::ZERO;
        for &byte in digits {
            if !byte.is_ascii_digit() {
                return None;
            }
            let digit = byte - b'0';
            result = if negative {
                result.checked_push_digit_negative(digit)?
            } else {
                result.checked_push_digit(digit)?
            };
        }
        Some(result)
    }
}
