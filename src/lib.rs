//! Bounded Integer Parsing
//!
//! Allocation-free conversion of ASCII decimal digits into any primitive
//! integer width, with overflow and underflow caught before they happen.
//! Failure is reported through a validity flag, never a panic.

pub mod atoi;
pub mod baselines;
pub mod bench;
pub mod config;
pub mod error;
pub mod integer;

pub use atoi::{
    parse, parse_positive, parse_positive_unchecked, parse_str, BoundedParser, Parsed,
    PositiveParser, UncheckedParser,
};
pub use error::ParseError;
pub use integer::Integer;

/// Trait for integer parsing implementations
///
/// Implementations parse a byte slice holding a decimal integer into `T`.
pub trait IntParse<T: Integer> {
    /// Parse a byte slice as a decimal integer
    /// Returns None if the input is invalid (empty, non-digit, overflow)
    fn parse(&self, input: &[u8]) -> Option<T>;
}
