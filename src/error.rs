use thiserror::Error;

/// Failure to parse a decimal integer.
///
/// Empty, malformed and out-of-range input all map to this one error; the
/// parser does not report which of them occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("invalid decimal integer literal")]
pub struct ParseError;
