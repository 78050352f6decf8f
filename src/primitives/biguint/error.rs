use thiserror::Error;

/// Errors reported by fallible `BigUint` operations.
///
/// All variants are recoverable value-level failures; no operation retries
/// internally or clamps a result to make it representable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigUintError {
    /// The hex input contained no digits.
    #[error("empty hex input")]
    EmptyInput,

    /// The hex input contained a character outside `[0-9a-fA-F]`.
    ///
    /// `index` is the byte offset of `found` within the input.
    #[error("malformed hex input: unexpected {found:?} at byte {index}")]
    MalformedHexInput { index: usize, found: char },

    /// The subtrahend was larger than the minuend.
    #[error("subtraction result would be negative")]
    NegativeResult,
}

/// Result type for `BigUint` operations.
pub type Result<T> = std::result::Result<T, BigUintError>;
