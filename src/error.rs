//! Error types for the vector kernel.

use thiserror::Error;

/// Vector kernel error types.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VektorError {
    /// Operands of a binary operation have different lengths.
    ///
    /// `expected` is the receiver's (left operand's) dimension.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Result type alias for kernel operations.
pub type Result<T> = std::result::Result<T, VektorError>;

/// Fail fast unless both dimensions agree.
#[inline]
pub(crate) fn check_dimensions(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(VektorError::DimensionMismatch { expected, got });
    }
    Ok(())
}
