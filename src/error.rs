//! Error types for the formula evaluators.
//!
//! Scalar formulas never fail; only the matrix routines and the checked
//! conversions into the typed domains return errors.

use thiserror::Error;

/// Crate-wide error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid ternary value: {0} (expected -1, 0 or 1)")]
    InvalidTernary(i8),

    #[error("Invalid Bell state index: {0} (expected 0..=3)")]
    InvalidBellIndex(u8),

    #[error("Ternary string of length {len} exceeds the 3^n state dimension range")]
    StateTooLarge { len: usize },
}

/// Result type for fallible operations
pub type Result<T> = std::result::Result<T, Error>;
