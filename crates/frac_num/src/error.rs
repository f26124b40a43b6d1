//! Error types for the frac_num crate.

use thiserror::Error;

/// Errors reported by fraction construction, arithmetic and codecs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumError {
    /// Zero denominator at construction, inversion of zero, or a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A checked operation on a signed backing type left its representable range.
    #[error("arithmetic overflow")]
    Overflow,

    /// A checked operation on an unsigned backing type would wrap around.
    #[error("arithmetic wrap")]
    Wrap,

    /// A floating-point source cannot be captured by the backing type.
    #[error("value not representable for approximation")]
    ApproximationOverflow,

    /// Operation applied outside its mathematical domain.
    #[error("domain error: {0}")]
    Domain(String),

    /// A numeric literal could not be read.
    #[error("invalid numeric literal: {0}")]
    InvalidLiteral(String),
}
