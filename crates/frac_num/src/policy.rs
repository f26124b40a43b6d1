//! Overflow policies deciding how integer primitives respond to range
//! violations.
//!
//! Every arithmetic step inside the engine funnels through one of these
//! markers, so swapping [`Checked`] for [`Unchecked`] changes behavior
//! globally without touching call sites.

use crate::error::NumError;
use crate::int::Int;

/// Selects the response to overflow, wraparound and zero divisors.
pub trait OverflowPolicy<T: Int> {
    fn add(a: &T, b: &T) -> Result<T, NumError>;
    fn sub(a: &T, b: &T) -> Result<T, NumError>;
    fn neg(a: &T) -> Result<T, NumError>;
    fn mul(a: &T, b: &T) -> Result<T, NumError>;
    fn div(a: &T, b: &T) -> Result<T, NumError>;
    fn rem(a: &T, b: &T) -> Result<T, NumError>;
}

/// Validates every operation against the backing type's range and fails
/// with [`NumError::Overflow`] (signed) or [`NumError::Wrap`] (unsigned)
/// before any wraparound happens. Zero divisors always surface as
/// [`NumError::DivisionByZero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checked;

fn range_error<T: Int>() -> NumError {
    if T::SIGNED {
        NumError::Overflow
    } else {
        NumError::Wrap
    }
}

impl<T: Int> OverflowPolicy<T> for Checked {
    fn add(a: &T, b: &T) -> Result<T, NumError> {
        a.checked_add(b).ok_or_else(range_error::<T>)
    }

    fn sub(a: &T, b: &T) -> Result<T, NumError> {
        a.checked_sub(b).ok_or_else(range_error::<T>)
    }

    fn neg(a: &T) -> Result<T, NumError> {
        a.checked_neg().ok_or_else(range_error::<T>)
    }

    fn mul(a: &T, b: &T) -> Result<T, NumError> {
        a.checked_mul(b).ok_or_else(range_error::<T>)
    }

    fn div(a: &T, b: &T) -> Result<T, NumError> {
        if b.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        a.checked_div(b).ok_or_else(range_error::<T>)
    }

    fn rem(a: &T, b: &T) -> Result<T, NumError> {
        if b.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        a.checked_rem(b).ok_or_else(range_error::<T>)
    }
}

/// Delegates straight to the plain operators: native wraparound semantics,
/// native panics on zero divisors, no range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unchecked;

impl<T: Int> OverflowPolicy<T> for Unchecked {
    fn add(a: &T, b: &T) -> Result<T, NumError> {
        Ok(a.clone() + b.clone())
    }

    fn sub(a: &T, b: &T) -> Result<T, NumError> {
        Ok(a.clone() - b.clone())
    }

    fn neg(a: &T) -> Result<T, NumError> {
        Ok(T::zero() - a.clone())
    }

    fn mul(a: &T, b: &T) -> Result<T, NumError> {
        Ok(a.clone() * b.clone())
    }

    fn div(a: &T, b: &T) -> Result<T, NumError> {
        Ok(a.clone() / b.clone())
    }

    fn rem(a: &T, b: &T) -> Result<T, NumError> {
        Ok(a.clone() % b.clone())
    }
}
