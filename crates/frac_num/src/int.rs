//! Integer capability contract shared by every fraction backing type.
//!
//! The engine works over any integer representation that can report its
//! signedness, its representable range and the outcome of checked
//! arithmetic. Fixed-width primitives and [`BigInt`] both qualify; a
//! bignum simply answers `None` for its bounds and never fails a checked
//! operation short of a zero divisor.

use std::fmt;
use std::hash::Hash;

use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

/// Operations the fraction engine requires from an integer backing type.
///
/// The supertraits pull in ring arithmetic, truncated `div_rem`, integer
/// square roots and primitive conversions; the methods below add the
/// checked-arithmetic surface that overflow policies are built from.
pub trait Int:
    Integer + Roots + Clone + Hash + fmt::Debug + fmt::Display + FromPrimitive + ToPrimitive
{
    /// Whether the representation carries a sign.
    const SIGNED: bool;

    fn checked_add(&self, rhs: &Self) -> Option<Self>;
    fn checked_sub(&self, rhs: &Self) -> Option<Self>;
    fn checked_mul(&self, rhs: &Self) -> Option<Self>;

    /// `None` on a zero divisor, and on the lone overflowing quotient of
    /// bounded signed types (`MIN / -1`).
    fn checked_div(&self, rhs: &Self) -> Option<Self>;

    /// Mirrors [`Int::checked_div`] for the truncated remainder.
    fn checked_rem(&self, rhs: &Self) -> Option<Self>;

    fn checked_neg(&self) -> Option<Self>;

    /// Absolute value for signed representations, identity for unsigned.
    ///
    /// For bounded signed types `magnitude(MIN)` is not representable and
    /// wraps back to `MIN`; callers that may face it go through
    /// [`Int::checked_neg`] instead.
    fn magnitude(self) -> Self;

    /// Smallest representable value, `None` when the range is unbounded below.
    fn min_value() -> Option<Self>;

    /// Largest representable value, `None` when the range is unbounded above.
    fn max_value() -> Option<Self>;

    /// Small constant used for digit and radix values. `d` is at most 36.
    fn from_digit(d: u8) -> Self;
}

macro_rules! signed_int_impl {
    ($($t:ty),*) => {$(
        impl Int for $t {
            const SIGNED: bool = true;

            fn checked_add(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_add(*self, *rhs)
            }
            fn checked_sub(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_sub(*self, *rhs)
            }
            fn checked_mul(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_mul(*self, *rhs)
            }
            fn checked_div(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_div(*self, *rhs)
            }
            fn checked_rem(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_rem(*self, *rhs)
            }
            fn checked_neg(&self) -> Option<Self> {
                <$t>::checked_neg(*self)
            }
            fn magnitude(self) -> Self {
                self.wrapping_abs()
            }
            fn min_value() -> Option<Self> {
                Some(<$t>::MIN)
            }
            fn max_value() -> Option<Self> {
                Some(<$t>::MAX)
            }
            fn from_digit(d: u8) -> Self {
                d as $t
            }
        }
    )*};
}

macro_rules! unsigned_int_impl {
    ($($t:ty),*) => {$(
        impl Int for $t {
            const SIGNED: bool = false;

            fn checked_add(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_add(*self, *rhs)
            }
            fn checked_sub(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_sub(*self, *rhs)
            }
            fn checked_mul(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_mul(*self, *rhs)
            }
            fn checked_div(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_div(*self, *rhs)
            }
            fn checked_rem(&self, rhs: &Self) -> Option<Self> {
                <$t>::checked_rem(*self, *rhs)
            }
            fn checked_neg(&self) -> Option<Self> {
                <$t>::checked_neg(*self)
            }
            fn magnitude(self) -> Self {
                self
            }
            fn min_value() -> Option<Self> {
                Some(<$t>::MIN)
            }
            fn max_value() -> Option<Self> {
                Some(<$t>::MAX)
            }
            fn from_digit(d: u8) -> Self {
                d as $t
            }
        }
    )*};
}

signed_int_impl!(i8, i16, i32, i64, i128, isize);
unsigned_int_impl!(u8, u16, u32, u64, u128, usize);

impl Int for BigInt {
    const SIGNED: bool = true;

    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(self - rhs)
    }
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Some(self * rhs)
    }
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self / rhs)
        }
    }
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self % rhs)
        }
    }
    fn checked_neg(&self) -> Option<Self> {
        Some(-self)
    }
    fn magnitude(self) -> Self {
        self.abs()
    }
    fn min_value() -> Option<Self> {
        None
    }
    fn max_value() -> Option<Self> {
        None
    }
    fn from_digit(d: u8) -> Self {
        BigInt::from(d)
    }
}

/// Digits of `|v|` in the given base, with `digit_count(0) == 0`.
pub(crate) fn digit_count<T: Int>(v: &T, base: u8) -> usize {
    let base = T::from_digit(base);
    let mut n = v.clone().magnitude();
    let mut count = 0;
    while !n.is_zero() {
        n = n / base.clone();
        count += 1;
    }
    count
}
