//! Pluggable greatest-common-divisor strategies.
//!
//! Reduction cost dominates fraction arithmetic, so the divisor
//! computation is a type parameter of [`Rational`](crate::Rational)
//! rather than a fixed algorithm. All strategies agree on results; they
//! differ in the operator contract they require from the backing type
//! and in how they respond to pathological inputs.

use std::ops::{BitXor, Shl, Shr};

use crate::error::NumError;
use crate::int::Int;
use crate::policy::OverflowPolicy;

/// Computes the non-negative divisor used to put a fraction in lowest
/// terms.
///
/// For nonzero inputs the result is the greatest common divisor of their
/// magnitudes; `gcd(x, 0)` reports `|x|`.
pub trait GcdStrategy<T: Int> {
    fn gcd<P: OverflowPolicy<T>>(a: T, b: T) -> Result<T, NumError>;
}

/// Euclid's remainder loop over the policy's checked remainder.
///
/// The default strategy: honors the active [`OverflowPolicy`], so a
/// remainder that cannot be represented surfaces as an error instead of
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EuclidGcd;

impl<T: Int> GcdStrategy<T> for EuclidGcd {
    fn gcd<P: OverflowPolicy<T>>(mut a: T, mut b: T) -> Result<T, NumError> {
        while !b.is_zero() {
            let r = P::rem(&a, &b)?;
            a = std::mem::replace(&mut b, r);
        }
        let g = a.magnitude();
        if g < T::zero() {
            // |MIN| of a bounded type wraps
            return Err(NumError::Overflow);
        }
        Ok(g)
    }
}

/// Euclid's loop with the plain remainder operator and the three-step
/// XOR swap.
///
/// Skips the checked-operator contract entirely, so it carries the
/// native wraparound and divide-fault behavior of the backing type.
/// Requires bitwise XOR on the representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FastEuclidGcd;

impl<T> GcdStrategy<T> for FastEuclidGcd
where
    T: Int + BitXor<Output = T>,
{
    fn gcd<P: OverflowPolicy<T>>(mut a: T, mut b: T) -> Result<T, NumError> {
        while !b.is_zero() {
            a = a % b.clone();
            a = a ^ b.clone();
            b = b ^ a.clone();
            a = a ^ b.clone();
        }
        Ok(a.magnitude())
    }
}

/// Stein's binary algorithm: shifts and subtractions only, no division.
///
/// Both inputs are taken by magnitude up front, so an input whose
/// magnitude is not representable (`MIN` of a bounded signed type)
/// fails with [`NumError::Overflow`]. A shared shift counter records
/// the common factors of two and restores them at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteinGcd;

impl<T> GcdStrategy<T> for SteinGcd
where
    T: Int + Shl<u32, Output = T> + Shr<u32, Output = T>,
{
    fn gcd<P: OverflowPolicy<T>>(a: T, b: T) -> Result<T, NumError> {
        let mut a = a.magnitude();
        let mut b = b.magnitude();
        if a < T::zero() || b < T::zero() {
            return Err(NumError::Overflow);
        }
        let mut shift = 0u32;
        while !b.is_zero() {
            if a < b {
                std::mem::swap(&mut a, &mut b);
            }
            if a.is_even() {
                if b.is_even() {
                    a = a >> 1;
                    b = b >> 1;
                    shift += 1;
                } else {
                    a = a >> 1;
                }
            } else if b.is_even() {
                b = b >> 1;
            } else {
                a = a - b.clone();
            }
        }
        Ok(a << shift)
    }
}

/// Disables reduction: the reported divisor is always one.
///
/// For call sites that can tolerate growing terms through a chain of
/// operations and reduce once at the end, e.g. via
/// [`Rational::normalize`](crate::Rational::normalize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoGcd;

impl<T: Int> GcdStrategy<T> for NoGcd {
    fn gcd<P: OverflowPolicy<T>>(_a: T, _b: T) -> Result<T, NumError> {
        Ok(T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Checked, Unchecked};

    fn euclid(a: i64, b: i64) -> i64 {
        <EuclidGcd as GcdStrategy<i64>>::gcd::<Checked>(a, b).unwrap()
    }

    #[test]
    fn euclid_basics() {
        assert_eq!(euclid(12, 18), 6);
        assert_eq!(euclid(-12, 18), 6);
        assert_eq!(euclid(12, -18), 6);
        assert_eq!(euclid(-12, -18), 6);
        assert_eq!(euclid(7, 13), 1);
        assert_eq!(euclid(0, 5), 5);
        assert_eq!(euclid(5, 0), 5);
        assert_eq!(euclid(0, 0), 0);
    }

    #[test]
    fn strategies_agree() {
        let cases = [
            (48i64, 36),
            (-48, 36),
            (1, 999_983),
            (2 * 3 * 5 * 7, 3 * 5 * 11),
            (1 << 40, 1 << 22),
            (0, 17),
        ];
        for (a, b) in cases {
            let e = euclid(a, b);
            let f = <FastEuclidGcd as GcdStrategy<i64>>::gcd::<Unchecked>(a, b).unwrap();
            let s = <SteinGcd as GcdStrategy<i64>>::gcd::<Checked>(a, b).unwrap();
            assert_eq!(e, f, "fast euclid disagrees on ({a}, {b})");
            assert_eq!(e, s, "stein disagrees on ({a}, {b})");
        }
    }

    #[test]
    fn stein_restores_shared_twos() {
        let g = <SteinGcd as GcdStrategy<i64>>::gcd::<Checked>(96, 160).unwrap();
        assert_eq!(g, 32);
    }

    #[test]
    fn null_strategy_reports_one() {
        let g = <NoGcd as GcdStrategy<i64>>::gcd::<Checked>(48, 36).unwrap();
        assert_eq!(g, 1);
    }

    #[test]
    fn euclid_works_on_bigint() {
        use num_bigint::BigInt;
        use num_traits::Pow;
        let a = BigInt::from(2u8) * BigInt::from(10u8).pow(40u32);
        let b = BigInt::from(6u8) * BigInt::from(10u8).pow(30u32);
        let g = <EuclidGcd as GcdStrategy<BigInt>>::gcd::<Checked>(a, b).unwrap();
        assert_eq!(g, BigInt::from(2u8) * BigInt::from(10u8).pow(30u32));
    }
}
