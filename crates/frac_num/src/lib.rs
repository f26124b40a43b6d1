//! Exact fraction arithmetic over pluggable integer backings.
//!
//! The core type is [`Rational`], a numerator/denominator pair kept in
//! lowest terms with the sign on the numerator. It is generic over
//! three axes:
//!
//! - the integer backing, any type satisfying the [`Int`] contract
//!   (all signed/unsigned primitives and [`num_bigint::BigInt`]);
//! - the reduction strategy, a [`GcdStrategy`] implementation;
//! - the [`OverflowPolicy`], either [`Checked`] or [`Unchecked`].
//!
//! Arithmetic is explicit and fallible: operations borrow their
//! operands and return `Result`, so range violations and zero divisors
//! surface as [`NumError`] values instead of panics.
//!
//! ```
//! use frac_num::Rat64;
//!
//! let a = Rat64::new(17, 21)?;
//! let b = Rat64::new(44, 35)?;
//! assert_eq!(a.add(&b)?, Rat64::new(31, 15)?);
//! # Ok::<(), frac_num::NumError>(())
//! ```
//!
//! Beyond arithmetic the crate carries the codecs of the fraction
//! engine: float capture by continued fractions ([`Rational::approximate`]),
//! repeating-decimal decomposition ([`Rational::decompose`]) and the
//! continued-fraction term codec ([`Rational::terms`],
//! [`Rational::from_terms`]).

mod approx;
mod arith;
pub mod contfrac;
pub mod cycle;
pub mod decimal;
pub mod error;
pub mod gcd;
pub mod int;
pub mod policy;
pub mod rational;
mod roots;

#[cfg(test)]
mod proptests;

pub use contfrac::Terms;
pub use cycle::{find_cycle, Cycle};
pub use decimal::RepeatInfo;
pub use error::NumError;
pub use gcd::{EuclidGcd, FastEuclidGcd, GcdStrategy, NoGcd, SteinGcd};
pub use int::Int;
pub use policy::{Checked, OverflowPolicy, Unchecked};
pub use rational::{Mixed, MixedDisplay, Rational};
pub use roots::DEFAULT_SQRT_DIGITS;

/// `i32`-backed fraction with the default strategy and policy.
pub type Rat32 = Rational<i32>;

/// `i64`-backed fraction with the default strategy and policy.
pub type Rat64 = Rational<i64>;

/// Arbitrary-precision fraction with the default strategy and policy.
pub type BigRat = Rational<num_bigint::BigInt>;
