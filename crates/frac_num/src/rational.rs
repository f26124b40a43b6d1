//! The reduced-fraction value type.
//!
//! A [`Rational`] is a numerator/denominator pair kept in lowest terms
//! with a strictly positive denominator. Reduction runs through the
//! [`GcdStrategy`] type parameter and every integer step runs through
//! the [`OverflowPolicy`] parameter, so the same value type covers
//! checked and unchecked arithmetic over any [`Int`] backing.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::NumError;
use crate::gcd::{EuclidGcd, GcdStrategy};
use crate::int::Int;
use crate::policy::{Checked, OverflowPolicy};

/// An exact fraction in lowest terms.
///
/// The denominator is always positive; the numerator carries the sign.
/// `G` selects the reduction strategy and `P` the overflow policy; both
/// default to the safe choices.
pub struct Rational<T, G = EuclidGcd, P = Checked> {
    pub(crate) num: T,
    pub(crate) den: T,
    marker: PhantomData<(G, P)>,
}

/// Whole part and leftover fraction of a [`Rational`], from truncated
/// division. The fraction keeps the numerator's sign.
pub struct Mixed<T, G = EuclidGcd, P = Checked> {
    pub whole: T,
    pub fraction: Rational<T, G, P>,
}

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> Rational<T, G, P> {
    /// Builds `num/den` in canonical form.
    ///
    /// Fails with [`NumError::DivisionByZero`] on a zero denominator, or
    /// with the policy's error when reduction itself cannot represent an
    /// intermediate.
    pub fn new(num: T, den: T) -> Result<Self, NumError> {
        if den.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        let mut r = Self::raw(num, den);
        r.reduce()?;
        Ok(r)
    }

    /// Wraps the fields without reducing. Callers uphold the canonical
    /// form themselves.
    pub(crate) fn raw(num: T, den: T) -> Self {
        Rational {
            num,
            den,
            marker: PhantomData,
        }
    }

    /// The integer `n` as `n/1`.
    pub fn from_integer(n: T) -> Self {
        Self::raw(n, T::one())
    }

    /// Builds `whole + num/den`, with the fraction's magnitude pulled
    /// toward the whole part's sign: `mixed(-2, 1, 3)` is `-(2 + 1/3)`.
    pub fn mixed(whole: T, num: T, den: T) -> Result<Self, NumError> {
        if den.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        let scaled = P::mul(&whole, &den)?;
        let signed = if whole < T::zero() {
            P::sub(&scaled, &num)?
        } else {
            P::add(&scaled, &num)?
        };
        Self::new(signed, den)
    }

    pub fn numer(&self) -> &T {
        &self.num
    }

    pub fn denom(&self) -> &T {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Splits into whole part and leftover fraction. Truncated division:
    /// `-7/2` gives whole `-3` and fraction `-1/2`.
    pub fn mixed_parts(&self) -> Mixed<T, G, P> {
        let (whole, rem) = self.num.div_rem(&self.den);
        Mixed {
            whole,
            // gcd(num, den) = 1 implies gcd(num mod den, den) = 1
            fraction: Self::raw(rem, self.den.clone()),
        }
    }

    /// Mixed-number rendering, e.g. `2 1/3` for `7/3`.
    pub fn as_mixed(&self) -> MixedDisplay<'_, T, G, P> {
        MixedDisplay(self)
    }

    /// The reciprocal. Fails on zero; keeps the sign on the numerator.
    pub fn inverse(&self) -> Result<Self, NumError> {
        if self.num.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        let mut r = Self::raw(self.den.clone(), self.num.clone());
        if T::SIGNED && r.den < T::zero() {
            r.num = P::neg(&r.num)?;
            r.den = P::neg(&r.den)?;
        }
        Ok(r)
    }

    /// In-place reciprocal.
    pub fn invert(&mut self) -> Result<(), NumError> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Rebuilds the value under different strategy and policy markers,
    /// reducing with the new strategy. The escape hatch for finishing a
    /// [`NoGcd`](crate::NoGcd) chain.
    pub fn normalize<G2, P2>(self) -> Result<Rational<T, G2, P2>, NumError>
    where
        G2: GcdStrategy<T>,
        P2: OverflowPolicy<T>,
    {
        Rational::<T, G2, P2>::new(self.num, self.den)
    }

    /// Puts the fields in canonical form: divide out the strategy's
    /// divisor, normalize zero to `0/1`, move the sign to the numerator.
    pub(crate) fn reduce(&mut self) -> Result<(), NumError> {
        let g = if self.num.is_zero() {
            self.den.clone()
        } else {
            G::gcd::<P>(self.num.clone(), self.den.clone())?
        };
        if !g.is_one() {
            self.num = self.num.clone() / g.clone();
            self.den = self.den.clone() / g;
        }
        if T::SIGNED && self.den < T::zero() {
            self.num = P::neg(&self.num)?;
            self.den = P::neg(&self.den)?;
        }
        Ok(())
    }
}

impl<T: Clone, G, P> Clone for Rational<T, G, P> {
    fn clone(&self) -> Self {
        Rational {
            num: self.num.clone(),
            den: self.den.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug, G, P> fmt::Debug for Rational<T, G, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rational")
            .field("num", &self.num)
            .field("den", &self.den)
            .finish()
    }
}

impl<T: Hash, G, P> Hash for Rational<T, G, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num.hash(state);
        self.den.hash(state);
    }
}

// Ordering compares na*db against nb*da; positive denominators keep the
// direction. Equality follows the same comparison, so it holds across
// unreduced NoGcd values as well.

impl<T: Int, G, P> PartialEq for Rational<T, G, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Int, G, P> Eq for Rational<T, G, P> {}

impl<T: Int, G, P> PartialOrd for Rational<T, G, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Int, G, P> Ord for Rational<T, G, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num.clone() * other.den.clone();
        let rhs = other.num.clone() * self.den.clone();
        lhs.cmp(&rhs)
    }
}

impl<T: Int, G, P> fmt::Display for Rational<T, G, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Borrowed view rendering a value as a mixed number.
pub struct MixedDisplay<'a, T, G, P>(&'a Rational<T, G, P>);

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> fmt::Display for MixedDisplay<'_, T, G, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self.0.mixed_parts();
        if parts.whole.is_zero() {
            // sign stays on the fraction's numerator
            write!(f, "{}", self.0)
        } else if parts.fraction.is_zero() {
            write!(f, "{}", parts.whole)
        } else {
            write!(
                f,
                "{} {}/{}",
                parts.whole,
                parts.fraction.num.clone().magnitude(),
                parts.fraction.den
            )
        }
    }
}

impl<T: Clone, G, P> Clone for Mixed<T, G, P> {
    fn clone(&self) -> Self {
        Mixed {
            whole: self.whole.clone(),
            fraction: self.fraction.clone(),
        }
    }
}

impl<T: fmt::Debug, G, P> fmt::Debug for Mixed<T, G, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mixed")
            .field("whole", &self.whole)
            .field("fraction", &self.fraction)
            .finish()
    }
}

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> From<T> for Rational<T, G, P> {
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> FromStr for Rational<T, G, P> {
    type Err = NumError;

    /// Reads a decimal literal and captures it exactly via
    /// [`Rational::approximate`].
    fn from_str(s: &str) -> Result<Self, NumError> {
        let x: f64 = s
            .trim()
            .parse()
            .map_err(|_| NumError::InvalidLiteral(s.trim().to_string()))?;
        Self::approximate(x)
    }
}
