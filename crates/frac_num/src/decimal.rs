//! Repeating-decimal decomposition and composition.
//!
//! `decompose` runs the long division of `|numerator|` by `denominator`
//! twice: once under Floyd cycle detection over the remainder sequence
//! `f(r) = (r mod d) * base` to locate the reptend without materializing
//! the digit stream, and once more to emit digits into the pre-period
//! and reptend accumulators. `compose` is the closed-form inverse.

use tracing::debug;

use crate::cycle::find_cycle;
use crate::error::NumError;
use crate::gcd::GcdStrategy;
use crate::int::{digit_count, Int};
use crate::policy::OverflowPolicy;
use crate::rational::Rational;

/// Positional description of a repeating expansion's fractional part.
///
/// Digit groups are stored as accumulated integers, so the zero digits
/// in front of each group are carried in the companion counters. A
/// terminating expansion has a zero reptend with a zero leading count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatInfo<T> {
    /// Repeating digit block.
    pub reptend: T,
    /// Zero digits in front of the reptend's first significant digit.
    pub leading_zeros: usize,
    /// Digit block between the radix point and the reptend.
    pub pre: T,
    /// Zero digits in front of the pre-period's first significant digit.
    pub pre_leading_zeros: usize,
    /// Sign of the source numerator.
    pub negative: bool,
}

impl<T: Int> RepeatInfo<T> {
    pub fn is_terminating(&self) -> bool {
        self.reptend.is_zero() && self.leading_zeros == 0
    }
}

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> Rational<T, G, P> {
    /// Splits the value into its whole part and base-10 digit groups.
    pub fn decompose(&self) -> Result<(T, RepeatInfo<T>), NumError> {
        self.decompose_radix(10)
    }

    /// [`Rational::decompose`] in an arbitrary base from 2 to 36.
    pub fn decompose_radix(&self, base: u8) -> Result<(T, RepeatInfo<T>), NumError> {
        check_radix(base)?;
        let b = T::from_digit(base);
        let negative = T::SIGNED && self.num < T::zero();
        let magnitude = if negative {
            P::neg(&self.num)?
        } else {
            self.num.clone()
        };
        let (whole_mag, first_rem) = magnitude.div_rem(&self.den);
        let whole = if negative {
            P::neg(&whole_mag)?
        } else {
            whole_mag
        };

        let step = |r: &T| -> Result<T, NumError> { P::mul(&P::rem(r, &self.den)?, &b) };
        let seed = P::mul(&first_rem, &b)?;
        let cycle = find_cycle(&seed, step)?;
        debug!(start = cycle.start, len = cycle.len, "located division cycle");

        // Replay the division, now emitting digits.
        let mut state = seed;
        let mut pre = T::zero();
        let mut pre_leading_zeros = 0;
        let mut pre_seen = false;
        for _ in 0..cycle.start {
            let digit = state.clone() / self.den.clone();
            if digit.is_zero() && !pre_seen {
                pre_leading_zeros += 1;
            } else {
                pre_seen = true;
            }
            pre = P::add(&P::mul(&pre, &b)?, &digit)?;
            state = step(&state)?;
        }

        let mut reptend = T::zero();
        let mut leading_zeros = 0;
        let mut rep_seen = false;
        for _ in 0..cycle.len {
            let digit = state.clone() / self.den.clone();
            if digit.is_zero() && !rep_seen {
                leading_zeros += 1;
            } else {
                rep_seen = true;
            }
            reptend = P::add(&P::mul(&reptend, &b)?, &digit)?;
            state = step(&state)?;
        }
        if !rep_seen {
            // an all-zero cycle is a terminating expansion
            leading_zeros = 0;
        }

        Ok((
            whole,
            RepeatInfo {
                reptend,
                leading_zeros,
                pre,
                pre_leading_zeros,
                negative,
            },
        ))
    }

    /// Rebuilds the fractional value described by `info` in base 10.
    ///
    /// Closed form: `pre / B^w(pre) + reptend / ((B^w(rep) - 1) * B^w(pre))`
    /// where `w(g)` is a group's digit width including leading zeros.
    pub fn from_repeating(info: &RepeatInfo<T>) -> Result<Self, NumError> {
        Self::compose_radix(info, 10)
    }

    /// [`Rational::from_repeating`] in an arbitrary base from 2 to 36.
    pub fn compose_radix(info: &RepeatInfo<T>, base: u8) -> Result<Self, NumError> {
        check_radix(base)?;
        let b = T::from_digit(base);
        let pre_width = digit_count(&info.pre, base) + info.pre_leading_zeros;
        let pre_shift = pow_int::<T, P>(&b, pre_width)?;
        let mut value = Self::new(info.pre.clone(), pre_shift.clone())?;

        let rep_width = digit_count(&info.reptend, base) + info.leading_zeros;
        if rep_width > 0 {
            let rep_den = P::mul(
                &P::sub(&pow_int::<T, P>(&b, rep_width)?, &T::one())?,
                &pre_shift,
            )?;
            value = value.add(&Self::new(info.reptend.clone(), rep_den)?)?;
        }
        if info.negative {
            value = value.neg()?;
        }
        Ok(value)
    }

    /// Inverse of [`Rational::decompose`]: re-attaches the whole part to
    /// the fractional groups.
    pub fn from_decomposition(whole: T, info: &RepeatInfo<T>) -> Result<Self, NumError> {
        Self::from_integer(whole).add(&Self::from_repeating(info)?)
    }
}

fn check_radix(base: u8) -> Result<(), NumError> {
    if (2..=36).contains(&base) {
        Ok(())
    } else {
        Err(NumError::Domain(format!(
            "radix {base} outside the supported 2..=36 range"
        )))
    }
}

fn pow_int<T: Int, P: OverflowPolicy<T>>(base: &T, exp: usize) -> Result<T, NumError> {
    let mut out = T::one();
    for _ in 0..exp {
        out = P::mul(&out, base)?;
    }
    Ok(out)
}
