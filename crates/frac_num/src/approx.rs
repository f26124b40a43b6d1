//! Capturing floating-point values as exact fractions.
//!
//! Runs the continued-fraction expansion of the source and keeps folding
//! convergents until one lands within the requested tolerance. Floats
//! are dyadic, so the expansion is finite and the loop terminates even
//! with a zero tolerance.

use num_traits::Float;
use tracing::trace;

use crate::error::NumError;
use crate::gcd::GcdStrategy;
use crate::int::Int;
use crate::policy::OverflowPolicy;
use crate::rational::Rational;

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> Rational<T, G, P> {
    /// Approximates `x` to within the source type's machine epsilon.
    pub fn approximate<S: Float>(x: S) -> Result<Self, NumError> {
        Self::approximate_within(x, S::epsilon())
    }

    /// Approximates `x` to within `eps`.
    ///
    /// Fails with [`NumError::ApproximationOverflow`] when `x` is not
    /// finite, lies outside the backing type's range, or a convergent
    /// outgrows it mid-expansion.
    pub fn approximate_within<S: Float>(x: S, eps: S) -> Result<Self, NumError> {
        if !x.is_finite() {
            return Err(NumError::ApproximationOverflow);
        }
        if let (Some(lo), Some(hi)) = (T::min_value(), T::max_value()) {
            let lo = lo.to_f64().and_then(S::from);
            let hi = hi.to_f64().and_then(S::from);
            if let (Some(lo), Some(hi)) = (lo, hi) {
                if x < lo || x > hi {
                    return Err(NumError::ApproximationOverflow);
                }
            }
        }

        // Convergent pairs (previous, current), seeded so the first
        // term folds to n/1.
        let mut p = [T::zero(), T::one()];
        let mut q = [T::one(), T::zero()];
        let mut rest = x;

        loop {
            let conv_num = p[1].to_f64().and_then(S::from);
            let conv_den = q[1].to_f64().and_then(S::from);
            if let (Some(pn), Some(qd)) = (conv_num, conv_den) {
                if qd != S::zero() && (pn / qd - x).abs() < eps {
                    break;
                }
            }

            let term = rest.floor();
            let n = term
                .to_f64()
                .and_then(T::from_f64)
                .ok_or(NumError::ApproximationOverflow)?;
            let next_p = n
                .checked_mul(&p[1])
                .and_then(|v| v.checked_add(&p[0]))
                .ok_or(NumError::ApproximationOverflow)?;
            let next_q = n
                .checked_mul(&q[1])
                .and_then(|v| v.checked_add(&q[0]))
                .ok_or(NumError::ApproximationOverflow)?;
            p[0] = std::mem::replace(&mut p[1], next_p);
            q[0] = std::mem::replace(&mut q[1], next_q);
            trace!("convergent {}/{}", p[1], q[1]);

            let frac = rest - term;
            if frac.is_zero() || frac.abs() < eps {
                break;
            }
            rest = frac.recip();
        }

        Self::new(p[1].clone(), q[1].clone())
    }
}
