//! Square roots and integer powers.

use num_integer::Roots;
use tracing::{debug, trace};

use crate::error::NumError;
use crate::gcd::GcdStrategy;
use crate::int::{digit_count, Int};
use crate::policy::{Checked, OverflowPolicy};
use crate::rational::Rational;

/// Denominator digit ceiling for [`Rational::sqrt`]; keeps unbounded
/// backings from refining forever.
pub const DEFAULT_SQRT_DIGITS: usize = 32;

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> Rational<T, G, P> {
    /// Heron's method with the default precision ceiling.
    pub fn sqrt(&self) -> Result<Self, NumError> {
        self.sqrt_with_limit(DEFAULT_SQRT_DIGITS)
    }

    /// Square root by Heron iteration, refined until a fixed point, a
    /// representation limit, or a denominator of more than
    /// `max_den_digits` decimal digits.
    ///
    /// Perfect-square inputs come back exact. Zero and negative inputs
    /// fail with [`NumError::Domain`].
    pub fn sqrt_with_limit(&self, max_den_digits: usize) -> Result<Self, NumError> {
        if self.is_zero() || (T::SIGNED && self.num < T::zero()) {
            return Err(NumError::Domain("sqrt requires a positive value".into()));
        }
        if self.num == self.den {
            return Ok(self.clone());
        }
        let num_root = self.num.sqrt();
        let den_root = self.den.sqrt();
        if num_root.clone() * num_root.clone() == self.num
            && den_root.clone() * den_root.clone() == self.den
        {
            // roots of coprime squares are coprime
            return Ok(Self::raw(num_root, den_root));
        }

        // Iterate under the checked policy whatever P is; a failed step
        // doubles as the representation-exhausted stop.
        let value: Rational<T, G, Checked> = Rational::raw(self.num.clone(), self.den.clone());
        let two = Rational::<T, G, Checked>::from_integer(T::from_digit(2));
        let one = Rational::<T, G, Checked>::from_integer(T::one());
        let mut x = match one.add(&value).and_then(|s| s.div(&two)) {
            Ok(seed) => seed,
            Err(_) => value.clone(),
        };
        loop {
            if digit_count(&x.den, 10) > max_den_digits {
                debug!(limit = max_den_digits, "sqrt denominator digit limit hit");
                break;
            }
            let next = match value.div(&x).and_then(|q| x.add(&q)).and_then(|s| s.div(&two)) {
                Ok(next) => next,
                Err(_) => break,
            };
            if next.num == x.num && next.den == x.den {
                break;
            }
            trace!("sqrt iterate {}/{}", next.num, next.den);
            x = next;
        }

        // Snap to the whole part when it squares back to the input, so
        // near-integer refinements of perfect squares land exactly.
        let whole = x.mixed_parts().whole;
        if let (Some(sq), true) = (whole.checked_mul(&whole), value.den.is_one()) {
            if sq == value.num {
                return Ok(Self::from_integer(whole));
            }
        }
        Ok(Self::raw(x.num, x.den))
    }

    /// Binary exponentiation. Only strictly positive exponents are in
    /// range; zero and negative exponents fail with [`NumError::Domain`].
    pub fn pow(&self, exp: i32) -> Result<Self, NumError> {
        if exp <= 0 {
            return Err(NumError::Domain(format!(
                "pow requires a positive exponent, got {exp}"
            )));
        }
        let mut result = Self::from_integer(T::one());
        let mut base = self.clone();
        let mut e = exp as u32;
        loop {
            if e & 1 == 1 {
                result = result.mul(&base)?;
            }
            e >>= 1;
            if e == 0 {
                break;
            }
            base = base.mul(&base)?;
        }
        Ok(result)
    }
}
