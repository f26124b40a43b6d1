//! Fraction arithmetic.
//!
//! Every operation is fallible and borrows its operands; results come
//! back reduced (strategy permitting) with the sign on the numerator.
//! Addition and subtraction use Knuth's two-gcd scheme (TAOCP 4.5.1) to
//! keep intermediates near the size of the result, and multiplication
//! cross-cancels before forming products.

use crate::error::NumError;
use crate::gcd::GcdStrategy;
use crate::int::Int;
use crate::policy::OverflowPolicy;
use crate::rational::Rational;

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> Rational<T, G, P> {
    pub fn add(&self, rhs: &Self) -> Result<Self, NumError> {
        self.add_sub(rhs, false)
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self, NumError> {
        self.add_sub(rhs, true)
    }

    fn add_sub(&self, rhs: &Self, subtract: bool) -> Result<Self, NumError> {
        let combine = if subtract { P::sub } else { P::add };
        let d1 = G::gcd::<P>(self.den.clone(), rhs.den.clone())?;
        if d1.is_one() {
            // coprime denominators: textbook cross-multiplication
            let left = P::mul(&self.num, &rhs.den)?;
            let right = P::mul(&rhs.num, &self.den)?;
            let num = combine(&left, &right)?;
            let den = P::mul(&self.den, &rhs.den)?;
            return Ok(Self::raw(num, den));
        }
        let lden_red = self.den.clone() / d1.clone();
        let rden_red = rhs.den.clone() / d1.clone();
        let left = P::mul(&self.num, &rden_red)?;
        let right = P::mul(&rhs.num, &lden_red)?;
        let t = combine(&left, &right)?;
        // t may share a factor with d1 only; dividing it out leaves the
        // result in lowest terms.
        let d2 = G::gcd::<P>(t.clone(), d1)?;
        let num = t / d2.clone();
        let den = P::mul(&lden_red, &(rhs.den.clone() / d2))?;
        Ok(Self::raw(num, den))
    }

    pub fn mul(&self, rhs: &Self) -> Result<Self, NumError> {
        let d1 = G::gcd::<P>(self.num.clone(), rhs.den.clone())?;
        let d2 = G::gcd::<P>(self.den.clone(), rhs.num.clone())?;
        if d1.is_one() && d2.is_one() {
            let num = P::mul(&self.num, &rhs.num)?;
            let den = P::mul(&self.den, &rhs.den)?;
            return Ok(Self::raw(num, den));
        }
        let num = P::mul(
            &(self.num.clone() / d1.clone()),
            &(rhs.num.clone() / d2.clone()),
        )?;
        let den = P::mul(&(self.den.clone() / d2), &(rhs.den.clone() / d1))?;
        Ok(Self::raw(num, den))
    }

    /// Fails with [`NumError::DivisionByZero`] when `rhs` is zero.
    pub fn div(&self, rhs: &Self) -> Result<Self, NumError> {
        self.mul(&rhs.inverse()?)
    }

    /// Remainder over a common denominator, carrying the divisor's sign
    /// the way a floored modulus does.
    pub fn modulo(&self, rhs: &Self) -> Result<Self, NumError> {
        if rhs.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        if self.den == rhs.den {
            let num = Self::forced_rem(&self.num, &rhs.num)?;
            return Self::new(num, self.den.clone());
        }
        let l = Self::lcm(&self.den, &rhs.den)?;
        let lhs_num = P::mul(&self.num, &(l.clone() / self.den.clone()))?;
        let rhs_num = P::mul(&rhs.num, &(l.clone() / rhs.den.clone()))?;
        let num = Self::forced_rem(&lhs_num, &rhs_num)?;
        Self::new(num, l)
    }

    pub fn neg(&self) -> Result<Self, NumError> {
        Ok(Self::raw(P::neg(&self.num)?, self.den.clone()))
    }

    pub fn abs(&self) -> Result<Self, NumError> {
        if T::SIGNED && self.num < T::zero() {
            self.neg()
        } else {
            Ok(self.clone())
        }
    }

    // ((x mod m) + m) mod m
    fn forced_rem(x: &T, m: &T) -> Result<T, NumError> {
        let r = P::rem(x, m)?;
        let shifted = P::add(&r, m)?;
        P::rem(&shifted, m)
    }

    fn lcm(a: &T, b: &T) -> Result<T, NumError> {
        let g = G::gcd::<P>(a.clone(), b.clone())?;
        let l = P::mul(&(a.clone() / g), b)?;
        Ok(l.magnitude())
    }
}
