//! Continued-fraction folding and unfolding.

use std::iter::FusedIterator;

use crate::error::NumError;
use crate::gcd::GcdStrategy;
use crate::int::Int;
use crate::policy::OverflowPolicy;
use crate::rational::Rational;

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> Rational<T, G, P> {
    /// Folds a finite sequence of partial quotients into a value.
    ///
    /// An empty sequence has no value and fails with
    /// [`NumError::DivisionByZero`].
    pub fn from_terms<I>(terms: I) -> Result<Self, NumError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut p = [T::zero(), T::one()];
        let mut q = [T::one(), T::zero()];
        for term in terms {
            let next_p = P::add(&P::mul(&term, &p[1])?, &p[0])?;
            let next_q = P::add(&P::mul(&term, &q[1])?, &q[0])?;
            p[0] = std::mem::replace(&mut p[1], next_p);
            q[0] = std::mem::replace(&mut q[1], next_q);
        }
        Self::new(p[1].clone(), q[1].clone())
    }

    /// Lazy partial-quotient sequence of the value.
    ///
    /// Finite for every rational: each step emits the truncated whole
    /// part and recurses into the inverted remainder until the remainder
    /// vanishes. The iterator owns a snapshot, so it can be re-created
    /// from the same value at will.
    pub fn terms(&self) -> Terms<T, G, P> {
        Terms {
            state: Some(self.clone()),
        }
    }
}

/// Iterator over continued-fraction partial quotients.
pub struct Terms<T, G, P> {
    state: Option<Rational<T, G, P>>,
}

impl<T: Clone, G, P> Clone for Terms<T, G, P> {
    fn clone(&self) -> Self {
        Terms {
            state: self.state.clone(),
        }
    }
}

impl<T: std::fmt::Debug, G, P> std::fmt::Debug for Terms<T, G, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terms").field("state", &self.state).finish()
    }
}

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> Iterator for Terms<T, G, P> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.state.take()?;
        let parts = current.mixed_parts();
        if !parts.fraction.is_zero() {
            // nonzero remainder, inversion cannot fail
            self.state = parts.fraction.inverse().ok();
        }
        Some(parts.whole)
    }
}

impl<T: Int, G: GcdStrategy<T>, P: OverflowPolicy<T>> FusedIterator for Terms<T, G, P> {}
