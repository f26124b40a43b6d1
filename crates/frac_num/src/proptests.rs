//! Property-based tests for the fraction engine.
//!
//! Oracle comparisons run against `num_rational::Ratio`, which shares
//! none of this crate's reduction or arithmetic code paths. Ranges stay
//! small enough that neither side can overflow an `i64`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;
use proptest::prelude::*;

use crate::gcd::{EuclidGcd, FastEuclidGcd, GcdStrategy, NoGcd, SteinGcd};
use crate::policy::{Checked, Unchecked};
use crate::rational::Rational;
use crate::{BigRat, Rat64};

fn rat(n: i64, d: i64) -> Rat64 {
    Rat64::new(n, d).unwrap()
}

fn oracle(r: &Rat64) -> Ratio<i64> {
    Ratio::new(*r.numer(), *r.denom())
}

proptest! {
    #[test]
    fn construction_reduces(n in -10_000i64..10_000, d in -10_000i64..10_000) {
        prop_assume!(d != 0);
        let r = rat(n, d);
        prop_assert!(*r.denom() > 0);
        if *r.numer() == 0 {
            prop_assert_eq!(*r.denom(), 1);
        } else {
            prop_assert_eq!(r.numer().abs().gcd(r.denom()), 1);
        }
    }

    #[test]
    fn reduction_is_idempotent(n in -10_000i64..10_000, d in 1i64..10_000) {
        let r = rat(n, d);
        let again = Rat64::new(*r.numer(), *r.denom()).unwrap();
        prop_assert_eq!(*r.numer(), *again.numer());
        prop_assert_eq!(*r.denom(), *again.denom());
    }

    #[test]
    fn add_matches_oracle(
        a in -1000i64..1000, b in 1i64..1000,
        c in -1000i64..1000, d in 1i64..1000,
    ) {
        let sum = rat(a, b).add(&rat(c, d)).unwrap();
        prop_assert_eq!(oracle(&sum), Ratio::new(a, b) + Ratio::new(c, d));
    }

    #[test]
    fn sub_matches_oracle(
        a in -1000i64..1000, b in 1i64..1000,
        c in -1000i64..1000, d in 1i64..1000,
    ) {
        let diff = rat(a, b).sub(&rat(c, d)).unwrap();
        prop_assert_eq!(oracle(&diff), Ratio::new(a, b) - Ratio::new(c, d));
    }

    #[test]
    fn mul_matches_oracle(
        a in -1000i64..1000, b in 1i64..1000,
        c in -1000i64..1000, d in 1i64..1000,
    ) {
        let product = rat(a, b).mul(&rat(c, d)).unwrap();
        prop_assert_eq!(oracle(&product), Ratio::new(a, b) * Ratio::new(c, d));
    }

    #[test]
    fn div_matches_oracle(
        a in -1000i64..1000, b in 1i64..1000,
        c in 1i64..1000, d in 1i64..1000,
    ) {
        let quotient = rat(a, b).div(&rat(c, d)).unwrap();
        prop_assert_eq!(oracle(&quotient), Ratio::new(a, b) / Ratio::new(c, d));
    }

    #[test]
    fn comparison_matches_oracle(
        a in -1000i64..1000, b in 1i64..1000,
        c in -1000i64..1000, d in 1i64..1000,
    ) {
        let lhs = rat(a, b);
        let rhs = rat(c, d);
        prop_assert_eq!(lhs.cmp(&rhs), oracle(&lhs).cmp(&oracle(&rhs)));
    }

    #[test]
    fn inverse_is_involutive(n in -10_000i64..10_000, d in 1i64..10_000) {
        prop_assume!(n != 0);
        let r = rat(n, d);
        prop_assert_eq!(r.inverse().unwrap().inverse().unwrap(), r);
    }

    #[test]
    fn negation_is_involutive(n in -10_000i64..10_000, d in 1i64..10_000) {
        let r = rat(n, d);
        prop_assert_eq!(r.neg().unwrap().neg().unwrap(), r);
    }

    #[test]
    fn add_then_sub_returns_start(
        a in -1000i64..1000, b in 1i64..1000,
        c in -1000i64..1000, d in 1i64..1000,
    ) {
        let lhs = rat(a, b);
        let rhs = rat(c, d);
        prop_assert_eq!(lhs.add(&rhs).unwrap().sub(&rhs).unwrap(), lhs);
    }

    #[test]
    fn gcd_strategies_agree(
        a in -1_000_000_000i64..1_000_000_000,
        b in -1_000_000_000i64..1_000_000_000,
    ) {
        let euclid = <EuclidGcd as GcdStrategy<i64>>::gcd::<Checked>(a, b).unwrap();
        let fast = <FastEuclidGcd as GcdStrategy<i64>>::gcd::<Unchecked>(a, b).unwrap();
        let stein = <SteinGcd as GcdStrategy<i64>>::gcd::<Checked>(a, b).unwrap();
        prop_assert_eq!(euclid, fast);
        prop_assert_eq!(euclid, stein);
    }

    #[test]
    fn policies_agree_inside_the_safe_range(
        a in -1000i64..1000, b in 1i64..1000,
        c in -1000i64..1000, d in 1i64..1000,
    ) {
        let checked = rat(a, b).add(&rat(c, d)).unwrap();
        let unchecked = Rational::<i64, EuclidGcd, Unchecked>::new(a, b)
            .unwrap()
            .add(&Rational::<i64, EuclidGcd, Unchecked>::new(c, d).unwrap())
            .unwrap();
        prop_assert_eq!(*checked.numer(), *unchecked.numer());
        prop_assert_eq!(*checked.denom(), *unchecked.denom());
    }

    #[test]
    fn null_strategy_normalizes_to_default(
        a in -1000i64..1000, b in 1i64..1000,
        c in -1000i64..1000, d in 1i64..1000,
    ) {
        let lazy = Rational::<i64, NoGcd>::new(a, b)
            .unwrap()
            .add(&Rational::<i64, NoGcd>::new(c, d).unwrap())
            .unwrap();
        let normalized: Rat64 = lazy.normalize().unwrap();
        let eager = rat(a, b).add(&rat(c, d)).unwrap();
        prop_assert_eq!(*normalized.numer(), *eager.numer());
        prop_assert_eq!(*normalized.denom(), *eager.denom());
    }

    #[test]
    fn modulo_behaves_like_floored_remainder(
        a in -1000i64..1000, b in 1i64..1000,
        c in -1000i64..1000, d in 1i64..1000,
    ) {
        prop_assume!(c != 0);
        let lhs = rat(a, b);
        let rhs = rat(c, d);
        let r = lhs.modulo(&rhs).unwrap();
        let zero = Rat64::from_integer(0);
        // remainder carries the divisor's sign and stays inside it
        if !r.is_zero() {
            prop_assert_eq!(r < zero, rhs < zero);
        }
        prop_assert!(r.abs().unwrap() < rhs.abs().unwrap());
        // quotient (lhs - r) / rhs is a whole number
        let q = lhs.sub(&r).unwrap().div(&rhs).unwrap();
        prop_assert!(q.is_integer());
    }

    #[test]
    fn decimal_roundtrip_bigint(n in -5000i64..5000, d in 1i64..500) {
        let v = BigRat::new(BigInt::from(n), BigInt::from(d)).unwrap();
        let (whole, info) = v.decompose().unwrap();
        let back = BigRat::from_decomposition(whole, &info).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn continued_fraction_roundtrip(n in -10_000i64..10_000, d in 1i64..10_000) {
        let v = rat(n, d);
        let back = Rat64::from_terms(v.terms()).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn approximate_recovers_small_ratios(n in -1000i64..1000, d in 1i64..1000) {
        let x = n as f64 / d as f64;
        let r = Rat64::approximate_within(x, 1e-9).unwrap();
        prop_assert_eq!(r, rat(n, d));
    }

    #[test]
    fn pow_matches_repeated_multiplication(n in -9i64..9, d in 1i64..9, e in 1i32..6) {
        prop_assume!(n != 0);
        let base = rat(n, d);
        let mut expected = base.clone();
        for _ in 1..e {
            expected = expected.mul(&base).unwrap();
        }
        prop_assert_eq!(base.pow(e).unwrap(), expected);
    }
}
