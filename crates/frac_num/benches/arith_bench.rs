//! Strategy benchmarks: gcd kernels, arithmetic chains and the decimal
//! codec.
//!
//! The gcd group compares the three real strategies on identical input
//! pairs; the arith group contrasts eager reduction against a NoGcd
//! chain with a single trailing normalize.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use frac_num::{
    BigRat, Checked, EuclidGcd, FastEuclidGcd, GcdStrategy, NoGcd, Rat64, Rational, SteinGcd,
    Unchecked,
};
use num_bigint::BigInt;

fn gcd_pairs() -> Vec<(i64, i64)> {
    (1i64..256)
        .map(|i| (982_451_653i64.wrapping_mul(i), 57_885_161 + i * 7_919))
        .collect()
}

fn bench_gcd_strategies(c: &mut Criterion) {
    let pairs = gcd_pairs();
    let mut group = c.benchmark_group("gcd");

    group.bench_function("euclid_checked", |bencher| {
        bencher.iter(|| {
            for &(a, b) in &pairs {
                let g = <EuclidGcd as GcdStrategy<i64>>::gcd::<Checked>(black_box(a), black_box(b));
                black_box(g).ok();
            }
        })
    });

    group.bench_function("fast_euclid_unchecked", |bencher| {
        bencher.iter(|| {
            for &(a, b) in &pairs {
                let g = <FastEuclidGcd as GcdStrategy<i64>>::gcd::<Unchecked>(
                    black_box(a),
                    black_box(b),
                );
                black_box(g).ok();
            }
        })
    });

    group.bench_function("stein_checked", |bencher| {
        bencher.iter(|| {
            for &(a, b) in &pairs {
                let g = <SteinGcd as GcdStrategy<i64>>::gcd::<Checked>(black_box(a), black_box(b));
                black_box(g).ok();
            }
        })
    });

    group.finish();
}

fn bench_arith_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("arith");

    group.bench_function("harmonic_sum_reduced", |bencher| {
        bencher.iter(|| {
            let mut acc = Rat64::from_integer(0);
            for d in 1..=20i64 {
                acc = acc.add(&Rat64::new(1, d).unwrap()).unwrap();
            }
            black_box(acc)
        })
    });

    group.bench_function("harmonic_sum_lazy_then_normalize", |bencher| {
        bencher.iter(|| {
            let mut acc = Rational::<i64, NoGcd, Unchecked>::from_integer(0);
            for d in 1..=20i64 {
                acc = acc
                    .add(&Rational::<i64, NoGcd, Unchecked>::new(1, d).unwrap())
                    .unwrap();
            }
            black_box(acc.normalize::<EuclidGcd, Checked>().unwrap())
        })
    });

    group.finish();
}

fn bench_decimal_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal");

    let v = BigRat::new(BigInt::from(1), BigInt::from(97)).unwrap();
    group.bench_function("decompose_96_digit_period", |bencher| {
        bencher.iter(|| black_box(v.decompose().unwrap()))
    });

    let (whole, info) = v.decompose().unwrap();
    group.bench_function("compose_96_digit_period", |bencher| {
        bencher.iter(|| black_box(BigRat::from_decomposition(whole.clone(), &info).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_gcd_strategies,
    bench_arith_chain,
    bench_decimal_codec
);
criterion_main!(benches);
