use arpq::{BigInt, Context, Float, Rational, RoundingMode, Semantics};

use RoundingMode::NearestTiesToEven as rme;

fn test_third_to_float() {
    let sem = Semantics::new(32, 10000, rme);
    let third = Rational::from_fraction(1, 3);
    black_box(Float::from_rational(&third, sem));
}

fn test_wide_rational_to_float() {
    let sem = Semantics::new(32, 2000, rme);
    let num = BigInt::pseudorandom(200, 12345);
    let den = BigInt::pseudorandom(100, 67890);
    let q = Rational::new(false, num, den);
    black_box(Float::from_rational(&q, sem));
}

fn test_float_to_rational() {
    let sem = Semantics::new(32, 5000, rme);
    let (x, _) = Float::from_rational(&Rational::from_fraction(-5, 7), sem);
    let mut ctx = Context::new();
    black_box(x.to_rational(&mut ctx));
}

fn test_round_trip() {
    let mut ctx = Context::new();
    for precision in 1..200 {
        let sem = Semantics::new(32, precision, rme);
        let x = Float::from_u64(sem, 0x1234_5678_9abc_def1);
        let q = x.to_rational(&mut ctx);
        black_box(Float::from_rational(&q, sem));
    }
}

fn test_bigint_gcd() {
    let a = BigInt::pseudorandom(100, 12345);
    let b = BigInt::pseudorandom(80, 67890);
    black_box(a.gcd(&b));
}

fn test_bigint_div() {
    let a = BigInt::pseudorandom(1000, 12345);
    let b = BigInt::pseudorandom(500, 67890);
    black_box(a / b);
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_third_to_float", |b| b.iter(test_third_to_float));
    c.bench_function("test_wide_rational_to_float", |b| {
        b.iter(test_wide_rational_to_float)
    });
    c.bench_function("test_float_to_rational", |b| {
        b.iter(test_float_to_rational)
    });
    c.bench_function("test_round_trip", |b| b.iter(test_round_trip));
    c.bench_function("test_bigint_gcd", |b| b.iter(test_bigint_gcd));
    c.bench_function("test_bigint_div", |b| b.iter(test_bigint_div));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
