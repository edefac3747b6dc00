use criterion::{black_box, Criterion, criterion_group};

use factored::{Factorizable, Factorization};

pub fn factor_small(c: &mut Criterion) {
    c.bench_function("factorize a small number", |b| b.iter(|| {
        Factorizable::factorize(black_box(&360_u64))
    }));
}

pub fn factor_large_prime(c: &mut Criterion) {
    c.bench_function("factorize a large prime", |b| b.iter(|| {
        Factorization::new(black_box(1_000_000_007))
    }));
}

pub fn factor_semiprime(c: &mut Criterion) {
    c.bench_function("factorize a semiprime", |b| b.iter(|| {
        Factorization::new(black_box(1_000_003 * 999_983))
    }));
}

pub fn multiply(c: &mut Criterion) {
    let left = Factorization::new(720720);
    let right = Factorization::new(2 * 3 * 17 * 19 * 23);
    c.bench_function("multiply factorizations", |b| b.iter(|| {
        black_box(&left).multiply(black_box(&right))
    }));
}

criterion_group!(factors,
    factor_small,
    factor_large_prime,
    factor_semiprime,
    multiply,
);
