use criterion::{black_box, Criterion, criterion_group};

use factored::{Prime, PrimeCandidates};

pub fn candidates(c: &mut Criterion) {
    c.bench_function("first thousand trial division candidates", |b| b.iter(|| {
        PrimeCandidates::new().take(black_box(1_000)).last()
    }));
}

pub fn is_prime_small_positive(c: &mut Criterion) {
    c.bench_function("is_prime with small prime", |b| b.iter(|| {
        Prime::is_prime(black_box(&31_u64))
    }));
}

pub fn is_prime_large_negative(c: &mut Criterion) {
    c.bench_function("is_prime with large nonprime", |b| b.iter(|| {
        Prime::is_prime(black_box(&(2_u64.pow(32) - 21)))
    }));
}

criterion_group!(primes,
    candidates,
    is_prime_small_positive,
    is_prime_large_negative,
);
