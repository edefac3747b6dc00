use criterion::criterion_main;

mod factors;
mod fractions;
mod primes;

criterion_main!(
    factors::factors,
    fractions::fractions,
    primes::primes,
);
