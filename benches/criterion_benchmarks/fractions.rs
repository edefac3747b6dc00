use criterion::{black_box, Criterion, criterion_group};

use factored::Fraction;

pub fn multiply_chain(c: &mut Criterion) {
    let factors = (1..=20_i64).map(|n| Fraction::new(n + 1, n)).collect::<Vec<_>>();
    c.bench_function("multiply a chain of fractions", |b| b.iter(|| {
        black_box(&factors).iter().fold(Fraction::new(1, 1), |product, factor| product.multiply(factor))
    }));
}

pub fn add_chain(c: &mut Criterion) {
    let terms = (1..=12_i64).map(|n| Fraction::new(1, n)).collect::<Vec<_>>();
    c.bench_function("add a chain of fractions", |b| b.iter(|| {
        black_box(&terms).iter().fold(Fraction::new(0, 1), |sum, term| sum.add(term))
    }));
}

pub fn parse(c: &mut Criterion) {
    c.bench_function("parse a decimal fraction", |b| b.iter(|| {
        black_box("1234.5678").parse::<Fraction>()
    }));
}

criterion_group!(fractions,
    multiply_chain,
    add_chain,
    parse,
);
