//! # Scenarios
//!
//! End-to-end use of the public interface: parse, compute, format.
use std::convert::TryFrom;

use factored::{Error, Factorization, Fraction, Sign};

fn fraction(text: &str) -> Fraction {
    text.parse().unwrap()
}

#[test]
fn multiply_then_add() {
    let result = fraction("1/20").multiply(&fraction("10/3")).add(&fraction("1/6"));
    assert_eq!(result.to_string(), "1/3");
}

#[test]
fn decimal() {
    assert_eq!(fraction("0.5").to_string(), "1/2");
    assert_eq!(fraction("2.75").to_string(), "11/4");
    assert_eq!(fraction("-0.125").to_string(), "-1/8");
}

#[test]
fn reduction() {
    assert_eq!(fraction("3/6").to_string(), "1/2");
    assert_eq!(fraction("360/84").to_string(), "30/7");
}

#[test]
fn factorization_display() {
    assert_eq!(Factorization::new(360).to_string(), "360: 2^3*3^2*5");
}

#[test]
fn divide() {
    assert_eq!(fraction("2/3").divide(&fraction("4/9")).to_string(), "3/2");
}

#[test]
fn integer() {
    assert_eq!(fraction("5").to_string(), "5/1");
}

#[test]
fn negative_difference() {
    let difference = fraction("1/4").minus(&fraction("1/2"));
    assert_eq!(difference.sign(), Sign::Negative);
    assert_eq!(difference.to_string(), "-1/4");
    assert_eq!(difference.add(&fraction("1/4")).to_string(), "0/1");
}

#[test]
fn long_product_stays_small() {
    // (2/1) * (3/2) * ... * (101/100) = 101
    let product = (1..=100)
        .map(|n| Fraction::new(n + 1, n))
        .fold(Fraction::new(1, 1), |product, factor| product.multiply(&factor));
    assert_eq!(product.to_string(), "101/1");
}

#[test]
fn round_trip() {
    for text in &["7/20", "-3/2", "0/1", "1/1", "1000003/999983"] {
        assert_eq!(fraction(text).to_string(), *text);
        assert_eq!(fraction(&fraction(text).to_string()), fraction(text));
    }
}

#[test]
fn checked_errors() {
    assert!(matches!("1/0".parse::<Fraction>(), Err(Error::DivisionByZero)));
    assert!(matches!("half".parse::<Fraction>(), Err(Error::Parse(_))));
    assert!(matches!(fraction("2").checked_divide(&fraction("0")), Err(Error::DivisionByZero)));
    assert!(matches!(Factorization::try_from(-6_i64), Err(Error::NegativeFactorization(-6))));

    let mut factorization = Factorization::new(8);
    assert!(matches!(
        factorization.try_remove(2, 4),
        Err(Error::ExponentUnderflow { prime: 2, requested: 4, present: 3 }),
    ));
}
