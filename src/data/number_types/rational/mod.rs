//! # Rational numbers
//!
//! Fractions of two factorizations, kept in lowest terms by cancelling common prime factors.
//!
//! Because both the numerator and the denominator are stored as prime factorizations, common
//! factors can be cancelled by subtracting exponents, no greatest common divisor is ever computed.
//! That makes multiplication and division cheap; addition and subtraction still need to factorize
//! the new numerator, as the factorization of a sum is not determined by that of its terms.
use std::fmt;

use itertools::{EitherOrBoth, Itertools};
use num::One;
use tracing::{debug, trace, warn};

use crate::data::number_types::integer::factorization::Factorization;
use crate::data::number_types::nonzero::NonzeroSign as Sign;
use crate::data::number_types::traits::factorization::Factorizable;
use crate::error::{Error, Result};

mod macros;
mod ops;

/// An exact fraction with a sign.
///
/// Both factorizations are owned by the fraction, such that cancelling factors in one fraction can
/// never affect another.
///
/// Invariants:
/// * The numerator and denominator share no prime factor.
/// * A fraction with value zero is always `0/1` and positive.
///
/// The unchecked operations can create a denominator with value `0`, see `is_degenerate`.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct Fraction {
    sign: Sign,
    numerator: Factorization,
    denominator: Factorization,
}

impl Fraction {
    /// Create a fraction from two integers.
    ///
    /// The sign of the fraction is the product of the signs of the arguments.
    ///
    /// A zero denominator results in a degenerate fraction, use `try_new` to avoid that.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        let sign = Sign::of(numerator) * Sign::of(denominator);

        Self::from_factorizations(
            sign,
            numerator.unsigned_abs().factorize(),
            denominator.unsigned_abs().factorize(),
        )
    }

    /// Create a fraction from two integers.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` when the denominator is zero.
    pub fn try_new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::DivisionByZero);
        }

        Ok(Self::new(numerator, denominator))
    }

    /// Create a fraction from two factorizations, cancelling their common factors.
    ///
    /// A zero numerator results in the fraction `0/1`, the denominator is not considered then.
    pub fn from_factorizations(sign: Sign, numerator: Factorization, denominator: Factorization) -> Self {
        if numerator.is_zero() {
            debug!(denominator = denominator.value(), "zero numerator, using denominator 1");
            return Self::new_zero();
        }

        let (numerator, denominator) = simplify(numerator, denominator);
        Self::from_reduced(sign, numerator, denominator)
    }

    /// Create a fraction from two factorizations that already share no factors.
    ///
    /// Only the zero numerator is handled.
    fn from_reduced(sign: Sign, numerator: Factorization, denominator: Factorization) -> Self {
        if numerator.is_zero() {
            return Self::new_zero();
        }
        if denominator.is_zero() {
            warn!(numerator = numerator.value(), "created a fraction with denominator zero");
        }

        Self { sign, numerator, denominator }
    }

    /// The fraction `0/1`.
    ///
    /// Any factors left in a zero numerator are discarded, such that all zeros compare equal.
    fn new_zero() -> Self {
        Self { sign: Sign::Positive, numerator: Factorization::new(0), denominator: Factorization::one() }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Magnitude of the numerator.
    pub fn numerator(&self) -> &Factorization {
        &self.numerator
    }

    /// Magnitude of the denominator.
    pub fn denominator(&self) -> &Factorization {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Whether the denominator is zero.
    ///
    /// Such fractions don't represent a rational number. They are created by the unchecked
    /// operations when dividing by zero, and arithmetic with them produces meaningless results.
    pub fn is_degenerate(&self) -> bool {
        self.denominator.is_zero()
    }

    fn ensure_not_degenerate(&self) -> Result<()> {
        if self.is_degenerate() {
            Err(Error::DivisionByZero)
        } else {
            Ok(())
        }
    }
}

/// Cancel all common prime factors of a numerator and a denominator.
///
/// For each prime appearing in both, the smallest of the two powers is removed from both.
///
/// # Return value
///
/// The reduced numerator and denominator. Reducing a pair that shares no factors returns it
/// unchanged.
pub fn simplify(
    mut numerator: Factorization,
    mut denominator: Factorization,
) -> (Factorization, Factorization) {
    let common = numerator.factors().iter()
        .merge_join_by(denominator.factors().iter(), |(left, _), (right, _)| left.cmp(right))
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(&(prime, numerator_power), &(_, denominator_power)) => {
                Some((prime, numerator_power.min(denominator_power)))
            },
            _ => None,
        })
        .collect::<Vec<_>>();

    for (prime, power) in common {
        trace!(prime, power, "cancelling common factor");
        numerator.remove(prime, power);
        denominator.remove(prime, power);
    }

    (numerator, denominator)
}

impl fmt::Display for Fraction {
    /// Formats as `"-3/4"`; positive values have no sign and integers still show the denominator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", self.sign, self.numerator.value(), self.denominator.value())
    }
}
