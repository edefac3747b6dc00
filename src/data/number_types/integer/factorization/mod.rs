//! # Factorization
//!
//! Non-negative integers stored as their prime factorization, together with the value itself.
//!
//! Keeping both around means that values can be multiplied and reduced by merging and subtracting
//! exponents, while the value remains available without recomputing the product of all factors.
use std::convert::TryFrom;
use std::fmt;
use std::ops::Mul;

use itertools::{EitherOrBoth, Itertools};
use num::One;
use tracing::{trace, warn};

use crate::data::number_types::integer::factorization::prime::{exceeds_square_root, PrimeCandidates};
#[cfg(debug_assertions)]
use crate::data::number_types::integer::factorization::prime::Prime;
use crate::data::number_types::nonzero::Nonzero;
use crate::error::{Error, Result};

pub mod prime;

/// Prime factor of a `u64`.
pub type Factor = u64;
/// How often a factor appears in a value, never zero.
pub type Power = u32;

/// A non-negative integer and its prime factorization.
///
/// Both values are kept consistent by the constructors and by `multiply`: the value equals the
/// product of `prime ^ power` over all factors. Only `remove` with a power that is too large can
/// break that relation, see its documentation.
///
/// The value `0` has no prime factorization; its factors are empty.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct Factorization {
    /// `(prime factor, power)` tuples, sorted by the prime factor.
    ///
    /// This is a sparse representation: powers are never zero.
    ///
    /// When this field is empty, the value `1` (or `0`) is represented.
    factors: Vec<(Factor, Power)>,
    value: u64,
}

impl Factorization {
    /// Factorize a value by trial division.
    ///
    /// Candidates are tried in ascending order until their square exceeds what remains of the
    /// value, whatever remains after that is a prime itself (unless it is `0` or `1`).
    ///
    /// # Arguments
    ///
    /// * `value`: Any value, `0` and `1` both result in an empty factorization.
    pub fn new(value: u64) -> Self {
        let mut factors = Vec::new();
        let mut remaining = value;

        for candidate in PrimeCandidates::new() {
            if exceeds_square_root(candidate, remaining) {
                break;
            }

            let power = divide_out_factor(&mut remaining, candidate);
            push_factor(&mut factors, candidate, power);
        }
        push_factor(&mut factors, remaining, 1);

        trace!(value, ?factors, "factorized");
        Self { factors, value }
    }

    /// Create a factorization from a map of prime factors to their powers.
    ///
    /// The value is computed as the product of all factors, which is `1` when there are none.
    ///
    /// # Arguments
    ///
    /// * `factors`: `(prime, power)` tuples in any order. Tuples with the same prime are combined,
    /// tuples with power zero are dropped. The caller is responsible for the factors being prime.
    ///
    /// # Panics
    ///
    /// When the product doesn't fit in a `u64`, like primitive integer multiplication does.
    pub fn from_factors(factors: impl IntoIterator<Item = (Factor, Power)>) -> Self {
        let factors = normalize(factors);
        let value = factors.iter()
            .fold(1, |product: u64, &(prime, power)| product * prime.pow(power));

        Self { factors, value }
    }

    /// Create a factorization from a map of prime factors to their powers.
    ///
    /// See `from_factors`.
    ///
    /// # Errors
    ///
    /// `Error::Overflow` when the product doesn't fit in a `u64`.
    pub fn checked_from_factors(factors: impl IntoIterator<Item = (Factor, Power)>) -> Result<Self> {
        let factors = normalize(factors);
        let value = factors.iter()
            .try_fold(1_u64, |product, &(prime, power)| {
                prime.checked_pow(power).and_then(|factor| product.checked_mul(factor))
            })
            .ok_or(Error::Overflow("value of a factorization"))?;

        Ok(Self { factors, value })
    }

    /// The represented value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// `(prime factor, power)` tuples, sorted by the prime factor.
    pub fn factors(&self) -> &[(Factor, Power)] {
        &self.factors
    }

    /// Power of a prime in this factorization, if it appears at all.
    pub fn power_of(&self, prime: Factor) -> Option<Power> {
        self.index_of(prime).ok().map(|index| self.factors[index].1)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Divide the value by `prime ^ power`, in place.
    ///
    /// Nothing happens when the prime doesn't appear in this factorization. When `power` is at least
    /// the power that is present, the prime is removed from the factors entirely.
    ///
    /// The value is divided by the full `prime ^ power` even when less than `power` is present,
    /// after which the value and the factors no longer agree. Use `try_remove` to detect that case.
    pub fn remove(&mut self, prime: Factor, power: Power) {
        let index = match self.index_of(prime) {
            Ok(index) => index,
            Err(_) => return,
        };
        let present = self.factors[index].1;

        // A divisor too large for a `u64` is also larger than the value.
        self.value = prime.checked_pow(power).map_or(0, |divisor| self.value / divisor);

        if power < present {
            self.factors[index].1 -= power;
        } else {
            if power > present {
                warn!(prime, power, present, "removed more of a prime than was present");
            }
            self.factors.remove(index);
        }
    }

    /// Divide the value by `prime ^ power`, in place, if that power is present.
    ///
    /// Like `remove`, a prime that doesn't appear is ignored.
    ///
    /// # Errors
    ///
    /// `Error::ExponentUnderflow` when less than `power` is present. The factorization is left
    /// unchanged in that case.
    pub fn try_remove(&mut self, prime: Factor, power: Power) -> Result<()> {
        match self.power_of(prime) {
            Some(present) if present < power => Err(Error::ExponentUnderflow {
                prime,
                requested: power,
                present,
            }),
            Some(_) => {
                self.remove(prime, power);
                Ok(())
            },
            None => Ok(()),
        }
    }

    /// Product of two factorizations, neither of which is modified.
    ///
    /// # Panics
    ///
    /// When the product doesn't fit in a `u64`, like primitive integer multiplication does.
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            factors: merge_sparse_exponents(&self.factors, &other.factors),
            value: self.value * other.value,
        }
    }

    /// Product of two factorizations, neither of which is modified.
    ///
    /// # Errors
    ///
    /// `Error::Overflow` when the product doesn't fit in a `u64`.
    pub fn checked_multiply(&self, other: &Self) -> Result<Self> {
        let value = self.value.checked_mul(other.value)
            .ok_or(Error::Overflow("product of factorizations"))?;

        Ok(Self {
            factors: merge_sparse_exponents(&self.factors, &other.factors),
            value,
        })
    }

    fn index_of(&self, prime: Factor) -> std::result::Result<usize, usize> {
        self.factors.binary_search_by_key(&prime, |&(factor, _)| factor)
    }
}

/// Divide `factor` out of `remaining` as often as possible.
///
/// # Return value
///
/// How often `factor` divided `remaining`.
fn divide_out_factor(remaining: &mut u64, factor: Factor) -> Power {
    debug_assert!(remaining.is_not_zero());

    let mut power = 0;
    while *remaining % factor == 0 {
        *remaining /= factor;
        power += 1;
    }

    power
}

/// Record a factor, unless it is not a factor at all.
///
/// Values below 2 are what remains after factorizing `0` or `1`, or after all factors have been
/// divided out.
fn push_factor(factors: &mut Vec<(Factor, Power)>, prime: Factor, power: Power) {
    if prime < 2 || power < 1 {
        return;
    }

    debug_assert!(factors.last().map_or(true, |&(last, _)| last < prime));
    factors.push((prime, power));
}

fn normalize(factors: impl IntoIterator<Item = (Factor, Power)>) -> Vec<(Factor, Power)> {
    let factors = factors.into_iter()
        .filter(|(_, power)| power.is_not_zero())
        .sorted_by_key(|&(prime, _)| prime)
        .coalesce(|(prime, power), (next_prime, next_power)| {
            if prime == next_prime {
                Ok((prime, power + next_power))
            } else {
                Err(((prime, power), (next_prime, next_power)))
            }
        })
        .collect::<Vec<_>>();

    #[cfg(debug_assertions)]
    debug_assert!(factors.iter().all(|(prime, _)| prime.is_prime()));

    factors
}

/// Merge two sorted sparse exponent maps, adding the powers of primes that appear in both.
fn merge_sparse_exponents(
    left: &[(Factor, Power)],
    right: &[(Factor, Power)],
) -> Vec<(Factor, Power)> {
    left.iter()
        .merge_join_by(right.iter(), |(left_prime, _), (right_prime, _)| left_prime.cmp(right_prime))
        .map(|pair| match pair {
            EitherOrBoth::Both(&(prime, left_power), &(_, right_power)) => (prime, left_power + right_power),
            EitherOrBoth::Left(&factor) | EitherOrBoth::Right(&factor) => factor,
        })
        .collect()
}

impl Mul for Factorization {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Factorization> for &Factorization {
    type Output = Factorization;

    fn mul(self, rhs: &Factorization) -> Self::Output {
        self.multiply(rhs)
    }
}

impl One for Factorization {
    fn one() -> Self {
        Self { factors: Vec::new(), value: 1 }
    }

    fn is_one(&self) -> bool {
        self.value == 1
    }
}

impl From<u64> for Factorization {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl TryFrom<i64> for Factorization {
    type Error = Error;

    /// Factorize a signed value.
    ///
    /// # Errors
    ///
    /// `Error::NegativeFactorization` for values below zero, trial division is only defined for
    /// non-negative values.
    fn try_from(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map(Self::new)
            .map_err(|_| Error::NegativeFactorization(value))
    }
}

impl fmt::Display for Factorization {
    /// Formats as `"360: 2^3*3^2*5"`, that is, the value followed by the factors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let factors = self.factors.iter()
            .map(|&(prime, power)| match power {
                1 => prime.to_string(),
                _ => format!("{}^{}", prime, power),
            })
            .join("*");

        write!(f, "{}: {}", self.value, factors)
    }
}
