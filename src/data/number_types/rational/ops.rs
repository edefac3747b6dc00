//! # Arithmetic
//!
//! Every operation creates a new fraction, the operands are never modified.
//!
//! Each operation comes in two flavours. The unchecked one behaves like primitive integer
//! arithmetic when values don't fit in a `u64`, and turns division by zero into a degenerate
//! fraction. The checked one reports both as an `Error`.
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::{One, Zero};

use crate::data::number_types::integer::factorization::Factorization;
use crate::data::number_types::nonzero::NonzeroSign as Sign;
use crate::data::number_types::rational::Fraction;
use crate::error::{Error, Result};

impl Fraction {
    /// Sum of two fractions.
    ///
    /// The new numerator is computed on the values and factorized again, the new denominator is the
    /// product of both denominators at the factorization level.
    pub fn add(&self, other: &Self) -> Self {
        self.cross_sum(other, other.sign)
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.checked_cross_sum(other, other.sign)
    }

    /// Difference of two fractions, see `add`.
    pub fn minus(&self, other: &Self) -> Self {
        self.cross_sum(other, -other.sign)
    }

    pub fn checked_minus(&self, other: &Self) -> Result<Self> {
        self.checked_cross_sum(other, -other.sign)
    }

    /// Product of two fractions.
    ///
    /// Computed entirely by merging factorizations, nothing is factorized.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_factorizations(
            self.sign * other.sign,
            self.numerator.multiply(&other.numerator),
            self.denominator.multiply(&other.denominator),
        )
    }

    /// # Errors
    ///
    /// `Error::Overflow` when a product doesn't fit, `Error::DivisionByZero` when an operand is
    /// degenerate.
    pub fn checked_multiply(&self, other: &Self) -> Result<Self> {
        self.ensure_not_degenerate()?;
        other.ensure_not_degenerate()?;

        Ok(Self::from_factorizations(
            self.sign * other.sign,
            self.numerator.checked_multiply(&other.numerator)?,
            self.denominator.checked_multiply(&other.denominator)?,
        ))
    }

    /// Quotient of two fractions, the product with the inverse of `other`.
    ///
    /// Dividing by zero gives a degenerate fraction.
    pub fn divide(&self, other: &Self) -> Self {
        self.multiply(&other.inverse())
    }

    pub fn checked_divide(&self, other: &Self) -> Result<Self> {
        self.checked_multiply(&other.checked_inverse()?)
    }

    /// Swap the numerator and denominator.
    ///
    /// No factors need to be cancelled: the inverse of a fraction in lowest terms is in lowest terms
    /// as well. The inverse of zero is degenerate, and the inverse of a degenerate fraction is zero.
    pub fn inverse(&self) -> Self {
        Self::from_reduced(self.sign, self.denominator.clone(), self.numerator.clone())
    }

    /// # Errors
    ///
    /// `Error::DivisionByZero` when this fraction is zero or degenerate.
    pub fn checked_inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.ensure_not_degenerate()?;

        Ok(self.inverse())
    }

    fn cross_sum(&self, other: &Self, other_sign: Sign) -> Self {
        let left = self.numerator.value() * other.denominator.value();
        let right = other.numerator.value() * self.denominator.value();

        let (sign, magnitude) = if self.sign == other_sign {
            (self.sign, left + right)
        } else if left >= right {
            (self.sign, left - right)
        } else {
            (other_sign, right - left)
        };

        Self::from_factorizations(
            sign,
            Factorization::new(magnitude),
            self.denominator.multiply(&other.denominator),
        )
    }

    fn checked_cross_sum(&self, other: &Self, other_sign: Sign) -> Result<Self> {
        self.ensure_not_degenerate()?;
        other.ensure_not_degenerate()?;

        let overflow = || Error::Overflow("numerator of a sum of fractions");
        let left = self.numerator.value().checked_mul(other.denominator.value()).ok_or_else(overflow)?;
        let right = other.numerator.value().checked_mul(self.denominator.value()).ok_or_else(overflow)?;

        let (sign, magnitude) = if self.sign == other_sign {
            (self.sign, left.checked_add(right).ok_or_else(overflow)?)
        } else if left >= right {
            (self.sign, left - right)
        } else {
            (other_sign, right - left)
        };

        Ok(Self::from_factorizations(
            sign,
            Factorization::new(magnitude),
            self.denominator.checked_multiply(&other.denominator)?,
        ))
    }
}

macro_rules! impl_binary_operator {
    ($operator:ident, $function:ident, $method:ident) => {
        impl $operator for Fraction {
            type Output = Self;

            fn $function(self, rhs: Self) -> Self::Output {
                Fraction::$method(&self, &rhs)
            }
        }

        impl $operator<&Fraction> for Fraction {
            type Output = Self;

            fn $function(self, rhs: &Fraction) -> Self::Output {
                Fraction::$method(&self, rhs)
            }
        }

        impl $operator<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $function(self, rhs: &Fraction) -> Self::Output {
                Fraction::$method(self, rhs)
            }
        }
    }
}

impl_binary_operator!(Add, add, add);
impl_binary_operator!(Sub, sub, minus);
impl_binary_operator!(Mul, mul, multiply);
impl_binary_operator!(Div, div, divide);

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let Fraction { sign, numerator, denominator } = self;
        Self::from_reduced(-sign, numerator, denominator)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::new_zero()
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_reduced(Sign::Positive, Factorization::one(), Factorization::one())
    }
}
