//! # Parsing fractions
//!
//! Accepted forms, each with an optional leading `-`:
//!
//! * `"<integer>"`, such as `"5"`, read as `5/1`.
//! * `"<integer>/<integer>"`, such as `"3/6"`.
//! * `"<integer>.<digits>"`, such as `"0.25"`, read as `25/100`.
use std::convert::TryFrom;
use std::str::FromStr;

use crate::data::number_types::integer::factorization::Factorization;
use crate::data::number_types::nonzero::NonzeroSign as Sign;
use crate::data::number_types::rational::Fraction;
use crate::error::{Error, Parse, Result};

impl FromStr for Fraction {
    type Err = Error;

    /// # Errors
    ///
    /// `Error::Parse` for text that is not of one of the accepted forms or that doesn't fit in a
    /// `u64`, `Error::DivisionByZero` for a zero denominator.
    fn from_str(text: &str) -> Result<Self> {
        Raw::try_from(text)?.into_fraction()
    }
}

/// Fraction as written, before factorization.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Raw {
    sign: Sign,
    numerator: u64,
    denominator: u64,
}

impl Raw {
    fn into_fraction(self) -> Result<Fraction> {
        let Raw { sign, numerator, denominator } = self;

        if denominator == 0 {
            return Err(Error::DivisionByZero);
        }

        Ok(Fraction::from_factorizations(
            sign,
            Factorization::new(numerator),
            Factorization::new(denominator),
        ))
    }
}

impl TryFrom<&str> for Raw {
    type Error = Parse;

    fn try_from(text: &str) -> std::result::Result<Self, Self::Error> {
        let text = text.trim();
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, text),
        };

        let parse = |part: &str, number_part| part.parse::<u64>()
            .map_err(|error| Parse::wrap_other(
                error,
                format!("Failed to parse {} \"{}\" of \"{}\" as u64.", number_part, part, text),
            ));

        let (numerator, denominator) = if let Some(index) = unsigned.find('/') {
            let numerator = parse(&unsigned[..index], "numerator")?;
            let denominator = parse(&unsigned[(index + 1)..], "denominator")?;

            (numerator, denominator)
        } else if let Some(index) = unsigned.find('.') {
            let decimals = &unsigned[(index + 1)..];
            let integer_part = parse(&unsigned[..index], "integer part")?;
            let decimal_part = parse(decimals, "decimal part")?;

            let too_large = || Parse::new(format!("Value \"{}\" doesn't fit in a u64 fraction.", text));
            let denominator = u32::try_from(decimals.len()).ok()
                .and_then(|length| 10_u64.checked_pow(length))
                .ok_or_else(too_large)?;
            let numerator = integer_part.checked_mul(denominator)
                .and_then(|shifted| shifted.checked_add(decimal_part))
                .ok_or_else(too_large)?;

            (numerator, denominator)
        } else {
            (parse(unsigned, "entire value")?, 1)
        };

        Ok(Self { sign, numerator, denominator })
    }
}
