use std::fmt;
use std::ops::{Mul, Neg};

/// Sign of a fraction.
///
/// Existing `Sign` types, such as the one in `num`, typically have a third value for the sign of 0.
/// The magnitude of a fraction lives in its factorizations, which already know whether they are
/// zero, so only two variants are needed. Zero-valued fractions are always `Positive`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// `x >= 0`
    Positive,
    /// `x < 0`
    Negative,
}

impl Sign {
    /// Sign of a primitive signed integer, treating zero as positive.
    pub fn of(value: i64) -> Self {
        if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

impl Default for Sign {
    fn default() -> Self {
        Sign::Positive
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Positive, Sign::Positive) => Sign::Positive,
            (Sign::Positive, Sign::Negative) => Sign::Negative,
            (Sign::Negative, Sign::Positive) => Sign::Negative,
            (Sign::Negative, Sign::Negative) => Sign::Positive,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Positive => Ok(()),
            Sign::Negative => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::number_types::nonzero::sign::Sign;

    #[test]
    fn test_mul() {
        assert_eq!(Sign::Positive * Sign::Positive, Sign::Positive);
        assert_eq!(Sign::Positive * Sign::Negative, Sign::Negative);
        assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
    }

    #[test]
    fn test_of() {
        assert_eq!(Sign::of(-3), Sign::Negative);
        assert_eq!(Sign::of(0), Sign::Positive);
        assert_eq!(Sign::of(7), Sign::Positive);
        assert_eq!(-Sign::of(7), Sign::Negative);
    }
}
