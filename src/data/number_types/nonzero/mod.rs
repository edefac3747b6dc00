use num::Zero;

pub use sign::Sign as NonzeroSign;

pub mod sign;

/// Implementors should not be zero.
///
/// This trait is used for debug asserts. Primes and exponents in the sparse exponent map of a
/// factorization should never be zero: a prime with exponent zero is removed from the map instead
/// of being stored.
///
/// The `num::Zero` trait is for types that can be zero, this trait is for types that can be a value
/// other than zero. They may or may not be able to represent zero.
pub trait Nonzero {
    /// Whether the value is not equal to zero.
    ///
    /// Should always be `true`.
    fn is_not_zero(&self) -> bool;
}

macro_rules! could_be_zero {
    ($t: ident) => {
        impl Nonzero for $t {
            fn is_not_zero(&self) -> bool {
                !Zero::is_zero(self)
            }
        }
    }
}

could_be_zero!(u8);
could_be_zero!(u16);
could_be_zero!(u32);
could_be_zero!(u64);
could_be_zero!(usize);

#[cfg(test)]
mod test {
    use crate::data::number_types::nonzero::Nonzero;

    #[test]
    fn test_is_not_zero() {
        assert!(1_u32.is_not_zero());
        assert!(u64::MAX.is_not_zero());
        assert!(!0_u64.is_not_zero());
        assert!(!0_u8.is_not_zero());
    }
}
