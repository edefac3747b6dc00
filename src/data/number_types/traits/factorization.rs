use crate::data::number_types::integer::factorization::Factorization;

/// Values that can be written as a product of primes.
pub trait Factorizable {
    /// Prime factorization of the value.
    ///
    /// Zero is factorized into the empty factorization with value `0`.
    fn factorize(&self) -> Factorization;
}

macro_rules! impl_factorizable_unsigned {
    ($t:ident) => {
        impl Factorizable for $t {
            fn factorize(&self) -> Factorization {
                Factorization::new(*self as u64)
            }
        }
    }
}

impl_factorizable_unsigned!(u8);
impl_factorizable_unsigned!(u16);
impl_factorizable_unsigned!(u32);
impl_factorizable_unsigned!(u64);
impl_factorizable_unsigned!(usize);

#[cfg(test)]
mod test {
    use crate::data::number_types::traits::factorization::Factorizable;

    #[test]
    fn test_factorize() {
        assert_eq!(2_u8.factorize().factors(), &[(2, 1)]);
        assert_eq!(250_u8.factorize().factors(), &[(2, 1), (5, 3)]);
        assert_eq!(65535_u16.factorize().factors(), &[(3, 1), (5, 1), (17, 1), (257, 1)]);
        assert_eq!(0_u32.factorize().value(), 0);
        assert_eq!(12_usize.factorize(), 12_u64.factorize());
    }
}
