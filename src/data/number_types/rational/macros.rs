/// Shorthand for creating a fraction in tests.
#[macro_export]
macro_rules! F {
    ($value:expr) => {
        $crate::Fraction::new($value, 1)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction::new($numer, $denom)
    };
}
