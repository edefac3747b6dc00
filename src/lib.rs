//! # Factored
//!
//! Exact fractions whose numerator and denominator are stored as prime factorizations.
//!
//! Common factors of a fraction are cancelled by subtracting exponents, so long chains of
//! multiplications and divisions never compute a greatest common divisor.
//!
//! ```
//! use factored::Fraction;
//!
//! let a: Fraction = "1/20".parse().unwrap();
//! let b: Fraction = "10/3".parse().unwrap();
//! let c: Fraction = "1/6".parse().unwrap();
//!
//! assert_eq!(a.multiply(&b).add(&c).to_string(), "1/3");
//! ```
pub use data::number_types::integer::factorization::{Factor, Factorization, Power};
pub use data::number_types::integer::factorization::prime::{Prime, PrimeCandidates};
pub use data::number_types::nonzero::{Nonzero, NonzeroSign as Sign};
pub use data::number_types::rational::{Fraction, simplify};
pub use data::number_types::traits::factorization::Factorizable;
pub use error::{Error, Parse, Result};

pub mod data;
pub mod error;
pub mod io;
