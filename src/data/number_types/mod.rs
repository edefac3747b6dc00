//! # Number types
//!
//! Integers kept as prime factorizations, and the fractions built from them.
pub mod integer;
pub mod nonzero;
pub mod rational;
pub mod traits;
