//! # Integers
//!
//! Non-negative integers represented by their factorization into primes.
pub mod factorization;
