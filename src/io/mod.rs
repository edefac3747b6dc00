//! # Reading fractions from text
pub mod parse;
