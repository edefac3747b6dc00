//! # Errors
//!
//! Operations that can't produce a meaningful value have a checked variant returning these errors.
//! The unchecked variants keep computing silently, see the documentation of each operation.
use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Everything that can go wrong in checked arithmetic or parsing.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] Parse),

    #[error("Can't factorize negative value {0}")]
    NegativeFactorization(i64),

    #[error("Can't remove prime {prime} with power {requested}, only power {present} is present")]
    ExponentUnderflow { prime: u64, requested: u32, present: u32 },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow while computing {0}")]
    Overflow(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A text could not be read as a fraction.
#[derive(Debug)]
pub struct Parse {
    description: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Parse {
    /// Create a new parse error.
    ///
    /// # Arguments
    ///
    /// * `description`: What went wrong, should include the offending text.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None }
    }

    /// Wrap an error from the standard library, such as a failed integer parse.
    ///
    /// # Arguments
    ///
    /// * `error`: Underlying cause.
    /// * `description`: What was being parsed when the cause occurred.
    pub fn wrap_other(
        error: impl StdError + Send + Sync + 'static,
        description: impl Into<String>,
    ) -> Self {
        Self { description: description.into(), source: Some(Box::new(error)) }
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            None => write!(f, "ParseError: {}", self.description),
            Some(source) => write!(f, "ParseError: {} (caused by: {})", self.description, source),
        }
    }
}

impl StdError for Parse {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|error| error.as_ref() as &(dyn StdError + 'static))
    }
}
