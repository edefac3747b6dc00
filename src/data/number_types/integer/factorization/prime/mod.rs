//! # Primes
//!
//! Trial division candidates. The candidates are 2, 3 and then every number of the form `6k ± 1`,
//! reached by alternating steps of 2 and 4. That wheel skips all multiples of 2 and 3, but does not
//! test the candidates for primality: composite candidates such as 25 or 35 are produced as well.
//! When dividing out factors in ascending order, the prime factors of such a composite candidate
//! have already been removed by the time it is tried, so it never divides the remaining value.
use crate::data::number_types::nonzero::Nonzero;

/// Infinite sequence of trial division candidates `2, 3, 5, 7, 11, 13, 17, 19, 23, 25, ...`.
///
/// Restart by constructing a new instance. The sequence only ends when the next candidate would no
/// longer fit in a `u64`, which trial division of a `u64` never reaches.
#[derive(Clone, Debug)]
pub struct PrimeCandidates {
    next: Option<u64>,
    step: u64,
}

impl PrimeCandidates {
    pub fn new() -> Self {
        Self { next: Some(2), step: 1 }
    }
}

impl Default for PrimeCandidates {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeCandidates {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        self.next = match current {
            2 => Some(3),
            3 => {
                self.step = 2;
                Some(5)
            },
            _ => {
                let next = current.checked_add(self.step);
                self.step = 6 - self.step;
                next
            },
        };

        Some(current)
    }
}

/// Whether a candidate is too large to divide the remaining value of a trial division.
///
/// That is the case once `candidate * candidate > remaining`; a square that doesn't fit in a `u64`
/// is larger than any remaining value.
pub(crate) fn exceeds_square_root(candidate: u64, remaining: u64) -> bool {
    candidate.checked_mul(candidate).map_or(true, |square| square > remaining)
}

pub trait Prime: Nonzero {
    fn is_prime(&self) -> bool;
}

impl Prime for u64 {
    /// Deterministic primality through trial division by the wheel candidates.
    ///
    /// Only used to verify caller supplied exponent maps in debug builds, so the `O(√n)` cost is
    /// acceptable.
    fn is_prime(&self) -> bool {
        debug_assert!(self.is_not_zero());

        if *self < 2 {
            return false;
        }

        PrimeCandidates::new()
            .take_while(|&candidate| !exceeds_square_root(candidate, *self))
            .all(|candidate| *self % candidate != 0)
    }
}
