//! Core traits for the bank system
//!
//! Defines the seam through which account numbers are produced, so the
//! session can run with random numbers in production and predictable ones in
//! tests and scripted runs.

use crate::types::AccountId;

/// Source of candidate account numbers
///
/// Implementations only propose numbers. Uniqueness against existing
/// accounts is checked by the caller, which asks again on a clash.
pub trait IdGenerator {
    /// Produce the next candidate account number
    fn next_id(&mut self) -> AccountId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> AccountId,
{
    fn next_id(&mut self) -> AccountId {
        self()
    }
}
