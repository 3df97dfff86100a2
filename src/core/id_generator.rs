//! Account number generators
//!
//! - [`RandomIdGenerator`] draws uniformly from `0..=MAX_ACCOUNT_ID`
//! - [`SequentialIdGenerator`] counts up from a starting number

use crate::core::traits::IdGenerator;
use crate::types::{AccountId, MAX_ACCOUNT_ID};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random account numbers
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    rng: StdRng,
}

impl RandomIdGenerator {
    /// Generator seeded from the operating system
    pub fn new() -> Self {
        RandomIdGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        RandomIdGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> AccountId {
        self.rng.gen_range(0..=MAX_ACCOUNT_ID)
    }
}

/// Sequential account numbers
///
/// Wraps back to zero after `MAX_ACCOUNT_ID`.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: AccountId,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: AccountId) -> Self {
        SequentialIdGenerator {
            next: first.min(MAX_ACCOUNT_ID),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> AccountId {
        let id = self.next;
        self.next = if id >= MAX_ACCOUNT_ID { 0 } else { id + 1 };
        id
    }
}
