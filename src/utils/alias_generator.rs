//! Random alias generation.
//!
//! Produces fixed-length alphanumeric codes from an owned, injectable random
//! source so tests can replay deterministic sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Number of characters in a generated alias.
pub const ALIAS_LENGTH: usize = 8;

/// Characters a generated alias is drawn from (62 symbols, ~5.95 bits each).
pub const ALIAS_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of candidate aliases.
///
/// Implementations are pure generators and never touch storage; uniqueness is
/// enforced by the store.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Draws [`ALIAS_LENGTH`] characters uniformly, with replacement, from
/// [`ALIAS_ALPHABET`].
pub struct RandomAliasGenerator<R = StdRng> {
    rng: Mutex<R>,
}

impl RandomAliasGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomAliasGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: Rng + Send> AliasGenerator for RandomAliasGenerator<R> {
    fn generate(&self) -> String {
        // RNG state stays valid across a poisoned lock.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        (0..ALIAS_LENGTH)
            .map(|_| ALIAS_ALPHABET[rng.random_range(0..ALIAS_ALPHABET.len())] as char)
            .collect()
    }
}
