//! Memory sources that fail on a schedule.
//!
//! - [`FailAfter`]: admits the first N requests, refuses the rest.
//! - [`FlakySource`]: refuses a seeded, reproducible fraction of requests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use ckzg_core::{AllocError, AllocRequest, MemorySource};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Admits a fixed number of requests, then refuses every later one.
///
/// Uses `AtomicUsize` for the call counter so it satisfies `Sync`.
pub struct FailAfter {
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailAfter {
    /// Create a source that admits `succeed_count` requests then refuses.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `admit()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

impl MemorySource for FailAfter {
    fn admit(&self, request: &AllocRequest) -> Result<(), AllocError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(request.exhausted());
        }
        Ok(())
    }
}

/// Refuses roughly `failure_per_mille / 1000` of requests.
///
/// Driven by a seeded ChaCha8 RNG, so a given seed and request sequence
/// always produces the same refusals.
pub struct FlakySource {
    pub failure_per_mille: u32,
    rng: Mutex<ChaCha8Rng>,
}

impl FlakySource {
    /// Create a flaky source. `failure_per_mille` is clamped to 1000.
    pub fn new(seed: u64, failure_per_mille: u32) -> Self {
        Self {
            failure_per_mille: failure_per_mille.min(1000),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl MemorySource for FlakySource {
    fn admit(&self, request: &AllocRequest) -> Result<(), AllocError> {
        let roll = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.next_u32() % 1000
        };
        if roll < self.failure_per_mille {
            return Err(request.exhausted());
        }
        Ok(())
    }
}
