#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Concrete Random-Byte Sources
//!
//! - [`OsRandom`]: `OsRng`, the operating system CSPRNG.
//! - [`SeededRandom`]: a ChaCha20 stream for reproducible key generation.

use parking_lot::Mutex;
use rand::{RngCore, SeedableRng, rngs::OsRng};
use rand_chacha::ChaCha20Rng;

use super::{RandomError, RandomSource};

/// Operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        OsRng.try_fill_bytes(dest).map_err(|e| RandomError::Unavailable(e.to_string()))
    }
}

/// Deterministic ChaCha20 stream.
///
/// Two sources built from the same seed yield identical byte streams. Never
/// use a fixed seed outside of tests.
pub struct SeededRandom {
    rng: Mutex<ChaCha20Rng>,
}

impl SeededRandom {
    /// Create a source from a 32-byte seed.
    #[must_use]
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self { rng: Mutex::new(ChaCha20Rng::from_seed(seed)) }
    }

    /// Create a source from a `u64` seed.
    #[must_use]
    pub fn from_u64(seed: u64) -> Self {
        Self { rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)) }
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        self.rng.lock().try_fill_bytes(dest).map_err(|e| RandomError::Unavailable(e.to_string()))
    }
}

impl std::fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededRandom").field("rng", &"[REDACTED]").finish()
    }
}
