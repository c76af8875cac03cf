#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Random-Byte Sources
//!
//! Curve handles never reach for a global RNG. They are constructed with a
//! [`RandomSource`] so that key generation can be driven by the operating
//! system CSPRNG in production and by a seeded stream in tests.

pub mod csprng;

use std::sync::Arc;

use thiserror::Error;
use zeroize::Zeroizing;

pub use csprng::{OsRandom, SeededRandom};

/// Failure reported by a random-byte source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// The underlying generator could not produce bytes.
    #[error("Random source unavailable: {0}")]
    Unavailable(String),
}

/// A cryptographically secure source of random bytes.
///
/// Implementations must be safe to share between threads; curve handles hold
/// them behind an [`Arc`].
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    /// Returns an error if the source cannot produce the requested bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError>;
}

/// Shared handle to a random-byte source.
pub type SharedRandomSource = Arc<dyn RandomSource>;

/// Draw `len` bytes from `source` into a buffer that is wiped on drop.
///
/// # Errors
/// Propagates the source's failure.
pub fn random_bytes(source: &dyn RandomSource, len: usize) -> Result<Zeroizing<Vec<u8>>, RandomError> {
    let mut bytes = Zeroizing::new(vec![0u8; len]);
    source.fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// The default source: the operating system CSPRNG.
#[must_use]
pub fn os_random() -> SharedRandomSource {
    Arc::new(OsRandom)
}
