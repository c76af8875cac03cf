//! Error types for curvearc-primitives crate.

use crate::rand::RandomError;

/// Errors surfaced by curve handles and the arithmetic crates behind them.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    /// A key or point had the wrong number of bytes.
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },

    /// The private key bytes do not encode a usable scalar.
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The public key bytes do not decode to a valid curve point.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The signature bytes are malformed.
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Key agreement produced the all-zero output.
    #[error("Shared secret is not contributory")]
    NonContributory,

    /// Point encoding failed inside the arithmetic backend.
    #[error("Point encoding failed: {0}")]
    Encoding(String),

    /// The curve family does not provide this operation.
    #[error("Operation not supported by {curve}: {operation}")]
    Unsupported {
        /// Curve the operation was requested on.
        curve: &'static str,
        /// The rejected operation.
        operation: &'static str,
    },

    /// The injected random-byte source failed.
    #[error("Random source failure")]
    Random(#[from] RandomError),
}

impl CurveError {
    /// Check `bytes` has exactly `expected` bytes.
    ///
    /// # Errors
    /// Returns [`CurveError::InvalidKeyLength`] on mismatch.
    pub fn check_length(bytes: &[u8], expected: usize) -> Result<()> {
        if bytes.len() != expected {
            return Err(CurveError::InvalidKeyLength { expected, actual: bytes.len() });
        }
        Ok(())
    }
}

/// Result type alias for curvearc-primitives operations.
pub type Result<T> = std::result::Result<T, CurveError>;
