//! Error types for CurveArc Core operations.
//!
//! Every public operation of the key layer reports exactly one of the kinds
//! below. Kinds that wrap a lower-level failure keep it as a structured
//! [`std::error::Error::source`] so callers can walk the chain.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use curvearc_primitives::CurveError;
use thiserror::Error;

/// Boxed cause carried by [`KeyError::Conversion`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur in the curve key layer.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The random-byte source or the curve's own key generator failed.
    #[error("{message}")]
    KeyGeneration {
        /// Operation-level description.
        message: String,
        /// Underlying curve failure.
        #[source]
        source: CurveError,
    },

    /// The caller asked for a representation this layer forbids.
    #[error("{0}")]
    Policy(String),

    /// The curve rejected the private key while deriving its public key.
    #[error("{message}")]
    PublicKeyDerivation {
        /// Operation-level description.
        message: String,
        /// Underlying curve failure.
        #[source]
        source: CurveError,
    },

    /// Diffie-Hellman between a private key and a peer public key failed.
    #[error("{message}")]
    KeyAgreement {
        /// Operation-level description.
        message: String,
        /// Underlying curve failure.
        #[source]
        source: CurveError,
    },

    /// JWK encoding or decoding failed.
    #[error("{message}")]
    Conversion {
        /// Operation-level description.
        message: String,
        /// Whatever went wrong underneath: a length check, Base64URL, JSON, or derivation.
        #[source]
        source: BoxedCause,
    },

    /// Malformed input to a length-sensitive operation, or an invalid configuration.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Curve-name resolution matched no supported curve.
    #[error("Unknown curve: {0}")]
    UnknownCurve(String),
}

impl KeyError {
    pub(crate) fn key_generation(curve: &str, source: CurveError) -> Self {
        KeyError::KeyGeneration { message: format!("failed to generate {curve} private key"), source }
    }

    pub(crate) fn public_key_derivation(curve: &str, source: CurveError) -> Self {
        KeyError::PublicKeyDerivation {
            message: format!("failed to derive {curve} public key"),
            source,
        }
    }

    pub(crate) fn key_agreement(curve: &str, source: CurveError) -> Self {
        KeyError::KeyAgreement { message: format!("{curve} key agreement failed"), source }
    }

    pub(crate) fn conversion(message: &str, source: impl Into<BoxedCause>) -> Self {
        KeyError::Conversion { message: message.to_string(), source: source.into() }
    }
}

/// A specialized Result type for CurveArc Core operations.
pub type Result<T> = std::result::Result<T, KeyError>;
