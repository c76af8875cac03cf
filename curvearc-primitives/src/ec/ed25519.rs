#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Ed25519 Curve Handle
//!
//! Edwards-family handle backed by the ed25519-dalek crate. Private keys are
//! RFC 8032 32-byte seeds; public keys are the 32-byte compressed point.

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use tracing::instrument;
use zeroize::Zeroizing;

use super::traits::{CurveFamily, CurveHandle, CurveMetadata, EcSignature, to_array};
use crate::error::{CurveError, Result};
use crate::rand::{RandomSource, SharedRandomSource, os_random};

/// Ed25519 key and point size in bytes
pub const ED25519_KEY_SIZE: usize = 32;

/// Ed25519 signature size in bytes
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// 2^255 - 19, big-endian
pub const ED25519_FIELD_PRIME: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xed,
];

const METADATA: CurveMetadata = CurveMetadata {
    family: CurveFamily::Edwards,
    field_prime: &ED25519_FIELD_PRIME,
    field_byte_length: 32,
    private_key_length: ED25519_KEY_SIZE,
    point_byte_length: ED25519_KEY_SIZE,
    uncompressed_point_byte_length: None,
};

/// Ed25519 curve handle
#[derive(Clone)]
pub struct Ed25519Curve {
    source: SharedRandomSource,
}

impl Ed25519Curve {
    /// Bind a handle to `source`.
    #[must_use]
    pub fn new(source: SharedRandomSource) -> Self {
        Self { source }
    }

    /// Bind a handle to the operating system CSPRNG.
    #[must_use]
    pub fn with_os_rng() -> Self {
        Self::new(os_random())
    }

    fn signing_key(private_key: &[u8]) -> Result<SigningKey> {
        let seed = Zeroizing::new(to_array::<ED25519_KEY_SIZE>(private_key)?);
        Ok(SigningKey::from_bytes(&seed))
    }
}

impl CurveHandle for Ed25519Curve {
    fn metadata(&self) -> &CurveMetadata {
        &METADATA
    }

    fn random_source(&self) -> &dyn RandomSource {
        self.source.as_ref()
    }

    fn random_private_key(&self) -> Result<Zeroizing<Vec<u8>>> {
        self.random_bytes(ED25519_KEY_SIZE)
    }

    #[instrument(level = "debug", skip(self, private_key), fields(sk_len = private_key.len()))]
    fn derive_public_key(&self, private_key: &[u8], compressed: bool) -> Result<Vec<u8>> {
        if !compressed {
            return Err(CurveError::Unsupported { curve: self.name(), operation: "uncompressed point" });
        }
        let signing_key = Self::signing_key(private_key)?;
        Ok(signing_key.verifying_key().to_bytes().to_vec())
    }

    fn name(&self) -> &'static str {
        "Ed25519"
    }
}

impl EcSignature for Ed25519Curve {
    #[instrument(level = "debug", skip(self, private_key, message), fields(message_len = message.len()))]
    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        let signing_key = Self::signing_key(private_key)?;
        Ok(signing_key.sign(message).to_bytes().to_vec())
    }

    #[instrument(level = "debug", skip(self, public_key, message, signature), fields(message_len = message.len()))]
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
        let pk_bytes = to_array::<ED25519_KEY_SIZE>(public_key)?;
        let verifying_key = VerifyingKey::from_bytes(&pk_bytes)
            .map_err(|e| CurveError::InvalidPublicKey(e.to_string()))?;
        let signature = Signature::from_slice(signature)
            .map_err(|e| CurveError::InvalidSignature(e.to_string()))?;

        // Strict verification also rejects small-order public keys.
        Ok(verifying_key.verify_strict(message, &signature).is_ok())
    }

    fn signature_len(&self) -> usize {
        ED25519_SIGNATURE_SIZE
    }
}

impl std::fmt::Debug for Ed25519Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Curve").field("metadata", &METADATA).finish_non_exhaustive()
    }
}
