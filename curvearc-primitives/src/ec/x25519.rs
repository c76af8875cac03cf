#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # X25519 Curve Handle
//!
//! Montgomery-family handle for RFC 7748 X25519 backed by x25519-dalek.
//!
//! The curve only has one point encoding (the 32-byte little-endian
//! u-coordinate), so uncompressed output is unsupported. Key agreement
//! rejects non-contributory results, i.e. when the peer sent a point of
//! small order and the shared secret collapsed to zero.

use tracing::{instrument, warn};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

use super::traits::{CurveFamily, CurveHandle, CurveMetadata, EcKeyAgreement, to_array};
use crate::error::{CurveError, Result};
use crate::rand::{RandomSource, SharedRandomSource, os_random};

/// X25519 key size in bytes
pub const X25519_KEY_SIZE: usize = 32;

/// 2^255 - 19, big-endian
pub const X25519_FIELD_PRIME: [u8; 32] = super::ed25519::ED25519_FIELD_PRIME;

const METADATA: CurveMetadata = CurveMetadata {
    family: CurveFamily::Montgomery,
    field_prime: &X25519_FIELD_PRIME,
    field_byte_length: 32,
    private_key_length: X25519_KEY_SIZE,
    point_byte_length: X25519_KEY_SIZE,
    uncompressed_point_byte_length: None,
};

/// RFC 7748 clamping: clear the three low bits, clear bit 255, set bit 254.
pub fn clamp_scalar(bytes: &mut [u8; X25519_KEY_SIZE]) {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
}

/// X25519 curve handle
#[derive(Clone)]
pub struct X25519Curve {
    source: SharedRandomSource,
}

impl X25519Curve {
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

    fn static_secret(private_key: &[u8]) -> Result<StaticSecret> {
        let bytes = Zeroizing::new(to_array::<X25519_KEY_SIZE>(private_key)?);
        Ok(StaticSecret::from(*bytes))
    }
}

impl CurveHandle for X25519Curve {
    fn metadata(&self) -> &CurveMetadata {
        &METADATA
    }

    fn random_source(&self) -> &dyn RandomSource {
        self.source.as_ref()
    }

    fn random_private_key(&self) -> Result<Zeroizing<Vec<u8>>> {
        // Unclamped: the scalar multiplication clamps on use.
        self.random_bytes(X25519_KEY_SIZE)
    }

    fn adjust_scalar_bytes(&self, bytes: &mut [u8]) {
        if let Ok(array) = <&mut [u8; X25519_KEY_SIZE]>::try_from(bytes) {
            clamp_scalar(array);
        }
    }

    #[instrument(level = "debug", skip(self, private_key), fields(sk_len = private_key.len()))]
    fn derive_public_key(&self, private_key: &[u8], compressed: bool) -> Result<Vec<u8>> {
        if !compressed {
            return Err(CurveError::Unsupported { curve: self.name(), operation: "uncompressed point" });
        }
        let secret = Self::static_secret(private_key)?;
        Ok(PublicKey::from(&secret).as_bytes().to_vec())
    }

    fn name(&self) -> &'static str {
        "X25519"
    }
}

impl EcKeyAgreement for X25519Curve {
    #[instrument(level = "debug", skip(self, private_key, peer_public_key), fields(peer_len = peer_public_key.len()))]
    fn get_shared_secret(
        &self,
        private_key: &[u8],
        peer_public_key: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        let peer = to_array::<X25519_KEY_SIZE>(peer_public_key)
            .map_err(|_e| CurveError::InvalidPublicKey(format!("expected {X25519_KEY_SIZE} bytes, got {}", peer_public_key.len())))?;
        let secret = Self::static_secret(private_key)?;

        let shared = secret.diffie_hellman(&PublicKey::from(peer));
        if !shared.was_contributory() {
            warn!("X25519 agreement produced a non-contributory shared secret");
            return Err(CurveError::NonContributory);
        }
        Ok(Zeroizing::new(shared.as_bytes().to_vec()))
    }
}

impl std::fmt::Debug for X25519Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("X25519Curve").field("metadata", &METADATA).finish_non_exhaustive()
    }
}
