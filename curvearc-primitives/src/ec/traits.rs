#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Unified Curve Handle Traits
//!
//! Capability traits implemented by every curve handle. A handle always
//! implements [`CurveHandle`]; signature-capable families add
//! [`EcSignature`], Diffie-Hellman-capable families add [`EcKeyAgreement`].

use zeroize::Zeroizing;

use crate::error::{CurveError, Result};
use crate::rand::{RandomSource, random_bytes};

/// Curve family a handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    /// Twisted Edwards curves (Ed25519).
    Edwards,
    /// Montgomery curves (X25519).
    Montgomery,
    /// Short Weierstrass curves (secp256k1).
    Weierstrass,
    /// Pairing-friendly curves (BLS12-381, BN254).
    Pairing,
}

impl std::fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveFamily::Edwards => write!(f, "Edwards"),
            CurveFamily::Montgomery => write!(f, "Montgomery"),
            CurveFamily::Weierstrass => write!(f, "Weierstrass"),
            CurveFamily::Pairing => write!(f, "Pairing"),
        }
    }
}

/// Static parameters describing a curve handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveMetadata {
    /// Family of the curve.
    pub family: CurveFamily,
    /// Base-field prime, big-endian.
    pub field_prime: &'static [u8],
    /// Byte length of a base-field element.
    pub field_byte_length: usize,
    /// Byte length of a private key (scalar or scalar seed).
    pub private_key_length: usize,
    /// Byte length of an encoded public point in compressed form.
    pub point_byte_length: usize,
    /// Byte length of the uncompressed encoding, `None` when the curve has only one encoding.
    pub uncompressed_point_byte_length: Option<usize>,
}

impl CurveMetadata {
    /// Encoded public key length for the requested form, `None` if that form does not exist.
    #[must_use]
    pub fn public_key_length(&self, compressed: bool) -> Option<usize> {
        if compressed { Some(self.point_byte_length) } else { self.uncompressed_point_byte_length }
    }
}

/// Operations every curve handle provides.
pub trait CurveHandle: Send + Sync {
    /// Curve parameters.
    fn metadata(&self) -> &CurveMetadata;

    /// The random-byte source bound at construction.
    fn random_source(&self) -> &dyn RandomSource;

    /// Draw `len` bytes from the bound source.
    ///
    /// # Errors
    /// Returns [`CurveError::Random`] if the source fails.
    fn random_bytes(&self, len: usize) -> Result<Zeroizing<Vec<u8>>> {
        Ok(random_bytes(self.random_source(), len)?)
    }

    /// The arithmetic library's own private key generator.
    ///
    /// # Errors
    /// Returns an error if the source fails or the sampled bytes are not a valid scalar.
    fn random_private_key(&self) -> Result<Zeroizing<Vec<u8>>>;

    /// Curve-specific bit adjustment of raw scalar bytes. No-op unless overridden.
    fn adjust_scalar_bytes(&self, _bytes: &mut [u8]) {}

    /// Reduce a wide byte string into a non-zero scalar of `private_key_length` bytes.
    ///
    /// # Errors
    /// Returns [`CurveError::Unsupported`] for curves without a prime-order scalar field
    /// exposed by their backend, or [`CurveError::InvalidPrivateKey`] if the reduction is zero.
    fn hash_to_scalar(&self, _wide: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        Err(CurveError::Unsupported { curve: self.name(), operation: "hash_to_scalar" })
    }

    /// Encode the public point for `private_key`.
    ///
    /// # Errors
    /// Returns an error if the private key has the wrong length or is not a valid scalar,
    /// or if the requested encoding does not exist for this curve.
    fn derive_public_key(&self, private_key: &[u8], compressed: bool) -> Result<Vec<u8>>;

    /// Short human-readable name used in logs and errors.
    fn name(&self) -> &'static str;
}

/// Signature capability.
pub trait EcSignature: CurveHandle {
    /// Sign `message` with `private_key`.
    ///
    /// # Errors
    /// Returns an error if the private key is invalid.
    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>>;

    /// Verify `signature` over `message` under `public_key`.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not verify.
    ///
    /// # Errors
    /// Returns an error if the public key or signature is malformed.
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool>;

    /// Signature length in bytes.
    fn signature_len(&self) -> usize;
}

/// Diffie-Hellman capability.
pub trait EcKeyAgreement: CurveHandle {
    /// Compute the shared secret between `private_key` and `peer_public_key`.
    ///
    /// # Errors
    /// Returns an error if either key is malformed or the result is degenerate.
    fn get_shared_secret(
        &self,
        private_key: &[u8],
        peer_public_key: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>>;
}

/// Copy a checked slice into a fixed-size array.
pub(crate) fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    <[u8; N]>::try_from(bytes)
        .map_err(|_e| CurveError::InvalidKeyLength { expected: N, actual: bytes.len() })
}
