#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # secp256k1 Curve Handle
//!
//! Weierstrass-family handle backed by the k256 crate. Provides
//! Bitcoin/Ethereum compatible key derivation (SEC1 compressed or
//! uncompressed points), ECDSA signatures and ECDH.

use k256::ecdsa::{Signature, SigningKey, VerifyingKey, signature::Signer, signature::Verifier};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use tracing::instrument;
use zeroize::Zeroizing;

use super::traits::{CurveFamily, CurveHandle, CurveMetadata, EcKeyAgreement, EcSignature};
use crate::error::{CurveError, Result};
use crate::rand::{RandomSource, SharedRandomSource, os_random};

/// secp256k1 private key size in bytes
pub const SECP256K1_SECRET_KEY_SIZE: usize = 32;

/// SEC1 compressed point size
pub const SECP256K1_COMPRESSED_POINT_SIZE: usize = 33;

/// SEC1 uncompressed point size
pub const SECP256K1_UNCOMPRESSED_POINT_SIZE: usize = 65;

/// secp256k1 base-field prime 2^256 - 2^32 - 977, big-endian
pub const SECP256K1_FIELD_PRIME: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

const METADATA: CurveMetadata = CurveMetadata {
    family: CurveFamily::Weierstrass,
    field_prime: &SECP256K1_FIELD_PRIME,
    field_byte_length: 32,
    private_key_length: SECP256K1_SECRET_KEY_SIZE,
    point_byte_length: SECP256K1_COMPRESSED_POINT_SIZE,
    uncompressed_point_byte_length: Some(SECP256K1_UNCOMPRESSED_POINT_SIZE),
};

/// secp256k1 curve handle
#[derive(Clone)]
pub struct Secp256k1Curve {
    source: SharedRandomSource,
}

impl Secp256k1Curve {
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

    fn secret_key(private_key: &[u8]) -> Result<SecretKey> {
        // from_slice left-pads short input, so the length is pinned first
        CurveError::check_length(private_key, SECP256K1_SECRET_KEY_SIZE)?;
        SecretKey::from_slice(private_key).map_err(|e| CurveError::InvalidPrivateKey(e.to_string()))
    }
}

impl CurveHandle for Secp256k1Curve {
    fn metadata(&self) -> &CurveMetadata {
        &METADATA
    }

    fn random_source(&self) -> &dyn RandomSource {
        self.source.as_ref()
    }

    fn random_private_key(&self) -> Result<Zeroizing<Vec<u8>>> {
        let bytes = self.random_bytes(SECP256K1_SECRET_KEY_SIZE)?;
        // Rejects zero and values >= n
        Self::secret_key(&bytes)?;
        Ok(bytes)
    }

    #[instrument(level = "debug", skip(self, private_key), fields(sk_len = private_key.len()))]
    fn derive_public_key(&self, private_key: &[u8], compressed: bool) -> Result<Vec<u8>> {
        let secret = Self::secret_key(private_key)?;
        Ok(secret.public_key().to_encoded_point(compressed).as_bytes().to_vec())
    }

    fn name(&self) -> &'static str {
        "secp256k1"
    }
}

impl EcSignature for Secp256k1Curve {
    #[instrument(level = "debug", skip(self, private_key, message), fields(message_len = message.len()))]
    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        CurveError::check_length(private_key, SECP256K1_SECRET_KEY_SIZE)?;
        let signing_key = SigningKey::from_slice(private_key)
            .map_err(|e| CurveError::InvalidPrivateKey(e.to_string()))?;
        let signature: Signature = signing_key.sign(message);
        Ok(signature.to_bytes().to_vec())
    }

    #[instrument(level = "debug", skip(self, public_key, message, signature), fields(message_len = message.len()))]
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| CurveError::InvalidPublicKey(e.to_string()))?;
        let signature = Signature::from_slice(signature)
            .map_err(|e| CurveError::InvalidSignature(e.to_string()))?;

        Ok(verifying_key.verify(message, &signature).is_ok())
    }

    fn signature_len(&self) -> usize {
        64
    }
}

impl EcKeyAgreement for Secp256k1Curve {
    #[instrument(level = "debug", skip(self, private_key, peer_public_key), fields(peer_len = peer_public_key.len()))]
    fn get_shared_secret(
        &self,
        private_key: &[u8],
        peer_public_key: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        let secret = Self::secret_key(private_key)?;
        let peer = PublicKey::from_sec1_bytes(peer_public_key)
            .map_err(|e| CurveError::InvalidPublicKey(e.to_string()))?;

        let shared = k256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
        Ok(Zeroizing::new(shared.raw_secret_bytes().to_vec()))
    }
}

impl std::fmt::Debug for Secp256k1Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1Curve").field("metadata", &METADATA).finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)] // Tests use assertions for verification
#[allow(clippy::indexing_slicing)] // Tests use direct indexing
#[allow(clippy::expect_used)] // Tests use expect for simplicity
mod tests {
    use super::*;
    use crate::rand::SeededRandom;
    use std::sync::Arc;

    fn curve() -> Secp256k1Curve {
        Secp256k1Curve::new(Arc::new(SeededRandom::from_u64(256)))
    }

    fn scalar_one() -> Vec<u8> {
        let mut one = vec![0u8; 32];
        one[31] = 1;
        one
    }

    #[test]
    fn test_secp256k1_generator_encodings() -> Result<()> {
        let curve = curve();
        let compressed = curve.derive_public_key(&scalar_one(), true)?;
        let uncompressed = curve.derive_public_key(&scalar_one(), false)?;

        assert_eq!(
            hex::encode(&compressed),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            hex::encode(&uncompressed),
            "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
             483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
        Ok(())
    }

    #[test]
    fn test_secp256k1_public_key_lengths() -> Result<()> {
        let curve = curve();
        let sk = curve.random_private_key()?;
        assert_eq!(curve.derive_public_key(&sk, true)?.len(), SECP256K1_COMPRESSED_POINT_SIZE);
        assert_eq!(curve.derive_public_key(&sk, false)?.len(), SECP256K1_UNCOMPRESSED_POINT_SIZE);
        Ok(())
    }

    #[test]
    fn test_secp256k1_sign_verify() -> Result<()> {
        let curve = curve();
        let sk = curve.random_private_key()?;
        let pk = curve.derive_public_key(&sk, true)?;
        let message = b"Hello, secp256k1!";
        let signature = curve.sign(&sk, message)?;

        assert_eq!(signature.len(), curve.signature_len());
        assert!(curve.verify(&pk, message, &signature)?);
        assert!(!curve.verify(&pk, b"Wrong message", &signature)?);

        // Uncompressed keys verify too
        let pk_uncompressed = curve.derive_public_key(&sk, false)?;
        assert!(curve.verify(&pk_uncompressed, message, &signature)?);
        Ok(())
    }

    #[test]
    fn test_secp256k1_ecdh_agreement() -> Result<()> {
        let curve = curve();
        let alice = curve.random_private_key()?;
        let bob = curve.random_private_key()?;
        let alice_pk = curve.derive_public_key(&alice, true)?;
        let bob_pk = curve.derive_public_key(&bob, false)?;

        let ab = curve.get_shared_secret(&alice, &bob_pk)?;
        let ba = curve.get_shared_secret(&bob, &alice_pk)?;
        assert_eq!(*ab, *ba);
        assert_eq!(ab.len(), 32);
        Ok(())
    }

    #[test]
    fn test_secp256k1_rejects_zero_scalar() {
        let result = curve().derive_public_key(&[0u8; 32], true);
        assert!(matches!(result, Err(CurveError::InvalidPrivateKey(_))));
    }

    #[test]
    fn test_secp256k1_rejects_scalar_above_order() {
        let result = curve().derive_public_key(&[0xFFu8; 32], true);
        assert!(matches!(result, Err(CurveError::InvalidPrivateKey(_))));
    }

    #[test]
    fn test_secp256k1_rejects_short_key() {
        let result = curve().derive_public_key(&[1u8; 31], true);
        assert!(matches!(result, Err(CurveError::InvalidKeyLength { expected: 32, actual: 31 })));
    }

    #[test]
    fn test_secp256k1_rejects_invalid_peer() {
        let curve = curve();
        let sk = curve.random_private_key().expect("keygen");
        let result = curve.get_shared_secret(&sk, &[0x05u8; 33]);
        assert!(matches!(result, Err(CurveError::InvalidPublicKey(_))));
    }
}
