#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Pairing-Friendly Curve Handles
//!
//! Generic handle over an arkworks [`Pairing`] engine. Private keys are
//! 32-byte big-endian scalars of the prime-order group; public keys are
//! points on G1 in arkworks' compressed or uncompressed encoding.
//!
//! Key generation draws a wide byte string and reduces it modulo the group
//! order so that the result is close to uniform, then rejects zero.

use std::marker::PhantomData;

use ark_ec::{AffineRepr, CurveGroup, pairing::Pairing};
use ark_ff::{BigInteger, PrimeField, Zero};
use ark_serialize::CanonicalSerialize;
use tracing::instrument;
use zeroize::Zeroizing;

use super::traits::{CurveHandle, CurveMetadata};
use crate::error::{CurveError, Result};
use crate::rand::{RandomSource, SharedRandomSource};

/// Scalar size in bytes for the supported pairing curves
pub const PAIRING_SCALAR_SIZE: usize = 32;

/// Extra bytes drawn on top of the scalar size before reduction.
///
/// 16 bytes give a statistical distance from uniform of about 2^-128.
pub const WIDE_REDUCTION_EXTRA_BYTES: usize = 16;

/// Curve handle over the G1 group of a pairing engine.
pub struct PairingCurve<E: Pairing> {
    source: SharedRandomSource,
    metadata: &'static CurveMetadata,
    name: &'static str,
    _engine: PhantomData<fn() -> E>,
}

impl<E: Pairing> PairingCurve<E> {
    pub(crate) fn from_parts(
        source: SharedRandomSource,
        metadata: &'static CurveMetadata,
        name: &'static str,
    ) -> Self {
        Self { source, metadata, name, _engine: PhantomData }
    }

    /// Parse a canonical, non-zero scalar.
    fn scalar(private_key: &[u8]) -> Result<E::ScalarField> {
        CurveError::check_length(private_key, PAIRING_SCALAR_SIZE)?;
        let scalar = E::ScalarField::from_be_bytes_mod_order(private_key);
        if scalar.into_bigint().to_bytes_be().as_slice() != private_key {
            return Err(CurveError::InvalidPrivateKey("scalar is not below the group order".into()));
        }
        if scalar.is_zero() {
            return Err(CurveError::InvalidPrivateKey("scalar is zero".into()));
        }
        Ok(scalar)
    }
}

impl<E: Pairing> Clone for PairingCurve<E> {
    fn clone(&self) -> Self {
        Self::from_parts(self.source.clone(), self.metadata, self.name)
    }
}

impl<E: Pairing> CurveHandle for PairingCurve<E> {
    fn metadata(&self) -> &CurveMetadata {
        self.metadata
    }

    fn random_source(&self) -> &dyn RandomSource {
        self.source.as_ref()
    }

    fn random_private_key(&self) -> Result<Zeroizing<Vec<u8>>> {
        let wide = self.random_bytes(PAIRING_SCALAR_SIZE + WIDE_REDUCTION_EXTRA_BYTES)?;
        self.hash_to_scalar(&wide)
    }

    #[instrument(level = "debug", skip(self, wide), fields(curve = self.name, wide_len = wide.len()))]
    fn hash_to_scalar(&self, wide: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        if wide.len() < PAIRING_SCALAR_SIZE {
            return Err(CurveError::InvalidKeyLength {
                expected: PAIRING_SCALAR_SIZE,
                actual: wide.len(),
            });
        }
        let scalar = E::ScalarField::from_be_bytes_mod_order(wide);
        if scalar.is_zero() {
            return Err(CurveError::InvalidPrivateKey("wide input reduced to zero".into()));
        }
        Ok(Zeroizing::new(scalar.into_bigint().to_bytes_be()))
    }

    #[instrument(level = "debug", skip(self, private_key), fields(curve = self.name, sk_len = private_key.len()))]
    fn derive_public_key(&self, private_key: &[u8], compressed: bool) -> Result<Vec<u8>> {
        let scalar = Self::scalar(private_key)?;
        let point = (E::G1Affine::generator() * scalar).into_affine();

        let mut encoded = Vec::with_capacity(self.metadata.public_key_length(compressed).unwrap_or(0));
        let written = if compressed {
            point.serialize_compressed(&mut encoded)
        } else {
            point.serialize_uncompressed(&mut encoded)
        };
        written.map_err(|e| CurveError::Encoding(e.to_string()))?;
        Ok(encoded)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: Pairing> std::fmt::Debug for PairingCurve<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairingCurve")
            .field("name", &self.name)
            .field("metadata", self.metadata)
            .finish_non_exhaustive()
    }
}
