#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # BN254 Curve Handle
//!
//! BN254 (alt_bn128) G1 keys using the ark-bn254 crate, the curve behind
//! Ethereum's pairing precompiles.

use ark_bn254::Bn254;

use super::pairing::PairingCurve;
use super::traits::{CurveFamily, CurveMetadata};
use crate::rand::{SharedRandomSource, os_random};

/// BN254 base-field prime, big-endian
pub const BN254_FIELD_PRIME: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

static METADATA: CurveMetadata = CurveMetadata {
    family: CurveFamily::Pairing,
    field_prime: &BN254_FIELD_PRIME,
    field_byte_length: 32,
    private_key_length: super::pairing::PAIRING_SCALAR_SIZE,
    point_byte_length: 32,
    uncompressed_point_byte_length: Some(64),
};

/// BN254 curve handle
pub type Bn254Curve = PairingCurve<Bn254>;

impl PairingCurve<Bn254> {
    /// Bind a handle to `source`.
    #[must_use]
    pub fn new(source: SharedRandomSource) -> Self {
        Self::from_parts(source, &METADATA, "BN254")
    }

    /// Bind a handle to the operating system CSPRNG.
    #[must_use]
    pub fn with_os_rng() -> Self {
        Self::new(os_random())
    }
}
