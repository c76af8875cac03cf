#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Elliptic Curve Handles
//!
//! One handle per supported curve, all behind the same trait-based API.
//!
//! ## Supported Curves
//!
//! - **Ed25519** (Edwards): RFC 8032 signatures
//! - **X25519** (Montgomery): RFC 7748 key agreement
//! - **secp256k1** (Weierstrass): ECDSA and ECDH, SEC1 encodings
//! - **BLS12-381**, **BN254** (pairing-friendly): G1 public keys
//!
//! ## Unified API Design
//!
//! - `CurveHandle` for metadata, key generation and public-key derivation
//! - `EcSignature` for signature schemes
//! - `EcKeyAgreement` for Diffie-Hellman
//! - Random bytes come from the `RandomSource` bound at construction

/// Unified curve traits
pub mod traits;

/// Ed25519 handle
pub mod ed25519;

/// X25519 handle
pub mod x25519;

/// secp256k1 handle
pub mod secp256k1;

/// Generic pairing-curve handle
pub mod pairing;

/// BLS12-381 handle
pub mod bls12_381;

/// BN254 handle
pub mod bn254;

pub use bls12_381::{BLS12_381_FIELD_PRIME, Bls12_381Curve};
pub use bn254::{BN254_FIELD_PRIME, Bn254Curve};
pub use ed25519::{ED25519_FIELD_PRIME, Ed25519Curve};
pub use pairing::PairingCurve;
pub use secp256k1::{SECP256K1_FIELD_PRIME, Secp256k1Curve};
pub use x25519::{X25519_FIELD_PRIME, X25519Curve, clamp_scalar};

pub use traits::{CurveFamily, CurveHandle, CurveMetadata, EcKeyAgreement, EcSignature};
