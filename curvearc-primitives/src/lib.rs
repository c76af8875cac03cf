#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # CurveArc Primitives
//!
//! Curve handles for the CurveArc key layer. Each handle wraps an external,
//! already-audited arithmetic crate and exposes the same small surface:
//! metadata, private key generation, public-key derivation and, where the
//! family supports it, signatures or Diffie-Hellman.
//!
//! ## Curves
//!
//! | Handle | Family | Backend |
//! |--------|--------|---------|
//! | [`Ed25519Curve`] | Edwards | `ed25519-dalek` |
//! | [`X25519Curve`] | Montgomery | `x25519-dalek` |
//! | [`Secp256k1Curve`] | Weierstrass | `k256` |
//! | [`Bls12_381Curve`] | Pairing | `ark-bls12-381` |
//! | [`Bn254Curve`] | Pairing | `ark-bn254` |
//!
//! ## Supporting Modules
//!
//! - **rand**: injectable random-byte sources (OS CSPRNG, seeded ChaCha20)
//! - **error**: [`CurveError`], the error type every handle returns

pub mod ec;
pub mod error;
pub mod rand;

pub use ec::*;
pub use error::{CurveError, Result};
pub use rand::{OsRandom, RandomError, RandomSource, SeededRandom, SharedRandomSource, os_random};
