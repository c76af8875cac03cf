//! Public key derivation with compression policy.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use curvearc_primitives::{CurveError, CurveHandle, CurveMetadata};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::{KeyError, Result};
use crate::types::PublicKey;
use crate::{log_key_operation_complete, log_key_operation_error, log_key_operation_start};

/// Message of the policy error raised for uncompressed requests on
/// single-encoding curves.
pub const UNCOMPRESSED_NOT_SUPPORTED: &str = "uncompressed public key is not supported";

/// Length and non-zero checks shared by every operation taking a private key.
pub(crate) fn check_private_key(
    metadata: &CurveMetadata,
    private_key: &[u8],
) -> std::result::Result<(), CurveError> {
    CurveError::check_length(private_key, metadata.private_key_length)?;
    let zero = vec![0u8; private_key.len()];
    if bool::from(private_key.ct_eq(zero.as_slice())) {
        return Err(CurveError::InvalidPrivateKey("private key is all zero".into()));
    }
    Ok(())
}

/// Derive the compressed public key for `private_key`.
///
/// # Errors
///
/// Returns [`KeyError::PublicKeyDerivation`] if the private key has the
/// wrong length, is all zero, or is rejected by the curve.
pub fn get_public_key(curve: &dyn CurveHandle, private_key: &[u8]) -> Result<PublicKey> {
    get_public_key_with_compression(curve, private_key, true)
}

/// Derive the public key for `private_key` in the requested encoding.
///
/// Curves with a single point encoding (Montgomery, Edwards) refuse
/// `compressed = false` without consulting the curve.
///
/// # Errors
///
/// Returns [`KeyError::Policy`] for an uncompressed request on a
/// single-encoding curve, and [`KeyError::PublicKeyDerivation`] for any
/// failure of the derivation itself.
pub fn get_public_key_with_compression(
    curve: &dyn CurveHandle,
    private_key: &[u8],
    compressed: bool,
) -> Result<PublicKey> {
    log_key_operation_start!("get_public_key", curve = curve.name(), compressed = compressed);
    let metadata = curve.metadata();

    if metadata.public_key_length(compressed).is_none() {
        let err = KeyError::Policy(UNCOMPRESSED_NOT_SUPPORTED.to_string());
        log_key_operation_error!("get_public_key", err);
        return Err(err);
    }

    let derived = check_private_key(metadata, private_key)
        .and_then(|()| curve.derive_public_key(private_key, compressed));

    match derived {
        Ok(public_key) => {
            log_key_operation_complete!("get_public_key", pk_len = public_key.len());
            Ok(public_key)
        }
        Err(source) => {
            debug!(curve = curve.name(), reason = %source, "Public key derivation rejected");
            let err = KeyError::public_key_derivation(curve.name(), source);
            log_key_operation_error!("get_public_key", err);
            Err(err)
        }
    }
}
