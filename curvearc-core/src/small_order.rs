//! Small-order point detection for Curve25519 in Montgomery form.
//!
//! A peer key of order 1, 2, 4 or 8 forces the X25519 output into a tiny
//! set of values that an attacker can predict. The table holds the canonical
//! encodings of those points together with the non-canonical `p - 1`, `p`
//! and `p + 1` encodings.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use subtle::{Choice, ConstantTimeEq};

use crate::error::{KeyError, Result};

/// Encoded length of a Curve25519 Montgomery point.
pub const MONTGOMERY_POINT_SIZE: usize = 32;

static SMALL_ORDER_POINTS: [[u8; MONTGOMERY_POINT_SIZE]; 7] = [
    // 0 (order 4)
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 1 (order 1)
    [
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // order 8
    [
        0xe0, 0xeb, 0x7a, 0x7c, 0x3b, 0x41, 0xb8, 0xae, 0x16, 0x56, 0xe3, 0xfa, 0xf1, 0x9f, 0xc4, 0x6a,
        0xda, 0x09, 0x8d, 0xeb, 0x9c, 0x32, 0xb1, 0xfd, 0x86, 0x62, 0x05, 0x16, 0x5f, 0x49, 0xb8, 0x00,
    ],
    // order 8
    [
        0x5f, 0x9c, 0x95, 0xbc, 0xa3, 0x50, 0x8c, 0x24, 0xb1, 0xd0, 0xb1, 0x55, 0x9c, 0x83, 0xef, 0x5b,
        0x04, 0x44, 0x5c, 0xc4, 0x58, 0x1c, 0x8e, 0x86, 0xd8, 0x22, 0x4e, 0xdd, 0xd0, 0x9f, 0x11, 0x57,
    ],
    // p - 1 (order 2)
    [
        0xec, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
    ],
    // p, i.e. 0
    [
        0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
    ],
    // p + 1, i.e. 1
    [
        0xee, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
    ],
];

/// The fixed set of small-order encodings checked by [`is_small_order_point`].
#[must_use]
pub fn small_order_points() -> &'static [[u8; MONTGOMERY_POINT_SIZE]] {
    &SMALL_ORDER_POINTS
}

/// Whether `candidate` is one of the seven small-order encodings.
///
/// Exact byte comparison, no reduction modulo p. Every table entry is
/// compared regardless of where a match occurs.
///
/// # Errors
///
/// Returns [`KeyError::Validation`] if `candidate` is not 32 bytes.
pub fn is_small_order_point(candidate: &[u8]) -> Result<bool> {
    if candidate.len() != MONTGOMERY_POINT_SIZE {
        return Err(KeyError::Validation(format!(
            "small-order check expects {MONTGOMERY_POINT_SIZE} bytes, got {}",
            candidate.len()
        )));
    }

    let found = SMALL_ORDER_POINTS
        .iter()
        .fold(Choice::from(0u8), |acc, point| acc | point.as_slice().ct_eq(candidate));
    Ok(bool::from(found))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use curvearc_primitives::{CurveHandle, EcKeyAgreement, SeededRandom, X25519Curve};
    use std::sync::Arc;

    #[test]
    fn test_all_table_entries_detected() {
        assert_eq!(small_order_points().len(), 7);
        for point in small_order_points() {
            assert!(is_small_order_point(point).expect("32 bytes"));
        }
    }

    #[test]
    fn test_known_encodings() {
        let order_eight =
            hex::decode("e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800")
                .expect("valid hex");
        assert!(is_small_order_point(&order_eight).expect("32 bytes"));

        let mut p_minus_one = [0xFFu8; 32];
        p_minus_one[0] = 0xEC;
        p_minus_one[31] = 0x7F;
        assert!(is_small_order_point(&p_minus_one).expect("32 bytes"));
    }

    #[test]
    fn test_ordinary_public_key_not_small_order() {
        let curve = X25519Curve::new(Arc::new(SeededRandom::from_u64(8)));
        let sk = curve.random_private_key().expect("keygen");
        let pk = curve.derive_public_key(&sk, true).expect("derive");
        assert!(!is_small_order_point(&pk).expect("32 bytes"));
    }

    #[test]
    fn test_no_reduction_applied() {
        // p + 2 encodes 2 mod p, which is not in the table
        let mut p_plus_two = [0xFFu8; 32];
        p_plus_two[0] = 0xEF;
        p_plus_two[31] = 0x7F;
        assert!(!is_small_order_point(&p_plus_two).expect("32 bytes"));

        let mut two = [0u8; 32];
        two[0] = 2;
        assert!(!is_small_order_point(&two).expect("32 bytes"));
    }

    #[test]
    fn test_wrong_length_rejected() {
        for len in [0, 31, 33, 64] {
            let result = is_small_order_point(&vec![0u8; len]);
            assert!(matches!(result, Err(KeyError::Validation(_))), "length {len}");
        }
    }

    #[test]
    fn test_table_points_collapse_agreement() {
        let curve = X25519Curve::new(Arc::new(SeededRandom::from_u64(9)));
        let sk = curve.random_private_key().expect("keygen");
        for point in small_order_points() {
            assert!(curve.get_shared_secret(&sk, point).is_err());
        }
    }
}
