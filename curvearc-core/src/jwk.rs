//! JWK codec for OKP key pairs (RFC 8037).
//!
//! Keys travel as `{"kty":"OKP","crv":<name>,"x":<public>,"d":<private>}`
//! with both members Base64URL-encoded without padding. Decoding re-derives
//! the public key from `d` and refuses a record whose `x` disagrees.
//!
//! Every failure in this module is a [`KeyError::Conversion`]; the specific
//! reason is available through `source()`.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use curvearc_primitives::CurveHandle;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::config::KeyConfig;
use crate::curve_name::{CurveName, resolve_curve_name};
use crate::error::{KeyError, Result};
use crate::public_key::get_public_key;
use crate::types::{PrivateKey, PublicKey};

/// The JWK key type for octet key pairs.
pub const OKP_KEY_TYPE: &str = "OKP";

const TO_JWK_FAILED: &str = "failed to convert private key to JWK";
const FROM_JWK_FAILED: &str = "failed to convert JWK to private key";
const TO_PUBLIC_JWK_FAILED: &str = "failed to convert public key to JWK";
const FROM_PUBLIC_JWK_FAILED: &str = "failed to convert JWK to public key";

/// An OKP JSON Web Key.
///
/// `d` is absent for public keys. `x` is always written on encode; on decode
/// it may be absent only when the configuration allows deriving it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkpJwk {
    /// Key type, always `"OKP"`.
    pub kty: String,
    /// Curve name, e.g. `"X25519"`.
    pub crv: String,
    /// Base64URL public key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    /// Base64URL private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl OkpJwk {
    /// Whether the record carries a private key.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Conversion`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| KeyError::conversion("failed to serialize JWK", e))
    }

    /// Parse a JWK from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Conversion`] if the JSON is malformed or lacks
    /// `kty` or `crv`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| KeyError::conversion("failed to parse JWK", e))
    }
}

impl std::fmt::Debug for OkpJwk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OkpJwk")
            .field("kty", &self.kty)
            .field("crv", &self.crv)
            .field("x", &self.x)
            .field("d", &self.d.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

fn check_len(what: &str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        return Err(KeyError::Validation(format!(
            "{what} must be {expected} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(())
}

fn check_header(jwk: &OkpJwk, curve_name: &str) -> Result<()> {
    if jwk.kty != OKP_KEY_TYPE {
        return Err(KeyError::Validation(format!("kty must be {OKP_KEY_TYPE}, got {}", jwk.kty)));
    }
    if jwk.crv != curve_name {
        return Err(KeyError::Validation(format!("crv must be {curve_name}, got {}", jwk.crv)));
    }
    Ok(())
}

fn decode_member(name: &str, value: Option<&str>) -> std::result::Result<Vec<u8>, KeyError> {
    let value = value.ok_or_else(|| KeyError::Validation(format!("missing \"{name}\" member")))?;
    URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| KeyError::conversion(&format!("\"{name}\" is not unpadded Base64URL"), e))
}

fn okp_name(curve: &dyn CurveHandle) -> Result<CurveName> {
    let name = resolve_curve_name(curve)?;
    if !name.is_okp() {
        return Err(KeyError::UnknownCurve(format!("{name} has no OKP representation")));
    }
    Ok(name)
}

/// Encode `private_key` and its derived public key as a JWK.
///
/// # Errors
///
/// Returns [`KeyError::Conversion`] ("failed to convert private key to JWK")
/// if `private_key` or its derived public key is not `expected_byte_length`
/// bytes, or the public key cannot be derived.
pub fn to_jwk_private_key(
    curve: &dyn CurveHandle,
    expected_byte_length: usize,
    curve_name: &str,
    private_key: &[u8],
) -> Result<OkpJwk> {
    let encode = || -> Result<OkpJwk> {
        check_len("private key", private_key, expected_byte_length)?;
        let public_key = get_public_key(curve, private_key)?;
        // Same rule the decoder applies to x
        check_len("public key", &public_key, expected_byte_length)?;
        Ok(OkpJwk {
            kty: OKP_KEY_TYPE.to_string(),
            crv: curve_name.to_string(),
            x: Some(URL_SAFE_NO_PAD.encode(&public_key)),
            d: Some(URL_SAFE_NO_PAD.encode(private_key)),
        })
    };
    encode().map_err(|e| {
        debug!(curve = curve_name, error = %e, "JWK encoding failed");
        KeyError::conversion(TO_JWK_FAILED, e)
    })
}

/// Decode a private key from a JWK and check it against `x`.
///
/// # Errors
///
/// Returns [`KeyError::Conversion`] ("failed to convert JWK to private key")
/// if `kty` or `crv` do not match, a member is missing or not valid
/// Base64URL, a decoded member is not `expected_byte_length` bytes, or `x`
/// is not the public key of `d`.
pub fn from_jwk_private_key(
    curve: &dyn CurveHandle,
    expected_byte_length: usize,
    curve_name: &str,
    jwk: &OkpJwk,
) -> Result<PrivateKey> {
    decode_private(curve, expected_byte_length, curve_name, jwk, true).map_err(|e| {
        debug!(curve = curve_name, error = %e, "JWK decoding failed");
        KeyError::conversion(FROM_JWK_FAILED, e)
    })
}

fn decode_private(
    curve: &dyn CurveHandle,
    expected_byte_length: usize,
    curve_name: &str,
    jwk: &OkpJwk,
    require_public_key: bool,
) -> Result<PrivateKey> {
    check_header(jwk, curve_name)?;

    let private_key = PrivateKey::new(decode_member("d", jwk.d.as_deref())?);
    check_len("d", private_key.as_slice(), expected_byte_length)?;
    let derived = get_public_key(curve, private_key.as_slice())?;

    match jwk.x.as_deref() {
        Some(x) => {
            let public_key = decode_member("x", Some(x))?;
            check_len("x", &public_key, expected_byte_length)?;
            if !bool::from(public_key.as_slice().ct_eq(derived.as_slice())) {
                return Err(KeyError::Validation("x does not match the public key of d".into()));
            }
        }
        None if require_public_key => {
            return Err(KeyError::Validation("missing \"x\" member".into()));
        }
        None => debug!(curve = curve_name, "JWK without x, public key derived from d"),
    }
    Ok(private_key)
}

/// Encode `private_key` for `curve`, resolving the curve name and length.
///
/// # Errors
///
/// Returns [`KeyError::Conversion`] if the curve has no OKP representation
/// or encoding fails.
pub fn to_jwk(curve: &dyn CurveHandle, private_key: &[u8]) -> Result<OkpJwk> {
    let name = okp_name(curve).map_err(|e| KeyError::conversion(TO_JWK_FAILED, e))?;
    to_jwk_private_key(curve, curve.metadata().private_key_length, name.as_str(), private_key)
}

/// Decode a private key for `curve`, resolving the curve name and length.
///
/// # Errors
///
/// Returns [`KeyError::Conversion`] if the curve has no OKP representation
/// or decoding fails.
pub fn from_jwk(curve: &dyn CurveHandle, jwk: &OkpJwk) -> Result<PrivateKey> {
    from_jwk_with_config(curve, jwk, &KeyConfig::default())
}

/// Decode a private key for `curve` with configuration.
///
/// With `require_jwk_public_key` unset, a record without `x` is accepted.
///
/// # Errors
///
/// Returns [`KeyError::Validation`] if the configuration is invalid and
/// [`KeyError::Conversion`] if decoding fails.
pub fn from_jwk_with_config(
    curve: &dyn CurveHandle,
    jwk: &OkpJwk,
    config: &KeyConfig,
) -> Result<PrivateKey> {
    config.validate()?;
    let decode = || -> Result<PrivateKey> {
        let name = okp_name(curve)?;
        let length = curve.metadata().private_key_length;
        decode_private(curve, length, name.as_str(), jwk, config.require_jwk_public_key)
    };
    decode().map_err(|e| KeyError::conversion(FROM_JWK_FAILED, e))
}

/// Encode a public key as a JWK without `d`.
///
/// # Errors
///
/// Returns [`KeyError::Conversion`] if the curve has no OKP representation
/// or `public_key` has the wrong length.
pub fn to_jwk_public_key(curve: &dyn CurveHandle, public_key: &[u8]) -> Result<OkpJwk> {
    let encode = || -> Result<OkpJwk> {
        let name = okp_name(curve)?;
        check_len("public key", public_key, curve.metadata().point_byte_length)?;
        Ok(OkpJwk {
            kty: OKP_KEY_TYPE.to_string(),
            crv: name.to_string(),
            x: Some(URL_SAFE_NO_PAD.encode(public_key)),
            d: None,
        })
    };
    encode().map_err(|e| KeyError::conversion(TO_PUBLIC_JWK_FAILED, e))
}

/// Decode the public key of a JWK. A `d` member, if present, is ignored.
///
/// # Errors
///
/// Returns [`KeyError::Conversion`] if `kty` or `crv` do not match or `x` is
/// missing, not valid Base64URL, or the wrong length.
pub fn from_jwk_public_key(curve: &dyn CurveHandle, jwk: &OkpJwk) -> Result<PublicKey> {
    let decode = || -> Result<PublicKey> {
        let name = okp_name(curve)?;
        check_header(jwk, name.as_str())?;
        let public_key = decode_member("x", jwk.x.as_deref())?;
        check_len("x", &public_key, curve.metadata().point_byte_length)?;
        Ok(public_key)
    };
    decode().map_err(|e| KeyError::conversion(FROM_PUBLIC_JWK_FAILED, e))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use curvearc_primitives::{
        Bls12_381Curve, Ed25519Curve, SeededRandom, Secp256k1Curve, X25519Curve,
    };
    use std::error::Error as _;
    use std::sync::Arc;

    // RFC 7748 section 6.1, Alice
    const ALICE_D: &str = "dwdtCnMYpX08FsFyUbJmRd9ML4frwJkqsXf7pR25LCo";
    const ALICE_X: &str = "hSDwCYkwp1R0i33ctD73Wg2_Og0mOBr066SpjqqbTmo";

    fn x25519() -> X25519Curve {
        X25519Curve::new(Arc::new(SeededRandom::from_u64(8037)))
    }

    fn alice_sk() -> Vec<u8> {
        hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a")
            .expect("valid hex")
    }

    fn alice_jwk() -> OkpJwk {
        OkpJwk {
            kty: "OKP".into(),
            crv: "X25519".into(),
            x: Some(ALICE_X.into()),
            d: Some(ALICE_D.into()),
        }
    }

    fn inner(err: &KeyError) -> &KeyError {
        err.source().and_then(|s| s.downcast_ref::<KeyError>()).expect("KeyError source")
    }

    #[test]
    fn test_known_key_encodes_to_expected_jwk() {
        let jwk = to_jwk_private_key(&x25519(), 32, "X25519", &alice_sk()).expect("encode");
        assert_eq!(jwk, alice_jwk());
    }

    #[test]
    fn test_known_jwk_decodes() {
        let sk = from_jwk_private_key(&x25519(), 32, "X25519", &alice_jwk()).expect("decode");
        assert_eq!(sk.as_slice(), alice_sk().as_slice());
    }

    #[test]
    fn test_roundtrip_random_keys() {
        let curve = x25519();
        for _ in 0..8 {
            let sk = crate::keygen::random_private_key(&curve).expect("keygen");
            let jwk = to_jwk_private_key(&curve, 32, "X25519", sk.as_slice()).expect("encode");
            let x = URL_SAFE_NO_PAD.decode(jwk.x.as_deref().expect("x")).expect("base64");
            assert_eq!(x, get_public_key(&curve, sk.as_slice()).expect("derive"));
            assert_eq!(from_jwk_private_key(&curve, 32, "X25519", &jwk).expect("decode"), sk);
        }
    }

    #[test]
    fn test_encode_length_violation() {
        for len in [31, 33] {
            let err = to_jwk_private_key(&x25519(), 32, "X25519", &vec![1u8; len])
                .expect_err("bad length");
            assert!(matches!(err, KeyError::Conversion { .. }));
            assert_eq!(err.to_string(), TO_JWK_FAILED);
            assert!(matches!(inner(&err), KeyError::Validation(_)));
        }
    }

    #[test]
    fn test_encode_zero_key_wraps_derivation_error() {
        let err = to_jwk_private_key(&x25519(), 32, "X25519", &[0u8; 32]).expect_err("zero key");
        assert!(matches!(inner(&err), KeyError::PublicKeyDerivation { .. }));
    }

    #[test]
    fn test_mismatched_x_rejected() {
        let mut jwk = alice_jwk();
        let other = get_public_key(&x25519(), &[7u8; 32]).expect("derive");
        jwk.x = Some(URL_SAFE_NO_PAD.encode(other));
        let err = from_jwk_private_key(&x25519(), 32, "X25519", &jwk).expect_err("mismatch");
        assert_eq!(err.to_string(), FROM_JWK_FAILED);
        assert!(matches!(inner(&err), KeyError::Validation(_)));
    }

    #[test]
    fn test_wrong_header_rejected() {
        let mut wrong_kty = alice_jwk();
        wrong_kty.kty = "EC".into();
        let mut wrong_crv = alice_jwk();
        wrong_crv.crv = "Ed25519".into();
        for jwk in [wrong_kty, wrong_crv] {
            let result = from_jwk_private_key(&x25519(), 32, "X25519", &jwk);
            assert!(matches!(result, Err(KeyError::Conversion { .. })));
        }
    }

    #[test]
    fn test_padded_or_standard_alphabet_rejected() {
        let mut padded = alice_jwk();
        padded.d = Some(format!("{ALICE_D}="));
        let mut standard = alice_jwk();
        standard.x = Some(ALICE_X.replace('_', "/"));
        let mut garbage = alice_jwk();
        garbage.d = Some("not base64!".into());
        for jwk in [padded, standard, garbage] {
            let result = from_jwk_private_key(&x25519(), 32, "X25519", &jwk);
            assert!(matches!(result, Err(KeyError::Conversion { .. })), "{jwk:?}");
        }
    }

    #[test]
    fn test_decoded_length_violation() {
        let mut short = alice_jwk();
        short.d = Some(URL_SAFE_NO_PAD.encode([1u8; 31]));
        let result = from_jwk_private_key(&x25519(), 32, "X25519", &short);
        assert!(matches!(result, Err(KeyError::Conversion { .. })));

        let mut long_x = alice_jwk();
        long_x.x = Some(URL_SAFE_NO_PAD.encode([1u8; 33]));
        let result = from_jwk_private_key(&x25519(), 32, "X25519", &long_x);
        assert!(matches!(result, Err(KeyError::Conversion { .. })));
    }

    #[test]
    fn test_missing_members() {
        let mut no_d = alice_jwk();
        no_d.d = None;
        assert!(from_jwk_private_key(&x25519(), 32, "X25519", &no_d).is_err());

        let mut no_x = alice_jwk();
        no_x.x = None;
        assert!(from_jwk_private_key(&x25519(), 32, "X25519", &no_x).is_err());
        assert!(from_jwk(&x25519(), &no_x).is_err());

        let lenient = KeyConfig::new().with_require_jwk_public_key(false);
        let sk = from_jwk_with_config(&x25519(), &no_x, &lenient).expect("x derived");
        assert_eq!(sk.as_slice(), alice_sk().as_slice());
    }

    #[test]
    fn test_auto_resolving_codec() {
        let jwk = to_jwk(&x25519(), &alice_sk()).expect("encode");
        assert_eq!(jwk, alice_jwk());
        assert_eq!(from_jwk(&x25519(), &jwk).expect("decode").as_slice(), alice_sk().as_slice());
    }

    #[test]
    fn test_ed25519_rfc8037_key() {
        // RFC 8037 appendix A.1
        let curve = Ed25519Curve::new(Arc::new(SeededRandom::from_u64(1)));
        let sk = URL_SAFE_NO_PAD.decode("nWGxne_9WmC6hEr0kuwsxERJxWl7MmkZcDusAxyuf2A").expect("b64");
        let jwk = to_jwk(&curve, &sk).expect("encode");
        assert_eq!(jwk.crv, "Ed25519");
        assert_eq!(jwk.x.as_deref(), Some("11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo"));
    }

    #[test]
    fn test_non_okp_curve_refused() {
        let curve = Secp256k1Curve::new(Arc::new(SeededRandom::from_u64(1)));
        let err = to_jwk(&curve, &[1u8; 32]).expect_err("not OKP");
        assert!(matches!(inner(&err), KeyError::UnknownCurve(_)));
    }

    #[test]
    fn test_encoder_refuses_what_decoder_would_refuse() {
        // secp256k1 and BLS12-381 public keys are longer than their scalars
        let curves: Vec<(Box<dyn CurveHandle>, &str)> = vec![
            (Box::new(Secp256k1Curve::new(Arc::new(SeededRandom::from_u64(2)))), "secp256k1"),
            (Box::new(Bls12_381Curve::new(Arc::new(SeededRandom::from_u64(2)))), "BLS12-381"),
        ];
        for (curve, name) in &curves {
            let sk = crate::keygen::random_private_key(curve.as_ref()).expect("keygen");
            let err = to_jwk_private_key(curve.as_ref(), 32, name, sk.as_slice())
                .expect_err("x would not be 32 bytes");
            assert!(matches!(err, KeyError::Conversion { .. }), "{name}");
            assert!(matches!(inner(&err), KeyError::Validation(_)), "{name}");
        }
    }

    #[test]
    fn test_encoded_record_always_decodes() {
        let curve = x25519();
        let jwk = to_jwk_private_key(&curve, 32, "X25519", &alice_sk()).expect("encode");
        let sk = from_jwk_private_key(&curve, 32, "X25519", &jwk).expect("decode");
        assert_eq!(sk.as_slice(), alice_sk().as_slice());
    }

    #[test]
    fn test_public_jwk() {
        let curve = x25519();
        let pk = get_public_key(&curve, &alice_sk()).expect("derive");
        let jwk = to_jwk_public_key(&curve, &pk).expect("encode");
        assert!(!jwk.is_private());
        assert_eq!(jwk.x.as_deref(), Some(ALICE_X));
        assert_eq!(from_jwk_public_key(&curve, &jwk).expect("decode"), pk);

        // A private JWK also yields its public key
        assert_eq!(from_jwk_public_key(&curve, &alice_jwk()).expect("decode"), pk);

        assert!(to_jwk_public_key(&curve, &pk[..31]).is_err());
        assert!(from_jwk(&curve, &jwk).is_err());
    }

    #[test]
    fn test_json_roundtrip_and_shape() {
        let json = alice_jwk().to_json().expect("serialize");
        assert_eq!(
            json,
            format!(r#"{{"kty":"OKP","crv":"X25519","x":"{ALICE_X}","d":"{ALICE_D}"}}"#)
        );
        assert_eq!(OkpJwk::from_json(&json).expect("parse"), alice_jwk());

        let public = OkpJwk { d: None, ..alice_jwk() };
        assert!(!public.to_json().expect("serialize").contains("\"d\""));

        assert!(matches!(OkpJwk::from_json("{\"crv\":\"X25519\"}"), Err(KeyError::Conversion { .. })));
        assert!(matches!(OkpJwk::from_json("not json"), Err(KeyError::Conversion { .. })));
    }

    #[test]
    fn test_debug_redacts_private_member() {
        let rendered = format!("{:?}", alice_jwk());
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains(ALICE_D));
        assert!(rendered.contains(ALICE_X));
    }
}
