//! JWK integration tests
//!
//! Checks the codec against externally produced keys and JSON documents:
//! - Keys generated directly with x25519-dalek import and export unchanged
//! - JSON documents in the RFC 8037 shape parse and validate
//! - Tampered documents fail with a single conversion error

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::redundant_clone
)]

use std::error::Error as _;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use curvearc_core::{
    KeyConfig, KeyError, OkpJwk, from_jwk, from_jwk_public_key, from_jwk_with_config,
    get_shared_secret, to_jwk, to_jwk_public_key,
};
use curvearc_primitives::{SeededRandom, X25519Curve};
use rand::rngs::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};

fn curve() -> X25519Curve {
    X25519Curve::new(Arc::new(SeededRandom::from_u64(37)))
}

#[test]
fn test_library_generated_key_exports() {
    let secret = StaticSecret::random_from_rng(OsRng);
    let public = PublicKey::from(&secret);

    let jwk = to_jwk(&curve(), secret.as_bytes()).expect("encode");
    assert_eq!(jwk.x.as_deref(), Some(URL_SAFE_NO_PAD.encode(public.as_bytes()).as_str()));
    assert_eq!(from_jwk(&curve(), &jwk).expect("decode").as_slice(), secret.as_bytes());
}

#[test]
fn test_imported_key_agrees_with_library_peer() {
    let ours = StaticSecret::from([0x5Au8; 32]);
    let peer = StaticSecret::from([0xA5u8; 32]);
    let peer_public = PublicKey::from(&peer);

    let jwk = to_jwk(&curve(), ours.as_bytes()).expect("encode");
    let json = jwk.to_json().expect("serialize");
    let restored = from_jwk(&curve(), &OkpJwk::from_json(&json).expect("parse")).expect("decode");

    let via_layer =
        get_shared_secret(&curve(), restored.as_slice(), peer_public.as_bytes()).expect("agree");
    let via_library = peer.diffie_hellman(&PublicKey::from(&ours));
    assert_eq!(via_layer.as_slice(), via_library.as_bytes());
}

#[test]
fn test_rfc8037_shaped_document() {
    // RFC 7748 section 6.1, Bob
    let json = r#"{
        "kty": "OKP",
        "crv": "X25519",
        "x": "3p7bfXt9wbTTW2HC7OQ1Nz-DQ8hbeGdNrfx-FG-IK08",
        "d": "XasIfmJKikt54X-Lg4AO5m87sSkmGLb9HC-LJ_-I4Os"
    }"#;
    let jwk = OkpJwk::from_json(json).expect("parse");
    let sk = from_jwk(&curve(), &jwk).expect("decode");
    assert_eq!(
        hex::encode(sk.as_slice()),
        "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb"
    );

    let public = from_jwk_public_key(&curve(), &jwk).expect("public");
    assert_eq!(to_jwk_public_key(&curve(), &public).expect("encode").x, jwk.x);
}

#[test]
fn test_unknown_members_ignored() {
    let json = r#"{"kty":"OKP","crv":"X25519","kid":"bob","use":"enc",
        "x":"3p7bfXt9wbTTW2HC7OQ1Nz-DQ8hbeGdNrfx-FG-IK08",
        "d":"XasIfmJKikt54X-Lg4AO5m87sSkmGLb9HC-LJ_-I4Os"}"#;
    assert!(from_jwk(&curve(), &OkpJwk::from_json(json).expect("parse")).is_ok());
}

#[test]
fn test_tampered_document_single_error_kind() {
    let base = to_jwk(&curve(), &[0x33u8; 32]).expect("encode");
    let mut flipped_x = base.clone();
    let mut x = URL_SAFE_NO_PAD.decode(flipped_x.x.as_deref().expect("x")).expect("b64");
    x[0] ^= 1;
    flipped_x.x = Some(URL_SAFE_NO_PAD.encode(&x));

    let mut flipped_d = base.clone();
    let mut d = URL_SAFE_NO_PAD.decode(flipped_d.d.as_deref().expect("d")).expect("b64");
    d[5] ^= 0x80;
    flipped_d.d = Some(URL_SAFE_NO_PAD.encode(&d));

    let mut truncated = base.clone();
    truncated.d = Some(URL_SAFE_NO_PAD.encode(&d[..16]));

    for jwk in [flipped_x, flipped_d, truncated] {
        let err = from_jwk(&curve(), &jwk).expect_err("tampered");
        assert!(matches!(err, KeyError::Conversion { .. }));
        assert!(err.source().is_some(), "cause is chained");
    }
}

#[test]
fn test_missing_x_policy() {
    let mut jwk = to_jwk(&curve(), &[0x44u8; 32]).expect("encode");
    jwk.x = None;
    assert!(from_jwk(&curve(), &jwk).is_err());

    let lenient = KeyConfig::new().with_require_jwk_public_key(false);
    let sk = from_jwk_with_config(&curve(), &jwk, &lenient).expect("derived");
    assert_eq!(sk.as_slice(), &[0x44u8; 32]);
}
