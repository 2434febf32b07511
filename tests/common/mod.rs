//! Token minting helpers shared by the integration tests

#![allow(dead_code)]

use std::sync::OnceLock;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{
    EcdsaKeyPair, KeyPair, ECDSA_P256_SHA256_FIXED_SIGNING, ECDSA_P384_SHA384_FIXED_SIGNING,
    ECDSA_P521_SHA512_FIXED_SIGNING,
};
use hmac::{Hmac, Mac};
use jwtcheck::utils::base64url;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha2::{Sha256, Sha384, Sha512};

/// Fixed evaluation time used by every scenario
pub const NOW: i64 = 1_700_000_000;

/// [`NOW`] in milliseconds, the resolution time claims are compared at
pub const NOW_MILLIS: i64 = NOW * 1000;

// DER prefixes turning an uncompressed EC point into a SubjectPublicKeyInfo
const P256_SPKI_PREFIX: &[u8] = &[
    0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08,
    0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00,
];
const P384_SPKI_PREFIX: &[u8] = &[
    0x30, 0x76, 0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x05,
    0x2b, 0x81, 0x04, 0x00, 0x22, 0x03, 0x62, 0x00,
];
const P521_SPKI_PREFIX: &[u8] = &[
    0x30, 0x81, 0x9b, 0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06,
    0x05, 0x2b, 0x81, 0x04, 0x00, 0x23, 0x03, 0x81, 0x86, 0x00,
];

/// Payload with `exp`, `iat` and `nbf` set relative to `now`
pub fn timed_payload(exp: i64, iat: i64, nbf: i64) -> String {
    format!(r#"{{"sub":"1234567890","name":"Test User","exp":{exp},"iat":{iat},"nbf":{nbf}}}"#)
}

/// Claims that pass at [`NOW`]
pub fn fresh_payload() -> String {
    timed_payload(NOW + 3600, NOW - 10, NOW - 10)
}

pub fn header_for(alg: &str) -> String {
    format!(r#"{{"alg":"{alg}","typ":"JWT"}}"#)
}

/// `base64url(header).base64url(payload)`
pub fn signing_input(header: &str, payload: &str) -> String {
    format!(
        "{}.{}",
        base64url::encode(header),
        base64url::encode(payload)
    )
}

pub fn assemble(signing_input: &str, signature: &[u8]) -> String {
    format!("{}.{}", signing_input, base64url::encode_bytes(signature))
}

// ============================================================================
// HMAC
// ============================================================================

pub fn hmac_sign(alg: &str, secret: &[u8], message: &[u8]) -> Vec<u8> {
    match alg {
        "HS256" => {
            let mut mac = Hmac::<Sha256>::new_from_slice(secret).unwrap();
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        "HS384" => {
            let mut mac = Hmac::<Sha384>::new_from_slice(secret).unwrap();
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        "HS512" => {
            let mut mac = Hmac::<Sha512>::new_from_slice(secret).unwrap();
            mac.update(message);
            mac.finalize().into_bytes().to_vec()
        }
        other => panic!("not an HMAC algorithm: {other}"),
    }
}

/// HMAC-signed token with an arbitrary header
pub fn hmac_token_with_header(alg: &str, header: &str, payload: &str, secret: &[u8]) -> String {
    let input = signing_input(header, payload);
    let signature = hmac_sign(alg, secret, input.as_bytes());
    assemble(&input, &signature)
}

pub fn hmac_token(alg: &str, payload: &str, secret: &[u8]) -> String {
    hmac_token_with_header(alg, &header_for(alg), payload, secret)
}

// ============================================================================
// RSA
// ============================================================================

pub struct RsaFixture {
    pub private_key: RsaPrivateKey,
    pub public_key_der: Vec<u8>,
    pub public_key_pem: String,
}

/// Two RSA-2048 key pairs, generated once per test binary
pub fn rsa_fixture(index: usize) -> &'static RsaFixture {
    static FIXTURES: OnceLock<Vec<RsaFixture>> = OnceLock::new();
    &FIXTURES.get_or_init(|| {
        let mut rng = rand::thread_rng();
        (0..2)
            .map(|_| {
                let private_key =
                    RsaPrivateKey::new(&mut rng, 2048).expect("failed to generate RSA key");
                let public_key = private_key.to_public_key();
                RsaFixture {
                    public_key_der: public_key
                        .to_public_key_der()
                        .expect("failed to encode DER")
                        .as_bytes()
                        .to_vec(),
                    public_key_pem: public_key
                        .to_public_key_pem(LineEnding::LF)
                        .expect("failed to encode PEM"),
                    private_key,
                }
            })
            .collect()
    })[index]
}

pub fn rsa_sign(alg: &str, private_key: &RsaPrivateKey, message: &[u8]) -> Vec<u8> {
    let key = private_key.clone();
    match alg {
        "RS256" => SigningKey::<Sha256>::new(key).sign(message).to_vec(),
        "RS384" => SigningKey::<Sha384>::new(key).sign(message).to_vec(),
        "RS512" => SigningKey::<Sha512>::new(key).sign(message).to_vec(),
        other => panic!("not an RSA algorithm: {other}"),
    }
}

pub fn rsa_token(alg: &str, payload: &str, fixture: &RsaFixture) -> String {
    let input = signing_input(&header_for(alg), payload);
    let signature = rsa_sign(alg, &fixture.private_key, input.as_bytes());
    assemble(&input, &signature)
}

// ============================================================================
// ECDSA
// ============================================================================

/// ECDSA-signed token and the signer's uncompressed public point
pub fn ecdsa_token(alg: &str, payload: &str) -> (String, Vec<u8>) {
    let signing_algorithm = match alg {
        "ES256" => &ECDSA_P256_SHA256_FIXED_SIGNING,
        "ES384" => &ECDSA_P384_SHA384_FIXED_SIGNING,
        "ES512" => &ECDSA_P521_SHA512_FIXED_SIGNING,
        other => panic!("not an ECDSA algorithm: {other}"),
    };
    let key_pair = EcdsaKeyPair::generate(signing_algorithm).expect("failed to generate EC key");

    let input = signing_input(&header_for(alg), payload);
    let signature = key_pair
        .sign(&SystemRandom::new(), input.as_bytes())
        .expect("ECDSA signing failed");

    (
        assemble(&input, signature.as_ref()),
        key_pair.public_key().as_ref().to_vec(),
    )
}

/// Wrap the uncompressed point of an `ES*` key as a PEM `PUBLIC KEY`
pub fn ec_point_to_pem(alg: &str, point: &[u8]) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine};

    let prefix = match alg {
        "ES256" => P256_SPKI_PREFIX,
        "ES384" => P384_SPKI_PREFIX,
        "ES512" => P521_SPKI_PREFIX,
        other => panic!("not an ECDSA algorithm: {other}"),
    };
    let mut der = prefix.to_vec();
    der.extend_from_slice(point);

    let body = STANDARD.encode(der);
    let lines: Vec<&str> = body
        .as_bytes()
        .chunks(64)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect();
    format!(
        "-----BEGIN PUBLIC KEY-----\n{}\n-----END PUBLIC KEY-----\n",
        lines.join("\n")
    )
}
