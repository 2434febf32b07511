//! Signature verification for decoded tokens
//!
//! Resolution and verification failures are folded into one of three
//! [`SignatureError`] outcomes. Each outcome calls for a different fix: the
//! token, the secret, or a token using an algorithm that is not supported
//! here.

use thiserror::Error;

use crate::algorithm::{resolve, AlgorithmId, AlgorithmPolicy};
use crate::error::{Error, Result};
use crate::keys::SigningCredentials;
use crate::token::Token;

/// Why a token's authenticity could not be established
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature does not match, or the key could not verify it
    #[error("Signature is not valid")]
    Invalid,

    /// No secret or key was supplied
    #[error("Secret is empty")]
    EmptySecret,

    /// The declared algorithm is not supported (or not allowed) here
    #[error("Unsupported algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl SignatureError {
    /// User-facing headline for this outcome
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<Error> for SignatureError {
    fn from(err: Error) -> Self {
        match err {
            Error::EmptySecret => SignatureError::EmptySecret,
            Error::UnknownAlgorithm(alg) => SignatureError::UnknownAlgorithm(alg),
            _ => SignatureError::Invalid,
        }
    }
}

/// Verify the token's signature with the caller's credentials
///
/// The declared `alg` is checked against `policy`, resolved to a verifier
/// and run over the token's original signing input.
pub fn verify_signature(
    token: &Token,
    credentials: &SigningCredentials,
    policy: &AlgorithmPolicy,
) -> std::result::Result<(), SignatureError> {
    let alg_id = token.typed_header().algorithm_str();

    ensure_allowed(alg_id, policy)
        .and_then(|()| resolve(alg_id, credentials))
        .and_then(|verifier| verifier.verify(token.signing_input(), token.signature()))
        .map_err(SignatureError::from)
}

fn ensure_allowed(alg_id: &str, policy: &AlgorithmPolicy) -> Result<()> {
    let algorithm: AlgorithmId = alg_id.parse()?;
    policy.validate(&algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64url;
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    fn hs256_token(header: &str, secret: &[u8]) -> Token {
        let signing_input = format!(
            "{}.{}",
            base64url::encode(header),
            base64url::encode(r#"{"sub":"1234567890"}"#)
        );
        let mut mac = Hmac::<Sha256>::new_from_slice(secret).unwrap();
        mac.update(signing_input.as_bytes());
        let signature = base64url::encode_bytes(&mac.finalize().into_bytes());
        Token::decode(&format!("{signing_input}.{signature}")).unwrap()
    }

    #[test]
    fn test_messages() {
        assert_eq!(SignatureError::Invalid.message(), "Signature is not valid");
        assert_eq!(SignatureError::EmptySecret.message(), "Secret is empty");
        assert_eq!(
            SignatureError::UnknownAlgorithm("FAKE999".into()).message(),
            "Unsupported algorithm: FAKE999"
        );
    }

    #[test]
    fn test_classification() {
        assert_eq!(SignatureError::from(Error::EmptySecret), SignatureError::EmptySecret);
        assert_eq!(
            SignatureError::from(Error::UnknownAlgorithm("none".into())),
            SignatureError::UnknownAlgorithm("none".into())
        );
        assert_eq!(SignatureError::from(Error::SignatureInvalid), SignatureError::Invalid);
        assert_eq!(
            SignatureError::from(Error::InvalidKey("bad".into())),
            SignatureError::Invalid
        );
        assert_eq!(
            SignatureError::from(Error::KeyTypeMismatch {
                algorithm: "ES256".into(),
                expected_key_type: "ECDSA P256".into(),
                actual_key_type: "ECDSA P384".into(),
            }),
            SignatureError::Invalid
        );
    }

    #[test]
    fn test_verify_signature_outcomes() {
        let policy = AlgorithmPolicy::default();
        let token = hs256_token(r#"{"alg":"HS256","typ":"JWT"}"#, b"s3cr3t");

        assert_eq!(verify_signature(&token, &"s3cr3t".into(), &policy), Ok(()));
        assert_eq!(
            verify_signature(&token, &"wrong".into(), &policy),
            Err(SignatureError::Invalid)
        );
        assert_eq!(
            verify_signature(&token, &"".into(), &policy),
            Err(SignatureError::EmptySecret)
        );
    }

    #[test]
    fn test_missing_alg_is_unknown() {
        let token = hs256_token(r#"{"typ":"JWT"}"#, b"s3cr3t");
        assert_eq!(
            verify_signature(&token, &"s3cr3t".into(), &AlgorithmPolicy::default()),
            Err(SignatureError::UnknownAlgorithm(String::new()))
        );
    }

    #[test]
    fn test_policy_rejects_as_unknown() {
        let token = hs256_token(r#"{"alg":"HS256"}"#, b"s3cr3t");
        assert_eq!(
            verify_signature(&token, &"s3cr3t".into(), &AlgorithmPolicy::rsa_any()),
            Err(SignatureError::UnknownAlgorithm("HS256".into()))
        );
    }
}
