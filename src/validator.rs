//! Validation orchestrator
//!
//! A [`TokenValidator`] runs one complete pass over a decoded token: the
//! time claims first, then algorithm resolution and signature verification.
//! Claim failures never stop the pass, so the returned
//! [`ValidationReport`] always carries both channels.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::algorithm::AlgorithmPolicy;
use crate::claims::{self, ClaimError};
use crate::error::Result;
use crate::keys::SigningCredentials;
use crate::report::ValidationReport;
use crate::signature;
use crate::token::Token;

/// JWT validator with builder-style configuration
///
/// Holds no per-token state; one validator can check any number of tokens,
/// from any number of threads.
///
/// # Example
///
/// ```ignore
/// use jwtcheck::*;
///
/// let token = Token::decode("eyJ...")?;
/// let report = TokenValidator::new()
///     .algorithms(AlgorithmPolicy::hmac_any())
///     .validate(&token, &SigningCredentials::from_secret("s3cr3t"));
///
/// for err in report.claim_errors() {
///     println!("{err}");
/// }
/// println!("{}", report.signature_status());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenValidator {
    policy: AlgorithmPolicy,
    now_millis: Option<i64>,
}

impl TokenValidator {
    /// Validator accepting every supported algorithm, evaluated at wall-clock time
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict which declared algorithms are verified
    ///
    /// A token declaring an algorithm outside the policy gets the
    /// unsupported-algorithm outcome.
    pub fn algorithms(mut self, policy: AlgorithmPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Evaluate time claims at a fixed instant (seconds since epoch)
    pub fn at(self, now: i64) -> Self {
        self.at_millis(now.saturating_mul(1000))
    }

    /// Evaluate time claims at a fixed instant (milliseconds since epoch)
    pub fn at_millis(mut self, now_millis: i64) -> Self {
        self.now_millis = Some(now_millis);
        self
    }

    /// Run claims and signature checks
    pub fn validate(&self, token: &Token, credentials: &SigningCredentials) -> ValidationReport {
        let claim_errors = self.validate_claims(token);
        let signature_error =
            signature::verify_signature(token, credentials, &self.policy).err();

        tracing::debug!(
            claim_errors = claim_errors.len(),
            signature_error = ?signature_error,
            "validated token"
        );

        ValidationReport::new(claim_errors, signature_error)
    }

    /// Check only the time claims, without touching any key material
    pub fn validate_claims(&self, token: &Token) -> Vec<ClaimError> {
        claims::validate_claims(token, self.now_millis())
    }

    /// Decode and validate in one step
    ///
    /// # Errors
    ///
    /// Only decoding failures are returned as errors; everything else is
    /// reported in the [`ValidationReport`].
    pub fn validate_str(
        &self,
        raw: &str,
        credentials: &SigningCredentials,
    ) -> Result<ValidationReport> {
        let token = Token::decode(raw)?;
        Ok(self.validate(&token, credentials))
    }

    fn now_millis(&self) -> i64 {
        self.now_millis.unwrap_or_else(current_timestamp_millis)
    }
}

fn current_timestamp_millis() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        Err(before_epoch) => -(before_epoch.duration().as_millis() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::AlgorithmId;
    use crate::error::Error;
    use crate::signature::SignatureError;
    use crate::utils::base64url;
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    const NOW: i64 = 1_700_000_000;

    fn hs256_token(payload: &str, secret: &[u8]) -> String {
        let signing_input = format!(
            "{}.{}",
            base64url::encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            base64url::encode(payload)
        );
        let mut mac = Hmac::<Sha256>::new_from_slice(secret).unwrap();
        mac.update(signing_input.as_bytes());
        let signature = base64url::encode_bytes(&mac.finalize().into_bytes());
        format!("{signing_input}.{signature}")
    }

    fn timed_payload(exp: i64, iat: i64, nbf: i64) -> String {
        format!(r#"{{"sub":"1234567890","exp":{exp},"iat":{iat},"nbf":{nbf}}}"#)
    }

    #[test]
    fn test_valid_token() {
        let raw = hs256_token(&timed_payload(NOW + 3600, NOW - 10, NOW - 10), b"s3cr3t");
        let report = TokenValidator::new()
            .at(NOW)
            .validate_str(&raw, &"s3cr3t".into())
            .unwrap();

        assert!(report.is_valid());
        assert_eq!(report.signature_status(), "Signature is valid");
    }

    #[test]
    fn test_expired_and_wrong_secret_reported_together() {
        let raw = hs256_token(&timed_payload(NOW - 10, NOW - 10, NOW - 10), b"s3cr3t");
        let report = TokenValidator::new()
            .at(NOW)
            .validate_str(&raw, &"wrong".into())
            .unwrap();

        assert_eq!(
            report.claim_errors(),
            &[ClaimError::new("exp", "Future date expected")]
        );
        assert_eq!(report.signature_error(), Some(&SignatureError::Invalid));
    }

    #[test]
    fn test_claims_only_pass() {
        let raw = hs256_token("{}", b"s3cr3t");
        let token = Token::decode(&raw).unwrap();
        let errors = TokenValidator::new().at(NOW).validate_claims(&token);

        let names: Vec<&str> = errors.iter().map(ClaimError::claim).collect();
        assert_eq!(names, ["exp", "iat", "nbf"]);
    }

    #[test]
    fn test_policy_applies() {
        let raw = hs256_token(&timed_payload(NOW + 3600, NOW - 10, NOW - 10), b"s3cr3t");
        let report = TokenValidator::new()
            .algorithms(AlgorithmPolicy::allow_only(vec![AlgorithmId::HS512]))
            .at(NOW)
            .validate_str(&raw, &"s3cr3t".into())
            .unwrap();

        assert!(report.claim_errors().is_empty());
        assert_eq!(report.signature_status(), "Unsupported algorithm: HS256");
    }

    #[test]
    fn test_malformed_token_propagates() {
        let err = TokenValidator::new()
            .validate_str("not-a-token", &"s3cr3t".into())
            .unwrap_err();
        assert_eq!(err, Error::InvalidFormat);
    }

    #[test]
    fn test_token_minted_this_second() {
        let raw = hs256_token(&timed_payload(NOW + 3600, NOW, NOW), b"s3cr3t");
        let report = TokenValidator::new()
            .at_millis(NOW * 1000 + 200)
            .validate_str(&raw, &"s3cr3t".into())
            .unwrap();
        assert!(report.is_valid());

        let raw = hs256_token(&timed_payload(NOW, NOW, NOW), b"s3cr3t");
        let report = TokenValidator::new()
            .at_millis(NOW * 1000 + 200)
            .validate_str(&raw, &"s3cr3t".into())
            .unwrap();
        assert_eq!(
            report.claim_errors(),
            &[ClaimError::new("exp", "Future date expected")]
        );
    }

    #[test]
    fn test_at_pins_whole_seconds() {
        let raw = hs256_token(&timed_payload(NOW + 1, NOW, NOW), b"s3cr3t");
        let errors = TokenValidator::new()
            .at(NOW)
            .validate_claims(&Token::decode(&raw).unwrap());

        let names: Vec<&str> = errors.iter().map(ClaimError::claim).collect();
        assert_eq!(names, ["iat", "nbf"]);
    }

    #[test]
    fn test_wall_clock_default() {
        let now = current_timestamp_millis() / 1000;
        let raw = hs256_token(&timed_payload(now + 3600, now - 60, now - 60), b"s3cr3t");
        let report = TokenValidator::new()
            .validate_str(&raw, &"s3cr3t".into())
            .unwrap();
        assert!(report.is_valid());
    }
}
