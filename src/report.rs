use crate::claims::ClaimError;
use crate::signature::SignatureError;

/// Headline shown when the signature checks out
pub const SIGNATURE_VALID: &str = "Signature is valid";

/// Outcome of one validation pass
///
/// Claim problems are attributed to individual claims and kept in the order
/// they were found. The signature outcome is a single slot: no error means
/// the signature was verified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    claim_errors: Vec<ClaimError>,
    signature_error: Option<SignatureError>,
}

impl ValidationReport {
    pub fn new(claim_errors: Vec<ClaimError>, signature_error: Option<SignatureError>) -> Self {
        Self {
            claim_errors,
            signature_error,
        }
    }

    pub fn claim_errors(&self) -> &[ClaimError] {
        &self.claim_errors
    }

    pub fn signature_error(&self) -> Option<&SignatureError> {
        self.signature_error.as_ref()
    }

    /// First error reported for the named claim
    pub fn claim_error(&self, claim: &str) -> Option<&ClaimError> {
        self.claim_errors.iter().find(|err| err.claim() == claim)
    }

    pub fn has_signature_error(&self) -> bool {
        self.signature_error.is_some()
    }

    /// No claim errors and a verified signature
    pub fn is_valid(&self) -> bool {
        self.claim_errors.is_empty() && self.signature_error.is_none()
    }

    /// One-line signature headline for display
    pub fn signature_status(&self) -> String {
        match &self.signature_error {
            Some(err) => err.message(),
            None => SIGNATURE_VALID.to_string(),
        }
    }
}
