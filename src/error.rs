//! Error types for JWT decoding and algorithm resolution
//!
//! Only failures that stop an operation are modelled here. Claim problems and
//! the signature outcome of a validation pass are collected as plain data in
//! [`ValidationReport`](crate::ValidationReport) instead.

use std::fmt;

use thiserror::Error;

/// One of the three dot-separated parts of a compact JWT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
    Signature,
}

impl Segment {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Segment::Header => "header",
            Segment::Payload => "payload",
            Segment::Signature => "signature",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// jwtcheck errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Malformed token
    // ============================================================================
    #[error("Invalid JWT format: expected three Base64URL parts separated by '.'")]
    InvalidFormat,

    #[error("Base64URL decoding of {segment} failed: {reason}")]
    InvalidBase64 { segment: Segment, reason: String },

    #[error("JSON parsing of {segment} failed: {reason}")]
    InvalidJson { segment: Segment, reason: String },

    // ============================================================================
    // Algorithm resolution
    // ============================================================================
    #[error("Secret is empty")]
    EmptySecret,

    #[error("Unsupported algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid key material: {0}")]
    InvalidKey(String),

    #[error(
        "Key type mismatch for algorithm '{algorithm}': expected {expected_key_type}, got {actual_key_type}"
    )]
    KeyTypeMismatch {
        algorithm: String,
        expected_key_type: String,
        actual_key_type: String,
    },

    // ============================================================================
    // Signature
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,
}

impl Error {
    /// Whether the error comes from a structurally broken token.
    ///
    /// Nothing can be checked on such a token, so these are the only errors a
    /// validation pass propagates instead of collecting.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::InvalidFormat | Error::InvalidBase64 { .. } | Error::InvalidJson { .. }
        )
    }
}

/// Result type alias for jwtcheck operations
pub type Result<T> = std::result::Result<T, Error>;
