//! # jwtcheck - JWT Validation with Side-by-Side Reporting
//!
//! **jwtcheck** decodes compact JSON Web Tokens and validates them against a
//! caller-supplied secret or public key. Instead of stopping at the first
//! problem, a validation pass returns a [`ValidationReport`] that lists every
//! time-claim problem next to a single signature outcome, so a token that is
//! both expired *and* signed with a different secret shows both at once.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtcheck::*;
//!
//! let token = Token::decode(token_str)?;
//! let report = TokenValidator::new()
//!     .validate(&token, &SigningCredentials::from_secret("s3cr3t"));
//!
//! for err in report.claim_errors() {
//!     println!("{}: {}", err.claim(), err.message());
//! }
//! println!("{}", report.signature_status());
//! ```
//!
//! ## Validation Flow
//!
//! ```text
//! raw token string
//!     │ Token::decode()            malformed → Err(Error)
//!     ▼
//! Token (header, payload, signature, original signing input)
//!     │ TokenValidator::validate()
//!     ├── exp / iat / nbf checks    → claim_errors
//!     └── resolve(alg) → verify()   → signature_error
//!     ▼
//! ValidationReport
//! ```
//!
//! Only decoding can fail outright. Claim and signature problems are
//! collected, never thrown.
//!
//! ## Signature Outcomes
//!
//! Exactly one of:
//!
//! - `"Signature is valid"`: no [`SignatureError`]
//! - `"Signature is not valid"`: [`SignatureError::Invalid`]
//! - `"Secret is empty"`: [`SignatureError::EmptySecret`]
//! - `"Unsupported algorithm: X"`: [`SignatureError::UnknownAlgorithm`]
//!
//! ## Algorithm Support
//!
//! - **HMAC**: HS256, HS384, HS512
//! - **RSA** (PKCS#1 v1.5): RS256, RS384, RS512
//! - **ECDSA**: ES256, ES384, ES512
//!
//! RSA and ECDSA credentials may be PEM or DER. `"none"` is never accepted.
//!
//! ## Security
//!
//! HMAC signature verification uses constant-time comparison via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate.
//! Secrets are zeroized on drop and redacted from `Debug` output.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518): JSON Web Algorithms (JWA)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)

// Core modules
pub mod error;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims and signature checks
pub mod claims;
pub mod signature;

// Token model
pub mod token;

// Validator (main public API)
pub mod report;
pub mod validator;

// ============================================================================
// PUBLIC API
// ============================================================================

// Main validation flow types
pub use report::ValidationReport;
pub use token::Token;
pub use validator::TokenValidator;

// Inputs and outcomes
pub use claims::{validate_claims, ClaimError, TimeClaim};
pub use keys::SigningCredentials;
pub use signature::SignatureError;

// Supporting types for advanced usage
pub use algorithm::{resolve, AlgorithmId, AlgorithmPolicy, Verifier};
pub use error::{Error, Result};
pub use keys::{EcdsaCurve, Key};
pub use token::TokenHeader;
