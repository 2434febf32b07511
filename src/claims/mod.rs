//! Time-bound claim checks
//!
//! The three registered time claims are checked against a caller-supplied
//! "now". Every claim produces at most one [`ClaimError`] and the checks never
//! short-circuit, so a caller always sees the full set of claim problems.

mod validator;

pub use validator::validate_claims;

use std::fmt;

use serde_json::Value;

pub(crate) const NOT_A_DATE: &str = "Illegal type: not a date";
pub(crate) const FUTURE_DATE_EXPECTED: &str = "Future date expected";
pub(crate) const PAST_DATE_EXPECTED: &str = "Past date expected";

/// A problem with one named claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimError {
    claim: String,
    message: String,
}

impl ClaimError {
    pub fn new(claim: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            message: message.into(),
        }
    }

    /// The claim is absent or its value cannot be read as a date
    pub fn not_a_date(claim: impl Into<String>) -> Self {
        Self::new(claim, NOT_A_DATE)
    }

    /// Name of the offending claim, e.g. `"exp"`
    pub fn claim(&self) -> &str {
        &self.claim
    }

    /// Human-readable description
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ClaimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.claim, self.message)
    }
}

impl std::error::Error for ClaimError {}

/// Which side of "now" a time claim must fall on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// Strictly after now
    Future,
    /// Strictly before now
    Past,
}

/// The registered time claims, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeClaim {
    /// Expiration Time (exp)
    ExpiresAt,
    /// Issued At (iat)
    IssuedAt,
    /// Not Before (nbf)
    NotBefore,
}

impl TimeClaim {
    pub const ALL: [TimeClaim; 3] = [TimeClaim::ExpiresAt, TimeClaim::IssuedAt, TimeClaim::NotBefore];

    /// Claim name as it appears in the payload
    pub const fn name(&self) -> &'static str {
        match self {
            TimeClaim::ExpiresAt => "exp",
            TimeClaim::IssuedAt => "iat",
            TimeClaim::NotBefore => "nbf",
        }
    }

    pub const fn expectation(&self) -> Expectation {
        match self {
            TimeClaim::ExpiresAt => Expectation::Future,
            TimeClaim::IssuedAt | TimeClaim::NotBefore => Expectation::Past,
        }
    }

    /// Check a date (seconds since epoch) against `now_millis`
    ///
    /// The date is compared at millisecond resolution, so a claim equal to
    /// the current second is already in the past once that second has begun.
    pub fn check(&self, date: i64, now_millis: i64) -> Result<(), ClaimError> {
        let date_millis = date.saturating_mul(1000);
        match self.expectation() {
            Expectation::Future if date_millis <= now_millis => {
                Err(ClaimError::new(self.name(), FUTURE_DATE_EXPECTED))
            }
            Expectation::Past if date_millis >= now_millis => {
                Err(ClaimError::new(self.name(), PAST_DATE_EXPECTED))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TimeClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read a JSON value as a NumericDate (seconds since epoch).
///
/// Integers are taken as-is, floats are truncated toward zero. Strings,
/// booleans, null, arrays, objects and out-of-range numbers are not dates.
pub(crate) fn numeric_date(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };

    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f.trunc() as i64)
    })
}
