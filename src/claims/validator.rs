use crate::claims::{ClaimError, TimeClaim};
use crate::token::Token;

/// Check `exp`, `iat` and `nbf` against `now_millis` (milliseconds since epoch)
///
/// All three claims are always checked, in that order. Each one contributes
/// at most one error: "not a date" when it is missing or not numeric,
/// otherwise a wrong-side-of-now error when the comparison fails.
pub fn validate_claims(token: &Token, now_millis: i64) -> Vec<ClaimError> {
    let errors: Vec<ClaimError> = TimeClaim::ALL
        .iter()
        .filter_map(|claim| {
            token
                .date_claim(claim.name())
                .and_then(|date| claim.check(date, now_millis))
                .err()
        })
        .collect();

    tracing::debug!(now_millis, errors = errors.len(), "validated time claims");
    errors
}
