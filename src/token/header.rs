use serde_json::{Map, Value};

use crate::algorithm::AlgorithmId;
use crate::error::Result;

/// Typed view over the registered JWT header parameters
///
/// Built from the decoded header object. A parameter that is absent or not a
/// string is `None`; whether that is acceptable is decided later, by the
/// algorithm resolver, not by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenHeader {
    /// Algorithm used for signing (`alg`)
    pub algorithm: Option<String>,

    /// Token type, typically "JWT" (`typ`)
    pub token_type: Option<String>,

    /// Key ID (`kid`)
    pub key_id: Option<String>,
}

impl TokenHeader {
    pub(crate) fn from_map(header: &Map<String, Value>) -> Self {
        let string_param = |name: &str| header.get(name).and_then(Value::as_str).map(str::to_owned);

        Self {
            algorithm: string_param("alg"),
            token_type: string_param("typ"),
            key_id: string_param("kid"),
        }
    }

    /// Algorithm as declared, or the empty string when `alg` is missing
    pub fn algorithm_str(&self) -> &str {
        self.algorithm.as_deref().unwrap_or_default()
    }

    /// Parse algorithm from header
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        self.algorithm_str().parse()
    }

    /// Get key ID if present
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}
