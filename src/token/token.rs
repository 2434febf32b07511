use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::claims::{self, ClaimError};
use crate::error::{Error, Result, Segment};
use crate::token::TokenHeader;
use crate::utils::base64url;

/// A decoded compact JWT
///
/// Decoding splits the token into its three segments, parses header and
/// payload as JSON objects (keeping their key order) and decodes the
/// signature bytes. The token is immutable afterwards: the signing input is
/// always the original `header.payload` text of the raw token, never a
/// re-serialization of the parsed claims.
///
/// Holding a `Token` says nothing about its validity. Use
/// [`TokenValidator`](crate::TokenValidator) to check claims and signature.
#[derive(Clone)]
pub struct Token {
    raw: String,
    signing_input_len: usize,
    header: Map<String, Value>,
    typed_header: TokenHeader,
    payload: Map<String, Value>,
    signature: Vec<u8>,
}

impl Token {
    /// Decode a JWT from its compact serialization
    ///
    /// # Errors
    ///
    /// Fails with one of the malformed-token errors ([`Error::is_malformed`])
    /// when the string is not exactly three dot-separated segments, when a
    /// segment is not valid Base64URL, or when header or payload is not a
    /// JSON object. A missing `alg` is not an error at this stage.
    ///
    /// # Example
    /// ```ignore
    /// let token = Token::decode("eyJ...")?;
    /// assert_eq!(token.algorithm(), Some("HS256"));
    /// ```
    pub fn decode(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::InvalidFormat);
        }

        let header = decode_object(parts[0], Segment::Header)?;
        let payload = decode_object(parts[1], Segment::Payload)?;
        let signature = base64url::decode_bytes(parts[2], Segment::Signature)?;

        let typed_header = TokenHeader::from_map(&header);
        tracing::debug!(
            alg = typed_header.algorithm_str(),
            claims = payload.len(),
            "decoded token"
        );

        Ok(Self {
            raw: raw.to_string(),
            signing_input_len: parts[0].len() + 1 + parts[1].len(),
            header,
            typed_header,
            payload,
            signature,
        })
    }

    /// The token exactly as it was decoded
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Header parameters, in their original order
    pub fn header(&self) -> &Map<String, Value> {
        &self.header
    }

    /// Typed view of `alg`, `typ` and `kid`
    pub fn typed_header(&self) -> &TokenHeader {
        &self.typed_header
    }

    /// Payload claims, in their original order
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Look up a single claim
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// Read a claim as a date in seconds since the epoch
    ///
    /// Numeric claims are dates (fractions are truncated); anything else,
    /// including an absent claim, yields the claim's "not a date" error.
    pub fn date_claim(&self, name: &str) -> std::result::Result<i64, ClaimError> {
        self.claim(name)
            .and_then(claims::numeric_date)
            .ok_or_else(|| ClaimError::not_a_date(name))
    }

    /// Declared algorithm, if `alg` is present and a string
    pub fn algorithm(&self) -> Option<&str> {
        self.typed_header.algorithm.as_deref()
    }

    /// Declared key ID, if any
    pub fn key_id(&self) -> Option<&str> {
        self.typed_header.key_id()
    }

    /// Declared token type, if any
    pub fn token_type(&self) -> Option<&str> {
        self.typed_header.token_type.as_deref()
    }

    /// The exact bytes the signature covers: `base64url(header).base64url(payload)`
    pub fn signing_input(&self) -> &[u8] {
        self.raw[..self.signing_input_len].as_bytes()
    }

    /// Decoded signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

/// Custom `Debug` that keeps claim values and signature out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// Base64URL-decode a segment and parse it as a JSON object.
fn decode_object(encoded: &str, segment: Segment) -> Result<Map<String, Value>> {
    let bytes = base64url::decode_bytes(encoded, segment)?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::InvalidJson {
            segment,
            reason: "expected a JSON object".to_string(),
        }),
        Err(e) => Err(Error::InvalidJson {
            segment,
            reason: e.to_string(),
        }),
    }
}
