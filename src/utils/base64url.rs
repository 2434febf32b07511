//! Base64URL encoding/decoding per RFC 4648
//!
//! Thin wrapper around the `base64` crate: URL-safe alphabet, no padding,
//! with failures attributed to the token segment being decoded.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::error::{Error, Result, Segment};

/// Decode one Base64URL token segment to bytes
pub fn decode_bytes(input: &str, segment: Segment) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::InvalidBase64 {
            segment,
            reason: e.to_string(),
        })
}

/// Encode bytes to a Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}
