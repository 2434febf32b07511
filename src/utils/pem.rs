//! PEM armour handling for public key material

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Error, Result};

const PEM_PREFIX: &str = "-----BEGIN";

/// Unwrap PEM-armoured key material into DER bytes.
///
/// Input that does not start with a `-----BEGIN` line is returned unchanged,
/// so raw DER (or a raw SEC1 point) passes straight through.
pub(crate) fn to_der(material: &[u8]) -> Result<Vec<u8>> {
    let text = match std::str::from_utf8(material) {
        Ok(text) if text.trim_start().starts_with(PEM_PREFIX) => text,
        _ => return Ok(material.to_vec()),
    };

    let body: String = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("-----"))
        .collect();

    if body.is_empty() {
        return Err(Error::InvalidKey("PEM block has no body".to_string()));
    }

    STANDARD
        .decode(body)
        .map_err(|e| Error::InvalidKey(format!("PEM body is not valid base64: {e}")))
}
