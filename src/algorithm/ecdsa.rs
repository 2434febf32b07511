use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::{EcdsaCurve, Key};

use aws_lc_rs::signature::{self, UnparsedPublicKey};

/// ES256 algorithm (ECDSA with P-256 and SHA-256)
pub struct ES256;

/// ES384 algorithm (ECDSA with P-384 and SHA-384)
pub struct ES384;

/// ES512 algorithm (ECDSA with P-521 and SHA-512)
pub struct ES512;

impl Algorithm for ES256 {
    fn name(&self) -> &'static str {
        "ES256"
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        verify_ecdsa(
            self.name(),
            EcdsaCurve::P256,
            signing_input,
            signature,
            key,
            &signature::ECDSA_P256_SHA256_FIXED,
        )
    }
}

impl Algorithm for ES384 {
    fn name(&self) -> &'static str {
        "ES384"
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        verify_ecdsa(
            self.name(),
            EcdsaCurve::P384,
            signing_input,
            signature,
            key,
            &signature::ECDSA_P384_SHA384_FIXED,
        )
    }
}

impl Algorithm for ES512 {
    fn name(&self) -> &'static str {
        "ES512"
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        verify_ecdsa(
            self.name(),
            EcdsaCurve::P521,
            signing_input,
            signature,
            key,
            &signature::ECDSA_P521_SHA512_FIXED,
        )
    }
}

/// Generic ECDSA signature verification
///
/// JWS carries ECDSA signatures as fixed-length `R || S` (RFC 7518 §3.4),
/// not ASN.1 DER.
///
/// [`resolve`](crate::resolve) always binds the key to the algorithm's
/// curve; the curve check guards callers that build a [`Key`] themselves and
/// call [`Algorithm::verify`] directly.
fn verify_ecdsa(
    algorithm_name: &str,
    curve: EcdsaCurve,
    signing_input: &[u8],
    signature: &[u8],
    key: &Key,
    algorithm: &'static dyn signature::VerificationAlgorithm,
) -> Result<()> {
    let ecdsa_key = key.as_ecdsa_public(algorithm_name)?;

    if ecdsa_key.curve() != curve {
        return Err(Error::KeyTypeMismatch {
            algorithm: algorithm_name.to_string(),
            expected_key_type: format!("ECDSA {curve:?}"),
            actual_key_type: format!("ECDSA {:?}", ecdsa_key.curve()),
        });
    }

    UnparsedPublicKey::new(algorithm, ecdsa_key.as_der())
        .verify(signing_input, signature)
        .map_err(|_| Error::SignatureInvalid)
}
