use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;

use aws_lc_rs::signature::{self, UnparsedPublicKey};

/// RS256 algorithm (RSA with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSA with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSA with SHA-512)
pub struct RS512;

impl Algorithm for RS256 {
    fn name(&self) -> &'static str {
        "RS256"
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        let rsa_key = key.as_rsa_public(self.name())?;
        verify_rsa(
            signing_input,
            signature,
            rsa_key.as_der(),
            &signature::RSA_PKCS1_2048_8192_SHA256,
        )
    }
}

impl Algorithm for RS384 {
    fn name(&self) -> &'static str {
        "RS384"
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        let rsa_key = key.as_rsa_public(self.name())?;
        verify_rsa(
            signing_input,
            signature,
            rsa_key.as_der(),
            &signature::RSA_PKCS1_2048_8192_SHA384,
        )
    }
}

impl Algorithm for RS512 {
    fn name(&self) -> &'static str {
        "RS512"
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        let rsa_key = key.as_rsa_public(self.name())?;
        verify_rsa(
            signing_input,
            signature,
            rsa_key.as_der(),
            &signature::RSA_PKCS1_2048_8192_SHA512,
        )
    }
}

/// Generic RSA signature verification
///
/// An unparsable key and a mismatching signature both fail as
/// [`Error::SignatureInvalid`].
fn verify_rsa(
    signing_input: &[u8],
    signature: &[u8],
    public_key_der: &[u8],
    algorithm: &'static dyn signature::VerificationAlgorithm,
) -> Result<()> {
    UnparsedPublicKey::new(algorithm, public_key_der)
        .verify(signing_input, signature)
        .map_err(|_| Error::SignatureInvalid)
}
