use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        let symmetric_key = key.as_symmetric(self.name())?;
        verify_mac::<Hmac<Sha256>>(signing_input, signature, symmetric_key.as_bytes())
    }
}

impl Algorithm for HS384 {
    fn name(&self) -> &'static str {
        "HS384"
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        let symmetric_key = key.as_symmetric(self.name())?;
        verify_mac::<Hmac<Sha384>>(signing_input, signature, symmetric_key.as_bytes())
    }
}

impl Algorithm for HS512 {
    fn name(&self) -> &'static str {
        "HS512"
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<()> {
        let symmetric_key = key.as_symmetric(self.name())?;
        verify_mac::<Hmac<Sha512>>(signing_input, signature, symmetric_key.as_bytes())
    }
}

/// Recompute the MAC and compare in constant time
fn verify_mac<M: Mac + KeyInit>(signing_input: &[u8], signature: &[u8], secret: &[u8]) -> Result<()> {
    let mut mac = <M as Mac>::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
    mac.update(signing_input);
    let expected_signature = mac.finalize().into_bytes();

    if signature.len() != expected_signature.len() {
        return Err(Error::SignatureInvalid);
    }

    if constant_time_eq(signature, &expected_signature) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}
