use std::fmt;

use crate::algorithm::{get_verifier, AlgorithmFamily, AlgorithmId, SignatureVerifier};
use crate::error::{Error, Result};
use crate::keys::{Key, SigningCredentials};
use crate::utils::pem;

/// A concrete verification capability: one algorithm bound to one key
///
/// Produced by [`resolve`]. Holds nothing besides the algorithm and the key
/// built from the caller's credentials; the key is wiped when the verifier
/// is dropped.
pub struct Verifier {
    algorithm: AlgorithmId,
    implementation: SignatureVerifier,
    key: Key,
}

impl Verifier {
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Verify `signature` over `signing_input`
    ///
    /// # Errors
    ///
    /// [`Error::SignatureInvalid`] when the signature does not match or the
    /// key material cannot be used by the primitive.
    pub fn verify(&self, signing_input: &[u8], signature: &[u8]) -> Result<()> {
        let result = self.implementation.verify(signing_input, signature, &self.key);
        tracing::debug!(
            alg = self.implementation.name(),
            valid = result.is_ok(),
            "verified signature"
        );
        result
    }
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("algorithm", &self.algorithm)
            .field("key_type", &self.key.key_type())
            .finish()
    }
}

/// Map an algorithm identifier and caller credentials to a [`Verifier`]
///
/// The identifier is looked up first, so an unsupported algorithm is
/// reported even when the credentials are also empty.
///
/// - `HS*`: the credential bytes are the HMAC secret
/// - `RS*`: the credentials are an RSA public key, PEM or DER
/// - `ES*`: the credentials are an EC public key on the matching curve, PEM,
///   DER or an uncompressed SEC1 point
///
/// # Errors
///
/// - [`Error::UnknownAlgorithm`] for any identifier outside the supported
///   table, including `none` and the empty string
/// - [`Error::EmptySecret`] when the credentials hold no bytes
/// - [`Error::InvalidKey`] when PEM armour is present but unreadable
pub fn resolve(alg_id: &str, credentials: &SigningCredentials) -> Result<Verifier> {
    let algorithm: AlgorithmId = alg_id.parse()?;

    if credentials.is_empty() {
        return Err(Error::EmptySecret);
    }

    let material = credentials.as_bytes();
    let key = match algorithm.family() {
        AlgorithmFamily::Hmac => Key::symmetric(material),
        AlgorithmFamily::Rsa => Key::rsa_public(pem::to_der(material)?),
        AlgorithmFamily::Ecdsa(curve) => Key::ecdsa_public(pem::to_der(material)?, curve),
    };

    tracing::debug!(alg = algorithm.as_str(), key_type = key.key_type(), "resolved verifier");

    Ok(Verifier {
        algorithm,
        implementation: get_verifier(&algorithm),
        key,
    })
}
