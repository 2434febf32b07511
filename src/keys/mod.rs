//! Key material for JWT signature verification
//!
//! [`SigningCredentials`] is what a caller types or pastes: opaque secret
//! bytes with no declared purpose. The algorithm resolver turns them into a
//! typed [`Key`]:
//! - Symmetric keys (for HMAC algorithms)
//! - RSA public keys
//! - ECDSA public keys bound to a curve
//!
//! Secret bytes are wiped from memory when the owning value is dropped.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Secret or key material supplied by the caller at verification time
///
/// Never stored inside a [`Token`](crate::Token). `Debug` output is redacted.
#[derive(Clone, Default)]
pub struct SigningCredentials {
    material: Zeroizing<Vec<u8>>,
}

impl SigningCredentials {
    /// Credentials from a passphrase or pasted key text
    pub fn from_secret(secret: impl Into<String>) -> Self {
        Self::from_bytes(secret.into().into_bytes())
    }

    /// Credentials from raw bytes (HMAC secret, DER key, SEC1 point)
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            material: Zeroizing::new(bytes.into()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.material
    }

    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }
}

impl From<&str> for SigningCredentials {
    fn from(secret: &str) -> Self {
        Self::from_bytes(secret.as_bytes())
    }
}

impl From<String> for SigningCredentials {
    fn from(secret: String) -> Self {
        Self::from_secret(secret)
    }
}

impl From<&[u8]> for SigningCredentials {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for SigningCredentials {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("material", &"[REDACTED]")
            .field("len", &self.material.len())
            .finish()
    }
}

/// A key that can be used for JWT signature verification
#[derive(Debug, Clone)]
pub enum Key {
    /// Symmetric key for HMAC algorithms
    Symmetric(SymmetricKey),

    /// RSA public key
    Rsa(RsaPublicKey),

    /// ECDSA public key
    Ecdsa(EcdsaPublicKey),
}

impl Key {
    /// Create a symmetric key from bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.into()))
    }

    /// Create an RSA public key from DER (SubjectPublicKeyInfo or PKCS#1)
    pub fn rsa_public(der: impl Into<Vec<u8>>) -> Self {
        Key::Rsa(RsaPublicKey::new(der.into()))
    }

    /// Create an ECDSA public key from DER SubjectPublicKeyInfo or a SEC1 point
    pub fn ecdsa_public(der: impl Into<Vec<u8>>, curve: EcdsaCurve) -> Self {
        Key::Ecdsa(EcdsaPublicKey::new(der.into(), curve))
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "Symmetric",
            Key::Rsa(_) => "RSA",
            Key::Ecdsa(_) => "ECDSA",
        }
    }

    /// Get as symmetric key, or a mismatch error naming `algorithm`
    pub fn as_symmetric(&self, algorithm: &str) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "Symmetric")),
        }
    }

    /// Get as RSA public key, or a mismatch error naming `algorithm`
    pub fn as_rsa_public(&self, algorithm: &str) -> Result<&RsaPublicKey> {
        match self {
            Key::Rsa(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "RSA")),
        }
    }

    /// Get as ECDSA public key, or a mismatch error naming `algorithm`
    pub fn as_ecdsa_public(&self, algorithm: &str) -> Result<&EcdsaPublicKey> {
        match self {
            Key::Ecdsa(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "ECDSA")),
        }
    }

    fn mismatch(&self, algorithm: &str, expected: &str) -> Error {
        Error::KeyTypeMismatch {
            algorithm: algorithm.to_string(),
            expected_key_type: expected.to_string(),
            actual_key_type: self.key_type().to_string(),
        }
    }
}

/// Symmetric key for HMAC algorithms
#[derive(Clone)]
pub struct SymmetricKey {
    secret: Zeroizing<Vec<u8>>,
}

impl SymmetricKey {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            secret: Zeroizing::new(secret),
        }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

/// RSA public key (DER-encoded)
#[derive(Debug, Clone)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

impl RsaPublicKey {
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

/// ECDSA curve identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaCurve {
    /// P-256 (secp256r1)
    P256,
    /// P-384 (secp384r1)
    P384,
    /// P-521 (secp521r1)
    P521,
}

/// ECDSA public key
#[derive(Debug, Clone)]
pub struct EcdsaPublicKey {
    der: Vec<u8>,
    curve: EcdsaCurve,
}

impl EcdsaPublicKey {
    pub fn new(der: Vec<u8>, curve: EcdsaCurve) -> Self {
        Self { der, curve }
    }

    /// Get the encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }
}
