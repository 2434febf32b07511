mod resolver;
mod traits;

pub mod ecdsa;
pub mod hmac;
pub mod rsa;

pub use resolver::{resolve, Verifier};
pub use traits::{get_verifier, Algorithm, SignatureVerifier};

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::keys::EcdsaCurve;

/// Algorithm identifier from JWT header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,

    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,

    /// ECDSA with P-256 and SHA-256
    ES256,
    /// ECDSA with P-384 and SHA-384
    ES384,
    /// ECDSA with P-521 and SHA-512
    ES512,
}

/// Kind of key an algorithm verifies with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    Hmac,
    Rsa,
    Ecdsa(EcdsaCurve),
}

/// Capability descriptor for one supported algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmSpec {
    pub id: AlgorithmId,
    pub name: &'static str,
    pub family: AlgorithmFamily,
    pub hash_bits: u16,
}

const fn spec(
    id: AlgorithmId,
    name: &'static str,
    family: AlgorithmFamily,
    hash_bits: u16,
) -> AlgorithmSpec {
    AlgorithmSpec {
        id,
        name,
        family,
        hash_bits,
    }
}

/// Every supported algorithm. Identifiers not listed here do not resolve.
static ALGORITHMS: [AlgorithmSpec; 9] = [
    spec(AlgorithmId::HS256, "HS256", AlgorithmFamily::Hmac, 256),
    spec(AlgorithmId::HS384, "HS384", AlgorithmFamily::Hmac, 384),
    spec(AlgorithmId::HS512, "HS512", AlgorithmFamily::Hmac, 512),
    spec(AlgorithmId::RS256, "RS256", AlgorithmFamily::Rsa, 256),
    spec(AlgorithmId::RS384, "RS384", AlgorithmFamily::Rsa, 384),
    spec(AlgorithmId::RS512, "RS512", AlgorithmFamily::Rsa, 512),
    spec(AlgorithmId::ES256, "ES256", AlgorithmFamily::Ecdsa(EcdsaCurve::P256), 256),
    spec(AlgorithmId::ES384, "ES384", AlgorithmFamily::Ecdsa(EcdsaCurve::P384), 384),
    spec(AlgorithmId::ES512, "ES512", AlgorithmFamily::Ecdsa(EcdsaCurve::P521), 512),
];

impl AlgorithmId {
    /// All supported algorithms, in table order
    pub fn all() -> impl Iterator<Item = AlgorithmId> {
        ALGORITHMS.iter().map(|spec| spec.id)
    }

    /// Capability descriptor for this algorithm
    pub fn spec(&self) -> &'static AlgorithmSpec {
        // The table holds one entry per variant, in declaration order
        &ALGORITHMS[*self as usize]
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        self.spec().name
    }

    pub fn family(&self) -> AlgorithmFamily {
        self.spec().family
    }

    /// Output width of the SHA-2 hash in bits
    pub fn hash_bits(&self) -> u16 {
        self.spec().hash_bits
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        self.family() == AlgorithmFamily::Hmac
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    /// Parse algorithm string from JWT header
    ///
    /// Exact, case-sensitive match against the table. `none` is not special:
    /// like any unlisted identifier it fails as unknown.
    fn from_str(s: &str) -> Result<Self> {
        ALGORITHMS
            .iter()
            .find(|spec| spec.name == s)
            .map(|spec| spec.id)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Policy for allowed algorithms
#[derive(Debug, Clone)]
pub struct AlgorithmPolicy {
    allowed: Vec<AlgorithmId>,
}

impl AlgorithmPolicy {
    /// Create a policy that allows only specific algorithms
    pub fn allow_only(algorithms: Vec<AlgorithmId>) -> Self {
        Self {
            allowed: algorithms,
        }
    }

    /// Create a policy that allows every supported algorithm
    pub fn allow_all() -> Self {
        Self::allow_only(AlgorithmId::all().collect())
    }

    /// Policy that allows only HS256
    pub fn hs256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS256])
    }

    /// Policy that allows any HMAC algorithm (HS256, HS384, HS512)
    pub fn hmac_any() -> Self {
        Self::of_family(|family| family == AlgorithmFamily::Hmac)
    }

    /// Policy that allows only RS256
    pub fn rs256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::RS256])
    }

    /// Policy that allows any RSA algorithm (RS256, RS384, RS512)
    pub fn rsa_any() -> Self {
        Self::of_family(|family| family == AlgorithmFamily::Rsa)
    }

    /// Policy that allows only ES256
    pub fn es256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::ES256])
    }

    /// Policy that allows any ECDSA algorithm (ES256, ES384, ES512)
    pub fn ecdsa_any() -> Self {
        Self::of_family(|family| matches!(family, AlgorithmFamily::Ecdsa(_)))
    }

    fn of_family(predicate: impl Fn(AlgorithmFamily) -> bool) -> Self {
        Self::allow_only(AlgorithmId::all().filter(|id| predicate(id.family())).collect())
    }

    /// Check if an algorithm is allowed
    pub fn is_allowed(&self, algorithm: &AlgorithmId) -> bool {
        self.allowed.contains(algorithm)
    }

    /// Validate algorithm against policy
    ///
    /// An algorithm outside the policy is treated exactly like one this crate
    /// does not implement.
    pub fn validate(&self, algorithm: &AlgorithmId) -> Result<()> {
        if self.is_allowed(algorithm) {
            Ok(())
        } else {
            Err(Error::UnknownAlgorithm(algorithm.to_string()))
        }
    }

    /// Get list of allowed algorithms
    pub fn allowed_algorithms(&self) -> &[AlgorithmId] {
        &self.allowed
    }
}

impl Default for AlgorithmPolicy {
    fn default() -> Self {
        Self::allow_all()
    }
}
