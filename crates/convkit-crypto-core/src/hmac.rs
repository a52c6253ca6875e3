//! HMAC signing and verification with base64url-encoded tags.
//!
//! The MAC itself comes from the injected [`DigestProvider`]; this module
//! owns the encoding and the constant-time check.

use std::fmt;
use std::str::FromStr;

use crate::base64url;
use crate::digest::{constant_time_eq, DigestProvider, HashAlgorithm};
use crate::error::CryptoError;

/// Hash underlying an HMAC. SHA-1 is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HmacAlgorithm {
    /// HMAC-SHA256 (JWT `HS256`).
    #[serde(rename = "SHA-256")]
    Sha256,
    /// HMAC-SHA384 (JWT `HS384`).
    #[serde(rename = "SHA-384")]
    Sha384,
    /// HMAC-SHA512 (JWT `HS512`).
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HmacAlgorithm {
    /// Every supported MAC, shortest tag first.
    pub const ALL: [Self; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];

    /// The digest this MAC is built on.
    #[must_use]
    pub const fn hash(self) -> HashAlgorithm {
        match self {
            Self::Sha256 => HashAlgorithm::Sha256,
            Self::Sha384 => HashAlgorithm::Sha384,
            Self::Sha512 => HashAlgorithm::Sha512,
        }
    }

    /// JOSE `alg` header value.
    #[must_use]
    pub const fn jwt_name(self) -> &'static str {
        match self {
            Self::Sha256 => "HS256",
            Self::Sha384 => "HS384",
            Self::Sha512 => "HS512",
        }
    }

    /// Parse a JOSE `alg` value (`HS256`/`HS384`/`HS512`).
    #[must_use]
    pub fn from_jwt_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.jwt_name() == name)
    }
}

impl TryFrom<HashAlgorithm> for HmacAlgorithm {
    type Error = CryptoError;

    fn try_from(hash: HashAlgorithm) -> Result<Self, Self::Error> {
        match hash {
            HashAlgorithm::Sha256 => Ok(Self::Sha256),
            HashAlgorithm::Sha384 => Ok(Self::Sha384),
            HashAlgorithm::Sha512 => Ok(Self::Sha512),
            HashAlgorithm::Sha1 => Err(CryptoError::UnsupportedAlgorithm(format!(
                "HMAC over {hash}"
            ))),
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hash().name())
    }
}

impl FromStr for HmacAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(algorithm) = Self::from_jwt_name(s) {
            return Ok(algorithm);
        }
        s.parse::<HashAlgorithm>()?.try_into()
    }
}

/// MAC the UTF-8 bytes of `data` under `secret` and base64url-encode the tag.
///
/// # Errors
///
/// Propagates any failure from `provider`.
pub fn sign(
    provider: &dyn DigestProvider,
    data: &str,
    secret: &[u8],
    algorithm: HmacAlgorithm,
) -> Result<String, CryptoError> {
    let tag = provider.hmac(algorithm, secret, data.as_bytes())?;
    Ok(base64url::encode(&tag))
}

/// Check a base64url `signature` over `data`.
///
/// Never fails: undecodable signatures and provider errors both read as
/// `false`. The tag comparison is constant-time.
#[must_use]
pub fn verify(
    provider: &dyn DigestProvider,
    data: &str,
    signature: &str,
    secret: &[u8],
    algorithm: HmacAlgorithm,
) -> bool {
    let Ok(presented) = base64url::decode(signature) else {
        return false;
    };
    let Ok(expected) = provider.hmac(algorithm, secret, data.as_bytes()) else {
        return false;
    };
    constant_time_eq(&expected, &presented)
}
