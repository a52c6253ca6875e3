//! SHA family digests behind an injectable provider, hex rendering, and
//! constant-time comparison.
//!
//! [`DigestProvider`] is the single seam to the platform crypto library.
//! [`RingProvider`] backs it with `ring::digest` and `ring::hmac`.

use std::fmt;
use std::str::FromStr;

use data_encoding::HEXLOWER;
use ring::{digest, hmac as ring_hmac};

use crate::error::CryptoError;
use crate::hmac::HmacAlgorithm;

// ── Algorithms ──────────────────────────────────────────────────────

/// Digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HashAlgorithm {
    /// SHA-1 (legacy; digest only, never HMAC).
    #[serde(rename = "SHA-1")]
    Sha1,
    /// SHA-256.
    #[serde(rename = "SHA-256")]
    Sha256,
    /// SHA-384.
    #[serde(rename = "SHA-384")]
    Sha384,
    /// SHA-512.
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, weakest first.
    pub const ALL: [Self; 4] = [Self::Sha1, Self::Sha256, Self::Sha384, Self::Sha512];

    /// Canonical name (`"SHA-256"` etc.).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Length of the lowercase hex rendering (40/64/96/128).
    #[must_use]
    pub const fn hex_len(self) -> usize {
        match self {
            Self::Sha1 => 40,
            Self::Sha256 => 64,
            Self::Sha384 => 96,
            Self::Sha512 => 128,
        }
    }

    fn to_ring_algorithm(self) -> &'static digest::Algorithm {
        match self {
            Self::Sha1 => &digest::SHA1_FOR_LEGACY_USE_ONLY,
            Self::Sha256 => &digest::SHA256,
            Self::Sha384 => &digest::SHA384,
            Self::Sha512 => &digest::SHA512,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    /// Accepts the canonical names, case-insensitively, with or without the dash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

// ── Provider seam ───────────────────────────────────────────────────

/// Platform digest/MAC primitive.
///
/// Implementations must be reentrant: one provider instance is shared by
/// every concurrent caller.
pub trait DigestProvider: Send + Sync {
    /// Hash `data` with `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Digest`] if the primitive fails.
    fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// HMAC of `data` keyed by `key` under `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Digest`] if the primitive fails.
    fn hmac(
        &self,
        algorithm: HmacAlgorithm,
        key: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;
}

/// [`DigestProvider`] backed by `ring`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingProvider;

impl DigestProvider for RingProvider {
    fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(digest::digest(algorithm.to_ring_algorithm(), data)
            .as_ref()
            .to_vec())
    }

    fn hmac(
        &self,
        algorithm: HmacAlgorithm,
        key: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let ring_algorithm = match algorithm {
            HmacAlgorithm::Sha256 => ring_hmac::HMAC_SHA256,
            HmacAlgorithm::Sha384 => ring_hmac::HMAC_SHA384,
            HmacAlgorithm::Sha512 => ring_hmac::HMAC_SHA512,
        };
        let key = ring_hmac::Key::new(ring_algorithm, key);
        Ok(ring_hmac::sign(&key, data).as_ref().to_vec())
    }
}

// ── Hashing helpers ─────────────────────────────────────────────────

/// Lowercase hex, two digits per byte.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    HEXLOWER.encode(bytes)
}

/// Digest the UTF-8 bytes of `text` and render the result as lowercase hex.
///
/// # Errors
///
/// Propagates any failure from `provider`.
pub fn compute_hash(
    provider: &dyn DigestProvider,
    text: &str,
    algorithm: HashAlgorithm,
) -> Result<String, CryptoError> {
    let raw = provider.digest(algorithm, text.as_bytes())?;
    Ok(to_hex(&raw))
}

// ── Constant-time comparison ────────────────────────────────────────

/// Constant-time byte comparison.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Every byte pair is XOR-accumulated; there is no early exit on mismatch.
///
/// The early return on length mismatch leaks only the length, which for
/// digests and MACs is public (fixed per algorithm).
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    std::hint::black_box(diff) == 0
}

/// Compare two strings (e.g. an expected and a pasted hash) in constant time.
///
/// Operates on UTF-8 bytes; same length-leak caveat as [`constant_time_eq`].
#[must_use]
pub fn secure_compare(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
