//! Error types for `convkit-crypto-core`.

use thiserror::Error;

/// Errors produced by the cryptographic and encoding primitives.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS random source failed to produce bytes.
    #[error("random source failure: {0}")]
    Random(String),

    /// Password/passphrase generation failure (invalid parameters).
    #[error("password generation error: {0}")]
    PasswordGeneration(String),

    /// Algorithm name not recognised, or not valid for the requested operation.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The digest or MAC primitive itself failed.
    #[error("digest error: {0}")]
    Digest(String),

    /// Base64url or UTF-8 decoding failure.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A VietQR TLV value does not fit its two-digit length prefix.
    #[error("VietQR field {tag} is {len} characters long (max 99)")]
    VietQrField {
        /// Two-digit EMV tag of the offending field.
        tag: String,
        /// Character count of the rejected value.
        len: usize,
    },

    /// Malformed VietQR payload (decoding side).
    #[error("VietQR payload error: {0}")]
    VietQrPayload(String),
}
