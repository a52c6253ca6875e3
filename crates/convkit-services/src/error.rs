//! Error types for `convkit-services`.

use convkit_crypto_core::CryptoError;
use thiserror::Error;

/// Errors produced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Primitive failure (delegated from crypto-core).
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The blocking worker panicked or was cancelled by runtime shutdown.
    #[error("background task failed: {0}")]
    Join(String),

    /// Configuration parsed but holds out-of-range values.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A generation request asked for something outside the allowed bounds.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
