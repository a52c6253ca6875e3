//! Async HMAC signing and verification.
//!
//! Secrets are copied into [`Zeroizing`] buffers for the trip to the blocking
//! pool and wiped when the worker finishes.

use std::sync::Arc;

use convkit_crypto_core::digest::{DigestProvider, RingProvider};
use convkit_crypto_core::hmac::{self, HmacAlgorithm};
use zeroize::Zeroizing;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::task::run_blocking;

/// base64url HMAC tags over text.
#[derive(Clone)]
pub struct HmacSigner {
    provider: Arc<dyn DigestProvider>,
    default_algorithm: HmacAlgorithm,
}

impl HmacSigner {
    /// Signer over `provider` with the stock defaults (HMAC-SHA256).
    #[must_use]
    pub fn new(provider: Arc<dyn DigestProvider>) -> Self {
        Self::with_config(provider, &ServiceConfig::default())
    }

    /// Signer over `provider` whose default MAC is `config.hmac_algorithm`.
    #[must_use]
    pub fn with_config(provider: Arc<dyn DigestProvider>, config: &ServiceConfig) -> Self {
        Self {
            provider,
            default_algorithm: config.hmac_algorithm,
        }
    }

    /// MAC used by [`Self::sign_default`] and [`Self::verify_default`].
    #[must_use]
    pub const fn default_algorithm(&self) -> HmacAlgorithm {
        self.default_algorithm
    }

    /// MAC `data` under `secret` and return the unpadded base64url tag.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Crypto`] if the provider fails and
    /// [`ServiceError::Join`] if the worker task dies.
    pub async fn sign(
        &self,
        data: &str,
        secret: &[u8],
        algorithm: HmacAlgorithm,
    ) -> Result<String, ServiceError> {
        tracing::debug!(%algorithm, data_len = data.len(), "signing");
        let provider = Arc::clone(&self.provider);
        let data = data.to_owned();
        let secret = Zeroizing::new(secret.to_vec());
        run_blocking(move || hmac::sign(provider.as_ref(), &data, &secret, algorithm)).await
    }

    /// [`Self::sign`] with the configured default algorithm.
    ///
    /// # Errors
    ///
    /// See [`Self::sign`].
    pub async fn sign_default(&self, data: &str, secret: &[u8]) -> Result<String, ServiceError> {
        self.sign(data, secret, self.default_algorithm).await
    }

    /// [`Self::verify`] with the configured default algorithm.
    pub async fn verify_default(&self, data: &str, signature: &str, secret: &[u8]) -> bool {
        self.verify(data, signature, secret, self.default_algorithm).await
    }

    /// Check `signature` over `data`. Never fails: a bad signature, a
    /// provider error, and a dead worker all read as `false`.
    pub async fn verify(
        &self,
        data: &str,
        signature: &str,
        secret: &[u8],
        algorithm: HmacAlgorithm,
    ) -> bool {
        let provider = Arc::clone(&self.provider);
        let data = data.to_owned();
        let signature = signature.to_owned();
        let secret = Zeroizing::new(secret.to_vec());
        let outcome = run_blocking(move || {
            Ok(hmac::verify(
                provider.as_ref(),
                &data,
                &signature,
                &secret,
                algorithm,
            ))
        })
        .await;

        match outcome {
            Ok(valid) => {
                tracing::debug!(%algorithm, valid, "verified signature");
                valid
            }
            Err(e) => {
                tracing::warn!(%algorithm, "signature check aborted: {e}");
                false
            }
        }
    }
}

impl Default for HmacSigner {
    fn default() -> Self {
        Self::new(Arc::new(RingProvider))
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("default_algorithm", &self.default_algorithm)
            .finish_non_exhaustive()
    }
}
