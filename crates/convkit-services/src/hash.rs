//! Async hashing front-end.

use std::sync::Arc;

use convkit_crypto_core::digest::{self, DigestProvider, HashAlgorithm, RingProvider};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::task::run_blocking;

/// Hex digests of text, computed off the async executor.
///
/// Cheap to clone; clones share the provider.
#[derive(Clone)]
pub struct HashService {
    provider: Arc<dyn DigestProvider>,
    default_algorithm: HashAlgorithm,
}

impl HashService {
    /// Service over `provider` with the stock defaults (SHA-256).
    #[must_use]
    pub fn new(provider: Arc<dyn DigestProvider>) -> Self {
        Self::with_config(provider, &ServiceConfig::default())
    }

    /// Service over `provider` whose default digest is
    /// `config.hash_algorithm`.
    #[must_use]
    pub fn with_config(provider: Arc<dyn DigestProvider>, config: &ServiceConfig) -> Self {
        Self {
            provider,
            default_algorithm: config.hash_algorithm,
        }
    }

    /// Digest used by [`Self::compute_hash_default`].
    #[must_use]
    pub const fn default_algorithm(&self) -> HashAlgorithm {
        self.default_algorithm
    }

    /// Digest the UTF-8 bytes of `text` and return lowercase hex
    /// ([`HashAlgorithm::hex_len`] characters).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Crypto`] if the provider fails and
    /// [`ServiceError::Join`] if the worker task dies.
    pub async fn compute_hash(
        &self,
        text: &str,
        algorithm: HashAlgorithm,
    ) -> Result<String, ServiceError> {
        tracing::debug!(%algorithm, input_len = text.len(), "computing digest");
        let provider = Arc::clone(&self.provider);
        let text = text.to_owned();
        run_blocking(move || digest::compute_hash(provider.as_ref(), &text, algorithm)).await
    }

    /// [`Self::compute_hash`] with the configured default algorithm.
    ///
    /// # Errors
    ///
    /// See [`Self::compute_hash`].
    pub async fn compute_hash_default(&self, text: &str) -> Result<String, ServiceError> {
        self.compute_hash(text, self.default_algorithm).await
    }

    /// Every supported digest of `text`, in [`HashAlgorithm::ALL`] order.
    ///
    /// # Errors
    ///
    /// Fails on the first algorithm that fails.
    pub async fn compute_all(
        &self,
        text: &str,
    ) -> Result<Vec<(HashAlgorithm, String)>, ServiceError> {
        let mut digests = Vec::with_capacity(HashAlgorithm::ALL.len());
        for algorithm in HashAlgorithm::ALL {
            digests.push((algorithm, self.compute_hash(text, algorithm).await?));
        }
        Ok(digests)
    }

    /// Constant-time string equality, e.g. a computed hash against a pasted
    /// one. Differing lengths return `false` immediately.
    #[must_use]
    pub fn secure_compare(a: &str, b: &str) -> bool {
        digest::secure_compare(a, b)
    }
}

impl Default for HashService {
    fn default() -> Self {
        Self::new(Arc::new(RingProvider))
    }
}

impl std::fmt::Debug for HashService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashService")
            .field("default_algorithm", &self.default_algorithm)
            .finish_non_exhaustive()
    }
}
