//! Offloading of digest work onto tokio's blocking pool.

use convkit_crypto_core::CryptoError;

use crate::error::ServiceError;

/// Run a synchronous primitive on the blocking pool and await its result.
///
/// There is no timeout or cancellation: the primitive runs to completion.
pub(crate) async fn run_blocking<T, F>(job: F) -> Result<T, ServiceError>
where
    F: FnOnce() -> Result<T, CryptoError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ServiceError::Join(e.to_string()))?
        .map_err(ServiceError::from)
}
