//! JWT inspection and HS-token encoding.

use std::sync::Arc;

use convkit_crypto_core::base64url;
use convkit_crypto_core::clock::{Clock, SystemClock};
use convkit_crypto_core::digest::{DigestProvider, RingProvider};
use convkit_crypto_core::hmac::HmacAlgorithm;
use convkit_crypto_core::jwt::{expiry_info, parse_parts, ExpiryInfo, JwtToken};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::signer::HmacSigner;

/// Everything the inspector learned about one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtReport {
    /// Decoded segments.
    pub token: JwtToken,
    /// State of the `exp` claim at inspection time.
    pub expiry: ExpiryInfo,
    /// HMAC algorithm named by the header, if it is `HS256`/`HS384`/`HS512`.
    pub algorithm: Option<HmacAlgorithm>,
    /// `None` when no secret was supplied. A header naming an algorithm we
    /// cannot verify counts as invalid.
    pub signature_valid: Option<bool>,
}

/// Decodes tokens, reports expiry against an injected clock, and checks or
/// produces HMAC signatures.
#[derive(Clone)]
pub struct JwtInspector {
    signer: HmacSigner,
    clock: Arc<dyn Clock>,
}

impl JwtInspector {
    /// Inspector over `provider`, reading the time from `clock`.
    #[must_use]
    pub fn new(provider: Arc<dyn DigestProvider>, clock: Arc<dyn Clock>) -> Self {
        Self::with_config(provider, clock, &ServiceConfig::default())
    }

    /// As [`Self::new`], signing with `config.hmac_algorithm` in
    /// [`Self::encode_default`].
    #[must_use]
    pub fn with_config(
        provider: Arc<dyn DigestProvider>,
        clock: Arc<dyn Clock>,
        config: &ServiceConfig,
    ) -> Self {
        Self {
            signer: HmacSigner::with_config(provider, config),
            clock,
        }
    }

    /// Parse `token`; with a `secret`, also verify its signature.
    ///
    /// Returns `None` for anything that is not three non-empty
    /// dot-separated segments.
    pub async fn inspect(&self, token: &str, secret: Option<&[u8]>) -> Option<JwtReport> {
        let Some(token) = parse_parts(token) else {
            tracing::debug!("input is not a three-segment token");
            return None;
        };

        let payload = token.payload_json().unwrap_or(Value::Null);
        let expiry = expiry_info(&payload, self.clock.now_millis());
        let algorithm = token.algorithm();

        let signature_valid = match (secret, algorithm) {
            (None, _) => None,
            (Some(_), None) => Some(false),
            (Some(secret), Some(algorithm)) => Some(
                self.signer
                    .verify(&token.signing_input(), &token.signature, secret, algorithm)
                    .await,
            ),
        };

        tracing::debug!(
            algorithm = algorithm.map(HmacAlgorithm::jwt_name),
            expired = expiry.is_expired,
            ?signature_valid,
            "inspected token"
        );

        Some(JwtReport {
            token,
            expiry,
            algorithm,
            signature_valid,
        })
    }

    /// Build and sign a compact token carrying `claims`.
    ///
    /// The header is `{"alg": "<HS…>", "typ": "JWT"}`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Json`] if `claims` cannot be serialized, or
    /// any error from [`HmacSigner::sign`].
    pub async fn encode(
        &self,
        claims: &Value,
        secret: &[u8],
        algorithm: HmacAlgorithm,
    ) -> Result<String, ServiceError> {
        let header = json!({ "alg": algorithm.jwt_name(), "typ": "JWT" });
        let signing_input = format!(
            "{}.{}",
            base64url::encode(serde_json::to_string(&header)?.as_bytes()),
            base64url::encode(serde_json::to_string(claims)?.as_bytes()),
        );
        let signature = self.signer.sign(&signing_input, secret, algorithm).await?;
        Ok(format!("{signing_input}.{signature}"))
    }

    /// [`Self::encode`] with the configured default algorithm.
    ///
    /// # Errors
    ///
    /// See [`Self::encode`].
    pub async fn encode_default(
        &self,
        claims: &Value,
        secret: &[u8],
    ) -> Result<String, ServiceError> {
        self.encode(claims, secret, self.signer.default_algorithm())
            .await
    }
}

impl Default for JwtInspector {
    fn default() -> Self {
        Self::new(Arc::new(RingProvider), Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for JwtInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtInspector").finish_non_exhaustive()
    }
}
