//! Password and passphrase generation front-end.
//!
//! Requests leave any field unset to take the [`ServiceConfig`] default.
//! Generated values are never logged.

use std::sync::Arc;

use convkit_crypto_core::entropy::PasswordStrength;
use convkit_crypto_core::password::{
    self, PassphraseOptions, PassphraseSeparator, PasswordOptions,
};
use convkit_crypto_core::random::{OsRandom, RandomnessProvider};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::config::{ServiceConfig, MAX_PASSWORD_LENGTH};
use crate::error::ServiceError;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Which kind of secret to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeneratorMode {
    /// Characters drawn from a pool.
    #[default]
    Random,
    /// Diceware words.
    Passphrase,
}

/// A generation request.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    /// Generation mode (default: random).
    pub mode: GeneratorMode,

    // ── Random mode ──
    /// Password length (default: `passwordLength`).
    pub length: Option<usize>,
    /// Include lowercase letters.
    pub lowercase: Option<bool>,
    /// Include uppercase letters.
    pub uppercase: Option<bool>,
    /// Include digits.
    pub numbers: Option<bool>,
    /// Include symbols.
    pub symbols: Option<bool>,

    // ── Passphrase mode ──
    /// Number of words (1–20).
    pub word_count: Option<usize>,
    /// Joiner between tokens.
    pub separator: Option<PassphraseSeparator>,
    /// Upper-case the first letter of each word.
    pub capitalize: Option<bool>,
    /// Slot a `00`–`99` token into the phrase.
    pub include_number: Option<bool>,
}

/// A generated password or passphrase with its strength rating.
///
/// `Debug` masks the value; the value is wiped on drop.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSecret {
    /// The password or passphrase.
    pub value: String,
    /// Rating derived from the request shape, not from `value`.
    pub strength: PasswordStrength,
}

impl std::fmt::Debug for GeneratedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedSecret")
            .field("value", &"***")
            .field("strength", &self.strength)
            .finish()
    }
}

impl Drop for GeneratedSecret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Applies configured defaults and generates secrets from an injected
/// random source.
#[derive(Clone)]
pub struct SecretGenerator {
    rng: Arc<dyn RandomnessProvider>,
    config: ServiceConfig,
}

impl SecretGenerator {
    /// Generator drawing from `rng`, with `config` filling unset fields.
    #[must_use]
    pub fn new(rng: Arc<dyn RandomnessProvider>, config: ServiceConfig) -> Self {
        Self { rng, config }
    }

    /// Defaults in effect.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Generate according to `request.mode`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] for a length above
    /// [`MAX_PASSWORD_LENGTH`], or [`ServiceError::Crypto`] for an empty
    /// pool, an out-of-range word count, or a random source failure.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GeneratedSecret, ServiceError> {
        match request.mode {
            GeneratorMode::Random => self.password(request),
            GeneratorMode::Passphrase => self.passphrase(request),
        }
    }

    fn password(&self, request: &GenerateRequest) -> Result<GeneratedSecret, ServiceError> {
        let defaults = &self.config.password_options;
        let options = PasswordOptions {
            lowercase: request.lowercase.unwrap_or(defaults.lowercase),
            uppercase: request.uppercase.unwrap_or(defaults.uppercase),
            numbers: request.numbers.unwrap_or(defaults.numbers),
            symbols: request.symbols.unwrap_or(defaults.symbols),
        };
        let length = request.length.unwrap_or(self.config.password_length);
        if length > MAX_PASSWORD_LENGTH {
            return Err(ServiceError::InvalidRequest(format!(
                "length must be at most {MAX_PASSWORD_LENGTH}, got {length}"
            )));
        }

        let pool = password::build_char_pool(&options);
        let value = password::generate_password(self.rng.as_ref(), length, &pool)?;
        let strength = PasswordStrength::for_password(length, pool.chars().count());
        tracing::debug!(length, pool_size = pool.len(), bits = strength.bits, "generated password");
        Ok(GeneratedSecret { value, strength })
    }

    fn passphrase(&self, request: &GenerateRequest) -> Result<GeneratedSecret, ServiceError> {
        let defaults = &self.config.passphrase;
        let options = PassphraseOptions {
            word_count: request.word_count.unwrap_or(defaults.word_count),
            separator: request.separator.unwrap_or(defaults.separator),
            capitalize: request.capitalize.unwrap_or(defaults.capitalize),
            include_number: request.include_number.unwrap_or(defaults.include_number),
        };

        let value = password::generate_passphrase(self.rng.as_ref(), &options)?;
        let strength = PasswordStrength::for_passphrase(options.word_count, options.include_number);
        tracing::debug!(
            word_count = options.word_count,
            include_number = options.include_number,
            bits = strength.bits,
            "generated passphrase"
        );
        Ok(GeneratedSecret { value, strength })
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::new(Arc::new(OsRandom), ServiceConfig::default())
    }
}

impl std::fmt::Debug for SecretGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
