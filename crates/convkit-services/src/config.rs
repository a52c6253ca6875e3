//! Service defaults, read from a JSON file.
//!
//! Every field is optional in the file; anything missing takes its default.
//! The file is only ever read.

use std::fs;
use std::path::Path;

use convkit_crypto_core::hmac::HmacAlgorithm;
use convkit_crypto_core::password::{
    PassphraseOptions, PasswordOptions, DEFAULT_PASSWORD_LENGTH, MAX_WORD_COUNT, MIN_WORD_COUNT,
};
use convkit_crypto_core::HashAlgorithm;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Longest password the generator front-end will produce.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Defaults applied when a request leaves a field unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    /// Character count for random passwords (1–128).
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Character classes for random passwords.
    #[serde(default)]
    pub password_options: PasswordOptions,

    /// Shape of generated passphrases.
    #[serde(default)]
    pub passphrase: PassphraseOptions,

    /// Digest used when a hash request names none.
    #[serde(default = "default_hash_algorithm")]
    pub hash_algorithm: HashAlgorithm,

    /// MAC used when a signing request names none.
    #[serde(default = "default_hmac_algorithm")]
    pub hmac_algorithm: HmacAlgorithm,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            password_length: default_password_length(),
            password_options: PasswordOptions::default(),
            passphrase: PassphraseOptions::default(),
            hash_algorithm: default_hash_algorithm(),
            hmac_algorithm: default_hmac_algorithm(),
        }
    }
}

const fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}
const fn default_hash_algorithm() -> HashAlgorithm {
    HashAlgorithm::Sha256
}
const fn default_hmac_algorithm() -> HmacAlgorithm {
    HmacAlgorithm::Sha256
}

impl ServiceConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Json`] for malformed JSON and
    /// [`ServiceError::Config`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to [`Default::default()`] when the file
    /// is missing, unreadable, or invalid.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %path.display(), "config not readable, using defaults: {e}");
                return Self::default();
            }
        };
        Self::from_json(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "config rejected, using defaults: {e}");
            Self::default()
        })
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if !(1..=MAX_PASSWORD_LENGTH).contains(&self.password_length) {
            return Err(ServiceError::Config(format!(
                "passwordLength must be between 1 and {MAX_PASSWORD_LENGTH}, got {}",
                self.password_length
            )));
        }
        let o = &self.password_options;
        if !(o.lowercase || o.uppercase || o.numbers || o.symbols) {
            return Err(ServiceError::Config(
                "passwordOptions must enable at least one character class".to_owned(),
            ));
        }
        let words = self.passphrase.word_count;
        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&words) {
            return Err(ServiceError::Config(format!(
                "passphrase.wordCount must be between {MIN_WORD_COUNT} and {MAX_WORD_COUNT}, got {words}"
            )));
        }
        Ok(())
    }
}
