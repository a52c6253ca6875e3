//! Cryptographic password and passphrase generation.
//!
//! Provides two generation modes:
//! - [`generate_password`] — characters drawn uniformly from a pool built by
//!   [`build_char_pool`]
//! - [`generate_passphrase`] — words drawn uniformly from the 7776-word
//!   diceware list, with an optional two-digit number slotted in
//!
//! All randomness comes from the caller's [`RandomnessProvider`].

pub mod wordlist;

use crate::error::CryptoError;
use crate::random::RandomnessProvider;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 20;

/// Minimum allowed passphrase word count.
pub const MIN_WORD_COUNT: usize = 1;

/// Maximum allowed passphrase word count.
pub const MAX_WORD_COUNT: usize = 20;

/// Default passphrase word count.
pub const DEFAULT_WORD_COUNT: usize = 5;

// Character sets, in pool order.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:',.<>?/~";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which character classes make up a password pool.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordOptions {
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include digits (0-9).
    pub numbers: bool,
    /// Include symbols (!@#$%^&*...).
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

/// Separator between words in a passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassphraseSeparator {
    /// Hyphen: `word-word-word`
    #[default]
    Dash,
    /// Space: `word word word`
    Space,
    /// Dot: `word.word.word`
    Dot,
    /// Underscore: `word_word_word`
    Underscore,
    /// No separator: `wordwordword`
    None,
}

impl PassphraseSeparator {
    /// Returns the string representation of this separator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dash => "-",
            Self::Space => " ",
            Self::Dot => ".",
            Self::Underscore => "_",
            Self::None => "",
        }
    }
}

/// Passphrase shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassphraseOptions {
    /// Number of words drawn from the list.
    pub word_count: usize,
    /// Joiner placed between tokens.
    pub separator: PassphraseSeparator,
    /// Upper-case the first letter of each word.
    pub capitalize: bool,
    /// Insert one `00`–`99` token at a random position.
    pub include_number: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            separator: PassphraseSeparator::Dash,
            capitalize: false,
            include_number: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Concatenate the enabled classes in the fixed order
/// lowercase → uppercase → numbers → symbols.
///
/// No classes enabled yields an empty pool.
#[must_use]
pub fn build_char_pool(options: &PasswordOptions) -> String {
    let classes = [
        (options.lowercase, LOWERCASE),
        (options.uppercase, UPPERCASE),
        (options.numbers, NUMBERS),
        (options.symbols, SYMBOLS),
    ];
    classes
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, chars)| *chars)
        .collect()
}

/// Draw `length` characters uniformly (with replacement) from `pool`.
///
/// `length == 0` yields an empty string whatever the pool.
///
/// # Errors
///
/// Returns [`CryptoError::PasswordGeneration`] if `length > 0` and `pool` is
/// empty, or [`CryptoError::Random`] if the random source fails.
pub fn generate_password(
    rng: &dyn RandomnessProvider,
    length: usize,
    pool: &str,
) -> Result<String, CryptoError> {
    if length == 0 {
        return Ok(String::new());
    }
    let pool: Vec<char> = pool.chars().collect();
    if pool.is_empty() {
        return Err(CryptoError::PasswordGeneration(
            "character pool is empty: enable at least one character class".to_owned(),
        ));
    }

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        password.push(pool[rng.index_below(pool.len())?]);
    }
    Ok(password)
}

/// Build the pool for `options` and draw a password of `length` from it.
///
/// # Errors
///
/// See [`generate_password`].
pub fn generate_random_password(
    rng: &dyn RandomnessProvider,
    length: usize,
    options: &PasswordOptions,
) -> Result<String, CryptoError> {
    generate_password(rng, length, &build_char_pool(options))
}

/// Generate a passphrase from the diceware wordlist.
///
/// Words are drawn first; if `include_number` is set, a zero-padded number in
/// `00..=99` is then inserted at one of the `word_count + 1` slots (before the
/// first word, between any two, or after the last).
///
/// # Errors
///
/// Returns [`CryptoError::PasswordGeneration`] if `word_count` is outside
/// [`MIN_WORD_COUNT`]..=[`MAX_WORD_COUNT`], or [`CryptoError::Random`] if the
/// random source fails.
pub fn generate_passphrase(
    rng: &dyn RandomnessProvider,
    options: &PassphraseOptions,
) -> Result<String, CryptoError> {
    let word_count = options.word_count;
    if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&word_count) {
        return Err(CryptoError::PasswordGeneration(format!(
            "word count must be between {MIN_WORD_COUNT} and {MAX_WORD_COUNT}, got {word_count}"
        )));
    }

    let list = wordlist::diceware();
    let mut tokens: Vec<String> = Vec::with_capacity(word_count.saturating_add(1));
    for _ in 0..word_count {
        let word = list[rng.index_below(list.len())?];
        tokens.push(if options.capitalize {
            capitalize(word)
        } else {
            word.to_owned()
        });
    }

    if options.include_number {
        let number = rng.next_below(100)?;
        let slot = rng.index_below(tokens.len().saturating_add(1))?;
        tokens.insert(slot, format!("{number:02}"));
    }

    Ok(tokens.join(options.separator.as_str()))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().collect::<String>() + chars.as_str()
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
