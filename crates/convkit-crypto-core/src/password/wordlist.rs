//! Diceware wordlist loading.
//!
//! The 7776-word list (6^5, one word per five dice rolls) is embedded at
//! compile time via `include_str!` and parsed once on first access using
//! `OnceLock`.

use std::sync::OnceLock;

/// Number of words in the diceware wordlist.
pub const WORDLIST_SIZE: usize = 7776;

const DICEWARE_RAW: &str = include_str!("wordlists/diceware.txt");

static DICEWARE_LOCK: OnceLock<Box<[&'static str]>> = OnceLock::new();

/// Returns the parsed diceware wordlist (7776 words).
///
/// # Panics
///
/// Panics if the embedded wordlist does not contain exactly [`WORDLIST_SIZE`] words.
#[must_use]
pub fn diceware() -> &'static [&'static str] {
    DICEWARE_LOCK.get_or_init(|| {
        let words: Vec<&'static str> = DICEWARE_RAW.lines().collect();
        assert!(
            words.len() == WORDLIST_SIZE,
            "diceware wordlist must contain exactly {WORDLIST_SIZE} words, got {}",
            words.len()
        );
        words.into_boxed_slice()
    })
}
