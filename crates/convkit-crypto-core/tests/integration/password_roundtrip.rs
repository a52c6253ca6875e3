//! Generated secrets agree with their strength estimates.

use std::sync::atomic::{AtomicU32, Ordering};

use convkit_crypto_core::entropy::{passphrase_entropy, password_entropy, PasswordStrength};
use convkit_crypto_core::error::CryptoError;
use convkit_crypto_core::password::{
    build_char_pool, generate_passphrase, generate_random_password, wordlist, PassphraseOptions,
    PassphraseSeparator, PasswordOptions,
};
use convkit_crypto_core::random::{OsRandom, RandomnessProvider};

/// Counts up from zero: every `next_below(max)` returns `n % max` for the
/// n-th draw, which makes generator output predictable.
struct Counter(AtomicU32);

impl RandomnessProvider for Counter {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        let n = self.0.fetch_add(1, Ordering::SeqCst);
        dest.copy_from_slice(&n.to_le_bytes()[..dest.len()]);
        Ok(())
    }

    fn next_below(&self, max: u32) -> Result<u32, CryptoError> {
        if max == 0 {
            return Ok(0);
        }
        Ok(self.0.fetch_add(1, Ordering::SeqCst) % max)
    }
}

#[test]
fn full_pool_password_is_very_strong() {
    let options = PasswordOptions::default();
    let pool = build_char_pool(&options);
    assert_eq!(pool.chars().count(), 26 + 26 + 10 + 29);

    let pw = generate_random_password(&OsRandom, 20, &options).unwrap();
    let strength = PasswordStrength::for_password(pw.chars().count(), pool.chars().count());
    assert_eq!(strength.bits, password_entropy(20, 91));
    assert_eq!(strength.label.as_str(), "Very Strong");
    assert_eq!(strength.percentage, 100);
}

#[test]
fn scripted_rng_makes_password_deterministic() {
    let rng = Counter(AtomicU32::new(0));
    let pw = generate_random_password(
        &rng,
        5,
        &PasswordOptions {
            lowercase: true,
            uppercase: false,
            numbers: false,
            symbols: false,
        },
    )
    .unwrap();
    assert_eq!(pw, "abcde");
}

#[test]
fn scripted_rng_places_number_in_chosen_slot() {
    // Draws: word 0, word 1, number 2, slot 3 % 3 = 0.
    let rng = Counter(AtomicU32::new(0));
    let options = PassphraseOptions {
        word_count: 2,
        separator: PassphraseSeparator::Space,
        capitalize: true,
        include_number: true,
    };
    let pp = generate_passphrase(&rng, &options).unwrap();
    let list = wordlist::diceware();
    let expected = format!(
        "02 {} {}",
        capitalize(list[0]),
        capitalize(list[1])
    );
    assert_eq!(pp, expected);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let first = chars.next().unwrap().to_ascii_uppercase();
    format!("{first}{}", chars.as_str())
}

#[test]
fn passphrase_strength_matches_word_count() {
    let options = PassphraseOptions {
        word_count: 6,
        include_number: true,
        ..PassphraseOptions::default()
    };
    let pp = generate_passphrase(&OsRandom, &options).unwrap();
    assert_eq!(pp.split('-').count(), 7);

    let strength = PasswordStrength::for_passphrase(6, true);
    assert_eq!(strength.bits, passphrase_entropy(6, true));
    assert_eq!(strength.bits, 84);
    assert_eq!(strength.label.as_str(), "Strong");
}
