//! Entropy estimation and strength rating for generated secrets.
//!
//! Pure math: bits of entropy from pool size and length (or word count),
//! a brute-force crack-time estimate at 10^10 guesses/second, and a
//! five-step strength scale topping out at 128 bits.

use std::fmt;

use crate::password::wordlist::WORDLIST_SIZE;

/// Attacker guess rate assumed by [`estimate_crack_time`].
pub const GUESSES_PER_SECOND: f64 = 1e10;

/// Entropy at which [`strength_percentage`] reaches 100.
pub const FULL_STRENGTH_BITS: u32 = 128;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 365.0 * DAY;

/// Entropy of `length` characters drawn uniformly from `pool_size` symbols.
///
/// `floor(length * log2(pool_size))`, or `0` for an empty pool.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn password_entropy(length: usize, pool_size: usize) -> u32 {
    if pool_size == 0 {
        return 0;
    }
    (length as f64 * (pool_size as f64).log2()).floor() as u32
}

/// Entropy of a diceware passphrase, plus `log2(100)` for the optional number.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn passphrase_entropy(word_count: usize, include_number: bool) -> u32 {
    let words = word_count as f64 * (WORDLIST_SIZE as f64).log2();
    let number = if include_number { 100f64.log2() } else { 0.0 };
    (words + number).floor() as u32
}

/// Average-case time to brute-force `bits` of entropy, as human text.
///
/// Half the keyspace at [`GUESSES_PER_SECOND`], bucketed from "Instant" up to
/// scientific notation in billions of years.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_crack_time(bits: u32) -> String {
    let seconds = 2f64.powf(f64::from(bits)) / GUESSES_PER_SECOND / 2.0;

    if seconds < 1.0 {
        return "Instant".to_owned();
    }
    if seconds < MINUTE {
        return plural(seconds as u64, "second");
    }
    if seconds < HOUR {
        return plural((seconds / MINUTE) as u64, "minute");
    }
    if seconds < DAY {
        return plural((seconds / HOUR) as u64, "hour");
    }
    if seconds < YEAR {
        return plural((seconds / DAY) as u64, "day");
    }

    let years = seconds / YEAR;
    if years < 1e3 {
        return plural(years as u64, "year");
    }
    if years < 1e6 {
        return format!("{} thousand years", (years / 1e3) as u64);
    }
    if years < 1e9 {
        return format!("{} million years", (years / 1e6) as u64);
    }
    format!("{} billion years", billions_scientific(bits))
}

/// Strength rating for a given entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum StrengthLabel {
    /// Below 28 bits.
    #[serde(rename = "Very Weak")]
    VeryWeak,
    /// 28–35 bits.
    Weak,
    /// 36–59 bits.
    Moderate,
    /// 60–127 bits.
    Strong,
    /// 128 bits and above.
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    /// Display text of this label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map entropy to a [`StrengthLabel`].
#[must_use]
pub const fn strength_label(bits: u32) -> StrengthLabel {
    match bits {
        0..=27 => StrengthLabel::VeryWeak,
        28..=35 => StrengthLabel::Weak,
        36..=59 => StrengthLabel::Moderate,
        60..=127 => StrengthLabel::Strong,
        _ => StrengthLabel::VeryStrong,
    }
}

/// Entropy as a share of [`FULL_STRENGTH_BITS`], rounded and capped at 100.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn strength_percentage(bits: u32) -> u8 {
    let pct = (f64::from(bits) / f64::from(FULL_STRENGTH_BITS) * 100.0).round();
    pct.min(100.0) as u8
}

/// Everything a strength meter shows, computed from one entropy figure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrength {
    /// Entropy in whole bits.
    pub bits: u32,
    /// Five-step rating of `bits`.
    pub label: StrengthLabel,
    /// Meter fill, 0–100.
    pub percentage: u8,
    /// Average brute-force time as human text.
    pub crack_time: String,
}

impl PasswordStrength {
    /// Rate an already-computed entropy.
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        Self {
            bits,
            label: strength_label(bits),
            percentage: strength_percentage(bits),
            crack_time: estimate_crack_time(bits),
        }
    }

    /// Strength of a character password.
    #[must_use]
    pub fn for_password(length: usize, pool_size: usize) -> Self {
        Self::from_bits(password_entropy(length, pool_size))
    }

    /// Strength of a diceware passphrase.
    #[must_use]
    pub fn for_passphrase(word_count: usize, include_number: bool) -> Self {
        Self::from_bits(passphrase_entropy(word_count, include_number))
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// `2^bits / 2e10 / YEAR / 1e9` as `d.de+<exp>` (one decimal, signed
/// exponent), computed in log space so
/// entropies past `f64` range still format.
#[allow(clippy::cast_possible_truncation)]
fn billions_scientific(bits: u32) -> String {
    let log10 = f64::from(bits).mul_add(
        std::f64::consts::LOG10_2,
        -(2.0 * GUESSES_PER_SECOND).log10() - YEAR.log10() - 9.0,
    );
    let mut exponent = log10.floor();
    let mut mantissa = (10f64.powf(log10 - exponent) * 10.0).round() / 10.0;
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1.0;
    }
    format!("{mantissa:.1}e{:+}", exponent as i64)
}
