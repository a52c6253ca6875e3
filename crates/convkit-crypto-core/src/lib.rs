//! `convkit-crypto-core` — Synchronous cryptographic and encoding primitives
//! for the convkit converter catalog.
//!
//! Zero async, zero logging. Randomness, digests, and the clock are injected
//! through [`RandomnessProvider`], [`DigestProvider`], and [`Clock`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod random;

pub mod password;

pub mod entropy;

pub mod digest;
pub mod hmac;

pub mod base64url;

pub mod clock;
pub mod jwt;

pub mod crc16;
pub mod vietqr;

pub use clock::{Clock, FixedClock, SystemClock};
pub use digest::{
    compute_hash, constant_time_eq, secure_compare, to_hex, DigestProvider, HashAlgorithm,
    RingProvider,
};
pub use entropy::{
    estimate_crack_time, passphrase_entropy, password_entropy, strength_label,
    strength_percentage, PasswordStrength, StrengthLabel,
};
pub use error::CryptoError;
pub use hmac::HmacAlgorithm;
pub use jwt::{expiry_info, parse_parts, ExpiryInfo, JwtToken};
pub use password::{
    build_char_pool, generate_passphrase, generate_password, generate_random_password,
    PassphraseOptions, PassphraseSeparator, PasswordOptions, DEFAULT_PASSWORD_LENGTH,
    DEFAULT_WORD_COUNT,
};
pub use random::{OsRandom, RandomnessProvider};
pub use vietqr::{generate_vietqr_content, VietQrParams};
