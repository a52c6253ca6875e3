//! `convkit-services` — Async service layer over `convkit-crypto-core`.
//!
//! Digest and HMAC work runs on tokio's blocking pool; everything else is
//! synchronous. Emits `tracing` events but never installs a subscriber.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;
pub mod generator;
pub mod hash;
pub mod jwt;
pub mod signer;

mod task;

pub use config::{ServiceConfig, MAX_PASSWORD_LENGTH};
pub use error::ServiceError;
pub use generator::{GenerateRequest, GeneratedSecret, GeneratorMode, SecretGenerator};
pub use hash::HashService;
pub use jwt::{JwtInspector, JwtReport};
pub use signer::HmacSigner;
