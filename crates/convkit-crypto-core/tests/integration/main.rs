#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! End-to-end flows across modules: generate → rate, sign → parse → verify,
//! build → decode → checksum.

mod jwt_roundtrip;
mod password_roundtrip;
