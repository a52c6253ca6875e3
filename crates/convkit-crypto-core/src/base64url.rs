//! URL-safe base64 without padding (RFC 4648 §5), as used by JWT segments.
//!
//! [`encode`]/[`decode`] go through the standard padded alphabet so the
//! substitution and re-padding steps are explicit. [`decode_lenient`] is for
//! display only: it tolerates a dangling final character and non-zero
//! trailing bits the way browser `atob` does.

use std::sync::OnceLock;

use data_encoding::{Encoding, Specification, BASE64};

use crate::error::CryptoError;

const URL_SAFE_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

static LENIENT: OnceLock<Encoding> = OnceLock::new();

/// Encode bytes as unpadded base64url.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    BASE64
        .encode(bytes)
        .chars()
        .filter(|c| *c != '=')
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Decode base64url with 0, 1, or 2 padding characters missing.
///
/// # Errors
///
/// Returns [`CryptoError::Encoding`] if `input` is not valid base64url.
// `len % 4` is in 0..4, so neither subtraction can underflow.
#[allow(clippy::arithmetic_side_effects)]
pub fn decode(input: &str) -> Result<Vec<u8>, CryptoError> {
    let mut standard: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let padding = (4 - standard.len() % 4) % 4;
    standard.extend(std::iter::repeat('=').take(padding));

    BASE64
        .decode(standard.as_bytes())
        .map_err(|e| CryptoError::Encoding(format!("invalid base64url: {e}")))
}

/// Best-effort decode for display: drops a lone trailing sextet and ignores
/// non-canonical trailing bits instead of failing.
///
/// # Errors
///
/// Returns [`CryptoError::Encoding`] if `input` contains characters outside the
/// base64url alphabet.
#[allow(clippy::arithmetic_side_effects)]
pub fn decode_lenient(input: &str) -> Result<Vec<u8>, CryptoError> {
    if !input.is_ascii() {
        return Err(CryptoError::Encoding(
            "invalid base64url: non-ASCII input".to_owned(),
        ));
    }
    let encoding = lenient_encoding()?;
    let trimmed = input.trim_end_matches('=');
    let usable = if trimmed.len() % 4 == 1 {
        &trimmed[..trimmed.len().saturating_sub(1)]
    } else {
        trimmed
    };
    encoding
        .decode(usable.as_bytes())
        .map_err(|e| CryptoError::Encoding(format!("invalid base64url: {e}")))
}

fn lenient_encoding() -> Result<&'static Encoding, CryptoError> {
    if let Some(encoding) = LENIENT.get() {
        return Ok(encoding);
    }
    let mut spec = Specification::new();
    spec.symbols.push_str(URL_SAFE_SYMBOLS);
    spec.check_trailing_bits = false;
    let encoding = spec
        .encoding()
        .map_err(|e| CryptoError::Encoding(format!("base64url specification: {e}")))?;
    Ok(LENIENT.get_or_init(|| encoding))
}
