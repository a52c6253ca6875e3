//! JWT splitting, segment decoding, and expiry reporting.
//!
//! Parsing here is structural only: the header and payload are decoded to
//! text but not validated as JSON, and the signature is kept raw so it can be
//! checked later with [`crate::hmac::verify`] over [`JwtToken::signing_input`].

use serde_json::Value;

use crate::base64url;
use crate::hmac::HmacAlgorithm;

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;

/// A token split into its three segments.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtToken {
    /// Decoded header text (normally JSON).
    pub header: String,
    /// Decoded payload text (normally JSON).
    pub payload: String,
    /// Signature segment, still base64url.
    pub signature: String,
    /// Header segment as it appeared in the token.
    pub raw_header: String,
    /// Payload segment as it appeared in the token.
    pub raw_payload: String,
}

impl JwtToken {
    /// `<raw header>.<raw payload>`: the bytes the signature covers.
    #[must_use]
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.raw_header, self.raw_payload)
    }

    /// Header parsed as JSON, if it is JSON.
    #[must_use]
    pub fn header_json(&self) -> Option<Value> {
        serde_json::from_str(&self.header).ok()
    }

    /// Payload parsed as JSON, if it is JSON.
    #[must_use]
    pub fn payload_json(&self) -> Option<Value> {
        serde_json::from_str(&self.payload).ok()
    }

    /// HMAC algorithm named by the header's `alg`, if it is one we support.
    #[must_use]
    pub fn algorithm(&self) -> Option<HmacAlgorithm> {
        header_algorithm(&self.header)
    }
}

/// Split `token` on `.` and decode the header and payload.
///
/// Returns `None` unless there are exactly three non-empty segments whose
/// first two use the base64url alphabet. Decoding is lenient (see
/// [`base64url::decode_lenient`]) and invalid UTF-8 is replaced, since the
/// result is for display.
#[must_use]
pub fn parse_parts(token: &str) -> Option<JwtToken> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [raw_header, raw_payload, signature] = segments.as_slice() else {
        return None;
    };
    if raw_header.is_empty() || raw_payload.is_empty() || signature.is_empty() {
        return None;
    }

    let header = base64url::decode_lenient(raw_header).ok()?;
    let payload = base64url::decode_lenient(raw_payload).ok()?;

    Some(JwtToken {
        header: String::from_utf8_lossy(&header).into_owned(),
        payload: String::from_utf8_lossy(&payload).into_owned(),
        signature: (*signature).to_owned(),
        raw_header: (*raw_header).to_owned(),
        raw_payload: (*raw_payload).to_owned(),
    })
}

/// The `alg` of a decoded JWT header, mapped to an HMAC algorithm.
#[must_use]
pub fn header_algorithm(header: &str) -> Option<HmacAlgorithm> {
    let value: Value = serde_json::from_str(header).ok()?;
    value
        .get("alg")
        .and_then(Value::as_str)
        .and_then(HmacAlgorithm::from_jwt_name)
}

/// Expiry state derived from the `exp` claim.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryInfo {
    /// "No expiry", "Expires in …" or "Expired … ago".
    pub text: String,
    /// `exp` lies strictly before now.
    pub is_expired: bool,
}

/// Describe the `exp` claim (seconds since epoch) of `payload` relative to
/// `now_millis`.
///
/// A missing or non-numeric `exp` reads as "No expiry". Expiry exactly at
/// `now_millis` is not yet expired.
#[must_use]
pub fn expiry_info(payload: &Value, now_millis: i64) -> ExpiryInfo {
    let Some(exp) = payload.get("exp").and_then(Value::as_f64) else {
        return ExpiryInfo {
            text: "No expiry".to_owned(),
            is_expired: false,
        };
    };

    #[allow(clippy::cast_precision_loss)]
    let diff = exp.mul_add(MS_PER_SECOND, -(now_millis as f64));
    if diff < 0.0 {
        ExpiryInfo {
            text: format!("Expired {} ago", format_duration(-diff)),
            is_expired: true,
        }
    } else {
        ExpiryInfo {
            text: format!("Expires in {}", format_duration(diff)),
            is_expired: false,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_duration(ms: f64) -> String {
    let (count, unit) = if ms < MS_PER_MINUTE {
        (ms / MS_PER_SECOND, "second")
    } else if ms < MS_PER_HOUR {
        (ms / MS_PER_MINUTE, "minute")
    } else if ms < MS_PER_DAY {
        (ms / MS_PER_HOUR, "hour")
    } else {
        (ms / MS_PER_DAY, "day")
    };
    let count = count.floor() as u64;
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
