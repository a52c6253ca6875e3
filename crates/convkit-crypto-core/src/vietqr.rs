//! VietQR bank-transfer payloads (EMVCo merchant-presented QR, NAPAS profile).
//!
//! A payload is a flat run of TLV fields: two-digit tag, two-digit decimal
//! length (character count of the value), value. Tag 38 nests the NAPAS
//! beneficiary block; tag 63 closes the payload with a CRC-16/CCITT-FALSE over
//! everything before it, including its own `6304` prefix.

use crate::crc16::crc16;
use crate::error::CryptoError;

/// NAPAS application identifier (tag 38 / sub-tag 00).
pub const NAPAS_GUID: &str = "A000000727";

/// Service code for transfers to an account number (tag 38 / sub-tag 02).
pub const SERVICE_CODE_TO_ACCOUNT: &str = "QRIBFTTA";

/// ISO 4217 numeric code for VND.
pub const CURRENCY_VND: &str = "704";

/// ISO 3166 alpha-2 country code.
pub const COUNTRY_VN: &str = "VN";

/// Largest value a two-digit length prefix can describe.
pub const MAX_FIELD_LEN: usize = 99;

/// Beneficiary name limit (tag 59).
pub const MAX_ACCOUNT_NAME_LEN: usize = 25;

/// Purpose-of-transaction limit (tag 62 / sub-tag 08).
pub const MAX_DESCRIPTION_LEN: usize = 50;

const PAYLOAD_FORMAT: &str = "000201";
const DYNAMIC_INITIATION: &str = "010212";
const CRC_PREFIX: &str = "6304";

/// Inputs for one transfer QR.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VietQrParams {
    /// Six-digit acquirer BIN of the beneficiary bank.
    pub bank_bin: String,
    /// Beneficiary account number.
    pub account_number: String,
    /// Amount in VND, emitted verbatim when it parses as a number above zero.
    #[serde(default)]
    pub amount: Option<String>,
    /// Transfer note; truncated to [`MAX_DESCRIPTION_LEN`] characters.
    #[serde(default)]
    pub description: Option<String>,
    /// Beneficiary name; upper-cased and truncated to [`MAX_ACCOUNT_NAME_LEN`].
    #[serde(default)]
    pub account_name: Option<String>,
}

/// One top-level field of a decoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvField {
    /// Two-digit tag.
    pub tag: String,
    /// Raw value; nested blocks can be split again with [`decode_fields`].
    pub value: String,
}

/// Encode one field, rejecting values the length prefix cannot describe.
///
/// # Errors
///
/// Returns [`CryptoError::VietQrField`] if `value` exceeds [`MAX_FIELD_LEN`]
/// characters.
pub fn tlv(tag: &str, value: &str) -> Result<String, CryptoError> {
    let len = value.chars().count();
    if len > MAX_FIELD_LEN {
        return Err(CryptoError::VietQrField {
            tag: tag.to_owned(),
            len,
        });
    }
    Ok(format!("{tag}{len:02}{value}"))
}

/// Build the complete payload string, checksum included.
///
/// # Errors
///
/// Returns [`CryptoError::VietQrField`] if any field (including the nested
/// beneficiary block) would exceed [`MAX_FIELD_LEN`] characters.
pub fn generate_vietqr_content(params: &VietQrParams) -> Result<String, CryptoError> {
    let account = tlv("00", &params.bank_bin)? + &tlv("01", &params.account_number)?;
    let beneficiary = tlv("00", NAPAS_GUID)?
        + &tlv("01", &account)?
        + &tlv("02", SERVICE_CODE_TO_ACCOUNT)?;

    let mut payload = String::new();
    payload.push_str(PAYLOAD_FORMAT);
    payload.push_str(DYNAMIC_INITIATION);
    payload.push_str(&tlv("38", &beneficiary)?);
    payload.push_str(&tlv("53", CURRENCY_VND)?);

    if let Some(amount) = params.amount.as_deref().filter(|a| is_positive_amount(a)) {
        payload.push_str(&tlv("54", amount)?);
    }

    payload.push_str(&tlv("58", COUNTRY_VN)?);

    if let Some(name) = params.account_name.as_deref() {
        let name: String = name.to_uppercase().chars().take(MAX_ACCOUNT_NAME_LEN).collect();
        payload.push_str(&tlv("59", &name)?);
    }

    if let Some(description) = params.description.as_deref() {
        let description: String = description.chars().take(MAX_DESCRIPTION_LEN).collect();
        payload.push_str(&tlv("62", &tlv("08", &description)?)?);
    }

    payload.push_str(CRC_PREFIX);
    let checksum = crc16(&payload);
    payload.push_str(&checksum);
    Ok(payload)
}

fn is_positive_amount(amount: &str) -> bool {
    amount
        .trim()
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite() && value > 0.0)
}

/// Split a payload into its top-level fields.
///
/// # Errors
///
/// Returns [`CryptoError::VietQrPayload`] if a tag or length is not two ASCII
/// digits or a value runs past the end of the payload.
pub fn decode_fields(payload: &str) -> Result<Vec<TlvField>, CryptoError> {
    let chars: Vec<char> = payload.chars().collect();
    let mut fields = Vec::new();
    let mut pos = 0usize;

    while pos < chars.len() {
        let header: String = chars.iter().skip(pos).take(4).collect();
        if header.len() < 4 || !header.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CryptoError::VietQrPayload(format!(
                "malformed field header at offset {pos}"
            )));
        }
        let (tag, len) = header.split_at(2);
        let len: usize = len
            .parse()
            .map_err(|_| CryptoError::VietQrPayload(format!("bad length at offset {pos}")))?;

        let start = pos.saturating_add(4);
        let end = start.saturating_add(len);
        if end > chars.len() {
            return Err(CryptoError::VietQrPayload(format!(
                "field {tag} overruns payload ({len} characters declared)"
            )));
        }
        fields.push(TlvField {
            tag: tag.to_owned(),
            value: chars[start..end].iter().collect(),
        });
        pos = end;
    }
    Ok(fields)
}

/// Whether the trailing `6304xxxx` field matches the CRC of the rest.
#[must_use]
pub fn verify_checksum(payload: &str) -> bool {
    let Some(body_len) = payload.len().checked_sub(4) else {
        return false;
    };
    let Some((body, checksum)) = payload.split_at_checked(body_len) else {
        return false;
    };
    body.ends_with(CRC_PREFIX) && crc16(body).eq_ignore_ascii_case(checksum)
}
