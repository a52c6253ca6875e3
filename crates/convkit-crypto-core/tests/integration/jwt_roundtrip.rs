//! Build a token by hand, then parse, verify, and read its expiry.

use convkit_crypto_core::base64url;
use convkit_crypto_core::clock::{Clock, FixedClock};
use convkit_crypto_core::digest::RingProvider;
use convkit_crypto_core::hmac::{sign, verify, HmacAlgorithm};
use convkit_crypto_core::jwt::{expiry_info, parse_parts};

const SECRET: &[u8] = b"your-256-bit-secret";

fn build_token(header: &str, payload: &str, algorithm: HmacAlgorithm) -> String {
    let signing_input = format!(
        "{}.{}",
        base64url::encode(header.as_bytes()),
        base64url::encode(payload.as_bytes())
    );
    let sig = sign(&RingProvider, &signing_input, SECRET, algorithm).unwrap();
    format!("{signing_input}.{sig}")
}

#[test]
fn jwt_io_sample_verifies() {
    let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                 eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
                 SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";
    let parsed = parse_parts(token).unwrap();
    let algorithm = parsed.algorithm().unwrap();
    assert!(verify(
        &RingProvider,
        &parsed.signing_input(),
        &parsed.signature,
        SECRET,
        algorithm
    ));
}

#[test]
fn every_hs_algorithm_round_trips() {
    for algorithm in HmacAlgorithm::ALL {
        let header = format!(r#"{{"alg":"{}","typ":"JWT"}}"#, algorithm.jwt_name());
        let token = build_token(&header, r#"{"sub":"42"}"#, algorithm);
        let parsed = parse_parts(&token).unwrap();
        assert_eq!(parsed.header, header);
        assert_eq!(parsed.algorithm(), Some(algorithm));
        assert!(verify(
            &RingProvider,
            &parsed.signing_input(),
            &parsed.signature,
            SECRET,
            algorithm
        ));
    }
}

#[test]
fn tampered_payload_fails_verification() {
    let token = build_token(r#"{"alg":"HS256"}"#, r#"{"admin":false}"#, HmacAlgorithm::Sha256);
    let parsed = parse_parts(&token).unwrap();
    let forged_payload = base64url::encode(br#"{"admin":true}"#);
    let forged_input = format!("{}.{forged_payload}", parsed.raw_header);
    assert!(!verify(
        &RingProvider,
        &forged_input,
        &parsed.signature,
        SECRET,
        HmacAlgorithm::Sha256
    ));
}

#[test]
fn expiry_from_parsed_payload() {
    let clock = FixedClock(1_700_000_000_000);
    let token = build_token(
        r#"{"alg":"HS256"}"#,
        r#"{"exp":1700003600}"#,
        HmacAlgorithm::Sha256,
    );
    let parsed = parse_parts(&token).unwrap();
    let info = expiry_info(&parsed.payload_json().unwrap(), clock.now_millis());
    assert!(!info.is_expired);
    assert_eq!(info.text, "Expires in 1 hour");

    let later = FixedClock(1_700_000_000_000 + 2 * 86_400_000);
    let info = expiry_info(&parsed.payload_json().unwrap(), later.now_millis());
    assert!(info.is_expired);
    assert!(info.text.starts_with("Expired"), "{}", info.text);
}
