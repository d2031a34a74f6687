//! Premier request signing: HMAC-SHA1 over `path?query` with a base64url private key.

use crate::utils::error::{MapsError, Result};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::{Position, Url};

type HmacSha1 = Hmac<Sha1>;

/// URL-safe alphabet; encodes with padding, decodes with or without it.
///
/// Decoding ignores non-zero bits past the last full byte, so keys that differ only
/// there (`TESTKEY`, `TESTKEZ`) yield the same raw key, as lenient base64 decoders do.
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn base64url_encode(bytes: &[u8]) -> String {
    BASE64_URL.encode(bytes)
}

pub fn base64url_decode(encoded: &str) -> Result<Vec<u8>> {
    BASE64_URL
        .decode(encoded.trim())
        .map_err(|e| MapsError::InvalidPremierConfiguration {
            message: format!("premier key is not valid base64url: {}", e),
        })
}

/// Compute the base64url HMAC-SHA1 signature of `payload`.
pub fn signature(premier_key: &str, payload: &str) -> Result<String> {
    let raw_key = base64url_decode(premier_key)?;
    let mut mac = HmacSha1::new_from_slice(&raw_key).map_err(|e| {
        MapsError::InvalidPremierConfiguration {
            message: format!("premier key rejected: {}", e),
        }
    })?;
    mac.update(payload.as_bytes());
    Ok(base64url_encode(&mac.finalize().into_bytes()))
}

/// Append a `signature` parameter to `url`.
///
/// Fails with `InvalidPremierConfiguration` when no key is configured; the URL is never
/// returned unsigned.
pub fn sign_url(url: &str, premier_key: Option<&str>) -> Result<String> {
    let premier_key = premier_key
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| MapsError::InvalidPremierConfiguration {
            message: "premier_key is not set".to_string(),
        })?;

    let parsed = Url::parse(url).map_err(|e| MapsError::ConfigError {
        message: format!("cannot sign malformed URL '{}': {}", url, e),
    })?;

    let to_sign = format!("{}?{}", parsed.path(), parsed.query().unwrap_or(""));
    let signature = signature(premier_key, &to_sign)?;

    // scheme://host[:port], without path or query
    let origin = &parsed[..Position::BeforePath];
    let signed = format!("{}{}&signature={}", origin, to_sign, signature);

    Ok(signed.trim().to_string())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_base64url_roundtrip(bytes in proptest::collection::vec(proptest::num::u8::ANY, 0..256)) {
            let encoded = base64url_encode(&bytes);
            prop_assert!(!encoded.contains('+') && !encoded.contains('/'));
            prop_assert_eq!(base64url_decode(&encoded).unwrap(), bytes);
        }

        #[test]
        fn prop_signing_is_deterministic(
            key in proptest::collection::vec(proptest::num::u8::ANY, 1..64),
            query in "[a-z]{1,8}=[a-zA-Z0-9+]{0,16}"
        ) {
            let key = base64url_encode(&key);
            let url = format!("https://maps.example.com/geocode/json?{}", query);
            let first = sign_url(&url, Some(&key)).unwrap();
            let second = sign_url(&url, Some(&key)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_different_payload_different_signature(
            key in proptest::collection::vec(proptest::num::u8::ANY, 1..64),
            a in "[a-z]{1,12}",
            b in "[a-z]{1,12}"
        ) {
            prop_assume!(a != b);
            let key = base64url_encode(&key);
            let sig_a = signature(&key, &format!("/geocode/json?address={}", a)).unwrap();
            let sig_b = signature(&key, &format!("/geocode/json?address={}", b)).unwrap();
            prop_assert_ne!(sig_a, sig_b);
        }
    }
}
