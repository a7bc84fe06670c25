//! Base64url segment encoding and token splitting.

use crate::error::JwtError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base64 URL-safe encoding without padding (RFC 7515).
#[inline]
pub(crate) fn base64url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Base64 URL-safe decoding without padding (RFC 7515).
#[inline]
pub(crate) fn base64url_decode(input: &str) -> Result<Vec<u8>, JwtError> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| JwtError::malformed("segment is not valid base64url"))
}

/// Serialize a value to JSON and base64url-encode it as one segment.
pub(crate) fn encode_segment<T: Serialize>(value: &T) -> Result<String, JwtError> {
    let json = serde_json::to_vec(value).map_err(|e| JwtError::Serialization(e.to_string()))?;
    Ok(base64url_encode(&json))
}

/// Decode one token segment back into a value.
pub(crate) fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, JwtError> {
    let bytes = base64url_decode(segment)?;
    serde_json::from_slice(&bytes).map_err(|_| JwtError::malformed("segment is not valid JSON"))
}

/// Split a compact token into its three segments.
pub(crate) fn split_token(token: &str) -> Result<(&str, &str, &str), JwtError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => Ok((header, payload, signature)),
        _ => Err(JwtError::malformed(
            "token must have exactly three dot-separated segments",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn base64url_has_no_padding_or_standard_chars() {
        // 0xfb 0xff encodes to "+/8=" in standard base64
        let encoded = base64url_encode(&[0xfb, 0xff]);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
        assert_eq!(base64url_decode(&encoded).unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn segment_round_trip() {
        let value = json!({"user": "a", "n": 42});
        let segment = encode_segment(&value).unwrap();
        let decoded: Value = decode_segment(&segment).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn non_json_segment_is_malformed() {
        let segment = base64url_encode(b"not json at all");
        assert!(matches!(
            decode_segment::<Value>(&segment),
            Err(JwtError::MalformedToken(_))
        ));
    }

    #[test]
    fn padded_base64_is_rejected() {
        assert!(matches!(
            base64url_decode("e30="),
            Err(JwtError::MalformedToken(_))
        ));
    }

    #[test]
    fn split_requires_exactly_three_segments() {
        assert!(split_token("a.b.c").is_ok());
        for bad in ["", "a", "a.b", "a.b.c.d"] {
            assert!(matches!(
                split_token(bad),
                Err(JwtError::MalformedToken(_))
            ));
        }
        // empty segments still count as segments; later decode stages reject them
        assert!(split_token("..").is_ok());
    }
}
