//! Compact token operations: sign, verify and decode.

use crate::algorithm::Algorithm;
use crate::algorithms::{sign_message, verify_signature};
use crate::claims::validate_time_claims;
use crate::encoding::{base64url_decode, base64url_encode, decode_segment, encode_segment, split_token};
use crate::error::{JwtError, JwtResult};
use crate::header::Header;
use crate::options::{SignOptions, VerifyOptions};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Sign `payload` into a compact three-segment token.
///
/// `options` is either a full [`SignOptions`] or a bare [`Algorithm`]
/// shorthand; the default algorithm is HS256. For the HS family `secret`
/// is the shared secret itself; for RS/ES it must be a PEM-encoded
/// private key. The payload is only read, never mutated.
///
/// # Errors
/// [`JwtError::InvalidKey`] when key material cannot be parsed for the
/// requested family, [`JwtError::Serialization`] when the payload cannot
/// be serialized. No partial token is ever returned.
pub async fn sign<T: Serialize>(
    payload: &T,
    secret: &str,
    options: impl Into<SignOptions>,
) -> JwtResult<String> {
    let options = options.into();
    let algorithm = options.algorithm;

    let mut header = Header::new(algorithm);
    header.merge_extra(&options.header);
    if let Some(keyid) = options.keyid {
        header.kid = Some(keyid);
    }

    let header_segment = encode_segment(&header)?;
    let payload_segment = encode_segment(payload)?;
    let signing_input = format!("{header_segment}.{payload_segment}");

    let signature = sign_message(algorithm, &signing_input, secret)?;
    let signature_segment = base64url_encode(&signature);

    debug!(alg = %algorithm, "token signed");
    Ok(format!("{signing_input}.{signature_segment}"))
}

/// Verify a compact token's signature and time claims.
///
/// The token's `alg` header must be one of the nine supported identifiers
/// and, when `options.algorithm` is set, match it exactly: presenting an
/// HS token to an RS verifier (or vice versa) always fails. After the
/// signature checks out, `nbf` and `exp` are validated against the wall
/// clock, read once per call.
///
/// Resolves to `Ok(true)` on success. By default every failure collapses
/// to `Ok(false)`; with [`VerifyOptions::throw_error`] the failure reason
/// is returned as the error instead.
///
/// # Errors
/// Only when `throw_error` is set: the [`JwtError`] describing why the
/// token was rejected.
pub async fn verify(
    token: &str,
    secret: &str,
    options: impl Into<VerifyOptions>,
) -> JwtResult<bool> {
    let options = options.into();
    match verify_token(token, secret, options.algorithm) {
        Ok(()) => Ok(true),
        Err(err) if options.throw_error => Err(err),
        Err(err) => {
            debug!(error = %err, "token rejected");
            Ok(false)
        }
    }
}

fn verify_token(token: &str, secret: &str, expected: Option<Algorithm>) -> JwtResult<()> {
    let (header_segment, payload_segment, signature_segment) = split_token(token)?;

    let header: Value = decode_segment(header_segment)?;
    let algorithm = header
        .get("alg")
        .and_then(Value::as_str)
        .ok_or_else(|| JwtError::invalid_algorithm("header has no alg field"))?
        .parse::<Algorithm>()?;

    if let Some(expected) = expected {
        if algorithm != expected {
            return Err(JwtError::InvalidAlgorithm(format!(
                "token is signed with {algorithm}, verifier expects {expected}"
            )));
        }
    }

    let signing_input = format!("{header_segment}.{payload_segment}");
    let signature = base64url_decode(signature_segment)?;

    if !verify_signature(algorithm, &signing_input, &signature, secret)? {
        return Err(JwtError::SignatureMismatch);
    }

    let payload: Value = decode_segment(payload_segment)?;
    validate_time_claims(&payload, Utc::now().timestamp())
}

/// Decode a token's payload **without** verifying the token.
///
/// Splits the token, decodes the header and payload segments and returns
/// the payload; the signature segment is left opaque and unchecked.
/// Malformation is non-exceptional on this path: any failure is `None`.
/// The output is untrusted; call [`verify`] before acting on it.
#[must_use]
pub fn decode(token: &str) -> Option<Value> {
    let (header_segment, payload_segment, _) = split_token(token).ok()?;
    decode_segment::<Value>(header_segment).ok()?;
    decode_segment(payload_segment).ok()
}
