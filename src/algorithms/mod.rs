//! Signature computation and verification, dispatched by algorithm family.
//!
//! The dispatch is a closed match over [`Algorithm`]: each identifier maps
//! to one digest width and one sign/verify routine. For the HS family the
//! key is the shared secret string itself; for RS/ES it is PEM-encoded key
//! material (private to sign, public to verify).

mod ecdsa;
mod hmac;
mod rsa;

use self::hmac::{HmacSha256, HmacSha384, HmacSha512};
use crate::algorithm::Algorithm;
use crate::error::JwtResult;

/// Compute the raw signature bytes over `message`.
pub(crate) fn sign_message(
    algorithm: Algorithm,
    message: &str,
    secret: &str,
) -> JwtResult<Vec<u8>> {
    match algorithm {
        Algorithm::HS256 => hmac::sign::<HmacSha256>(message, secret.as_bytes()),
        Algorithm::HS384 => hmac::sign::<HmacSha384>(message, secret.as_bytes()),
        Algorithm::HS512 => hmac::sign::<HmacSha512>(message, secret.as_bytes()),
        Algorithm::RS256 => rsa::sign_rs256(message, secret),
        Algorithm::RS384 => rsa::sign_rs384(message, secret),
        Algorithm::RS512 => rsa::sign_rs512(message, secret),
        Algorithm::ES256 => ecdsa::sign_es256(message, secret),
        Algorithm::ES384 => ecdsa::sign_es384(message, secret),
        Algorithm::ES512 => ecdsa::sign_es512(message, secret),
    }
}

/// Check `signature` against `message`.
///
/// HS signatures are recomputed and compared in constant time; RS/ES
/// signatures go through the primitive's verify routine.
pub(crate) fn verify_signature(
    algorithm: Algorithm,
    message: &str,
    signature: &[u8],
    secret: &str,
) -> JwtResult<bool> {
    match algorithm {
        Algorithm::HS256 => hmac::verify::<HmacSha256>(message, signature, secret.as_bytes()),
        Algorithm::HS384 => hmac::verify::<HmacSha384>(message, signature, secret.as_bytes()),
        Algorithm::HS512 => hmac::verify::<HmacSha512>(message, signature, secret.as_bytes()),
        Algorithm::RS256 => rsa::verify_rs256(message, signature, secret),
        Algorithm::RS384 => rsa::verify_rs384(message, signature, secret),
        Algorithm::RS512 => rsa::verify_rs512(message, signature, secret),
        Algorithm::ES256 => ecdsa::verify_es256(message, signature, secret),
        Algorithm::ES384 => ecdsa::verify_es384(message, signature, secret),
        Algorithm::ES512 => ecdsa::verify_es512(message, signature, secret),
    }
}
