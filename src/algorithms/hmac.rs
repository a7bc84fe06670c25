//! HMAC-SHA signing for the HS algorithm family.

use crate::error::{JwtError, JwtResult};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

pub(crate) type HmacSha256 = Hmac<Sha256>;
pub(crate) type HmacSha384 = Hmac<Sha384>;
pub(crate) type HmacSha512 = Hmac<Sha512>;

/// Compute the MAC over `message` with the shared secret.
pub(crate) fn sign<M: Mac + KeyInit>(message: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    // `<M as Mac>` disambiguates from the identically-named KeyInit method
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Check a MAC by recomputing it and comparing in constant time.
///
/// Constant-time comparison is mandatory here: a byte-by-byte early-exit
/// compare leaks how much of a forged signature prefix is correct.
pub(crate) fn verify<M: Mac + KeyInit>(
    message: &str,
    signature: &[u8],
    secret: &[u8],
) -> JwtResult<bool> {
    let expected = sign::<M>(message, secret)?;
    Ok(expected.as_slice().ct_eq(signature).into())
}
