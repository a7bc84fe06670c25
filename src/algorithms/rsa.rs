//! RSA PKCS#1 v1.5 signing for the RS algorithm family.

use crate::error::{JwtError, JwtResult};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::sha2::{Sha256, Sha384, Sha512};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Parse an RSA private key from PKCS#8 or PKCS#1 PEM.
fn private_key_from_pem(pem: &str) -> JwtResult<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| JwtError::InvalidKey(format!("invalid RSA private key: {e}")))
}

/// Parse an RSA public key from SPKI or PKCS#1 PEM.
fn public_key_from_pem(pem: &str) -> JwtResult<RsaPublicKey> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| JwtError::InvalidKey(format!("invalid RSA public key: {e}")))
}

/// Sign with RSA PKCS#1 v1.5 and SHA-256 (RS256).
pub(crate) fn sign_rs256(message: &str, private_key_pem: &str) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha256>::new(private_key_from_pem(private_key_pem)?);
    let signature = signing_key.sign(message.as_bytes());
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Sign with RSA PKCS#1 v1.5 and SHA-384 (RS384).
pub(crate) fn sign_rs384(message: &str, private_key_pem: &str) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha384>::new(private_key_from_pem(private_key_pem)?);
    let signature = signing_key.sign(message.as_bytes());
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Sign with RSA PKCS#1 v1.5 and SHA-512 (RS512).
pub(crate) fn sign_rs512(message: &str, private_key_pem: &str) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha512>::new(private_key_from_pem(private_key_pem)?);
    let signature = signing_key.sign(message.as_bytes());
    Ok(signature.to_bytes().as_ref().to_vec())
}

/// Verify an RS256 signature.
///
/// Uses the primitive's own verify routine; a bad signature is `Ok(false)`
/// while unusable key material is an error.
pub(crate) fn verify_rs256(
    message: &str,
    signature: &[u8],
    public_key_pem: &str,
) -> JwtResult<bool> {
    let verifying_key = VerifyingKey::<Sha256>::new(public_key_from_pem(public_key_pem)?);
    let signature = match Signature::try_from(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };
    Ok(verifying_key.verify(message.as_bytes(), &signature).is_ok())
}

/// Verify an RS384 signature.
pub(crate) fn verify_rs384(
    message: &str,
    signature: &[u8],
    public_key_pem: &str,
) -> JwtResult<bool> {
    let verifying_key = VerifyingKey::<Sha384>::new(public_key_from_pem(public_key_pem)?);
    let signature = match Signature::try_from(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };
    Ok(verifying_key.verify(message.as_bytes(), &signature).is_ok())
}

/// Verify an RS512 signature.
pub(crate) fn verify_rs512(
    message: &str,
    signature: &[u8],
    public_key_pem: &str,
) -> JwtResult<bool> {
    let verifying_key = VerifyingKey::<Sha512>::new(public_key_from_pem(public_key_pem)?);
    let signature = match Signature::try_from(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };
    Ok(verifying_key.verify(message.as_bytes(), &signature).is_ok())
}
