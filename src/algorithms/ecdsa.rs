//! ECDSA signing for the ES algorithm family (P-256, P-384, P-521).
//!
//! Signatures are the fixed-width `r || s` form JWS requires, not DER.
//! Verification goes through the curve's verify routine: ECDSA signing is
//! randomized in general, so recompute-and-compare would reject valid
//! signatures from other implementations.

use crate::error::{JwtError, JwtResult};

/// Sign with ECDSA over P-256 and SHA-256 (ES256).
pub(crate) fn sign_es256(message: &str, private_key_pem: &str) -> JwtResult<Vec<u8>> {
    use p256::ecdsa::signature::Signer;
    use p256::ecdsa::{Signature, SigningKey};
    use p256::pkcs8::DecodePrivateKey;

    let signing_key = SigningKey::from_pkcs8_pem(private_key_pem)
        .map_err(|e| JwtError::InvalidKey(format!("invalid P-256 private key: {e}")))?;
    let signature: Signature = signing_key.sign(message.as_bytes());
    Ok(signature.to_bytes().to_vec())
}

/// Verify an ES256 signature.
pub(crate) fn verify_es256(
    message: &str,
    signature: &[u8],
    public_key_pem: &str,
) -> JwtResult<bool> {
    use p256::ecdsa::signature::Verifier;
    use p256::ecdsa::{Signature, VerifyingKey};
    use p256::pkcs8::DecodePublicKey;

    let verifying_key = VerifyingKey::from_public_key_pem(public_key_pem)
        .map_err(|e| JwtError::InvalidKey(format!("invalid P-256 public key: {e}")))?;
    let signature = match Signature::from_slice(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };
    Ok(verifying_key
        .verify(message.as_bytes(), &signature)
        .is_ok())
}

/// Sign with ECDSA over P-384 and SHA-384 (ES384).
pub(crate) fn sign_es384(message: &str, private_key_pem: &str) -> JwtResult<Vec<u8>> {
    use p384::ecdsa::signature::Signer;
    use p384::ecdsa::{Signature, SigningKey};
    use p384::pkcs8::DecodePrivateKey;

    let signing_key = SigningKey::from_pkcs8_pem(private_key_pem)
        .map_err(|e| JwtError::InvalidKey(format!("invalid P-384 private key: {e}")))?;
    let signature: Signature = signing_key.sign(message.as_bytes());
    Ok(signature.to_bytes().to_vec())
}

/// Verify an ES384 signature.
pub(crate) fn verify_es384(
    message: &str,
    signature: &[u8],
    public_key_pem: &str,
) -> JwtResult<bool> {
    use p384::ecdsa::signature::Verifier;
    use p384::ecdsa::{Signature, VerifyingKey};
    use p384::pkcs8::DecodePublicKey;

    let verifying_key = VerifyingKey::from_public_key_pem(public_key_pem)
        .map_err(|e| JwtError::InvalidKey(format!("invalid P-384 public key: {e}")))?;
    let signature = match Signature::from_slice(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };
    Ok(verifying_key
        .verify(message.as_bytes(), &signature)
        .is_ok())
}

/// Sign with ECDSA over P-521 and SHA-512 (ES512).
///
/// `p521`'s ECDSA key types do not expose the PEM decoders that the
/// P-256/P-384 ones do, so the key is parsed as a generic curve key and
/// converted.
pub(crate) fn sign_es512(message: &str, private_key_pem: &str) -> JwtResult<Vec<u8>> {
    use p521::ecdsa::signature::Signer;
    use p521::ecdsa::{Signature, SigningKey};
    use p521::pkcs8::DecodePrivateKey;
    use p521::{NistP521, SecretKey};

    let secret_key = SecretKey::from_pkcs8_pem(private_key_pem)
        .map_err(|e| JwtError::InvalidKey(format!("invalid P-521 private key: {e}")))?;
    let signing_key = SigningKey::from(::ecdsa::SigningKey::<NistP521>::from(secret_key));
    let signature: Signature = signing_key.sign(message.as_bytes());
    Ok(signature.to_bytes().to_vec())
}

/// Verify an ES512 signature.
pub(crate) fn verify_es512(
    message: &str,
    signature: &[u8],
    public_key_pem: &str,
) -> JwtResult<bool> {
    use p521::ecdsa::signature::Verifier;
    use p521::ecdsa::{Signature, VerifyingKey};
    use p521::pkcs8::DecodePublicKey;
    use p521::{NistP521, PublicKey};

    let public_key = PublicKey::from_public_key_pem(public_key_pem)
        .map_err(|e| JwtError::InvalidKey(format!("invalid P-521 public key: {e}")))?;
    let verifying_key = VerifyingKey::from(::ecdsa::VerifyingKey::<NistP521>::from(public_key));
    let signature = match Signature::from_slice(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };
    Ok(verifying_key
        .verify(message.as_bytes(), &signature)
        .is_ok())
}
