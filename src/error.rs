//! Error types for token operations.

use thiserror::Error;

/// Result type for token operations.
pub type JwtResult<T> = Result<T, JwtError>;

/// Errors produced while signing, verifying or decoding tokens.
///
/// `verify` only surfaces these when asked to; its default contract
/// collapses every failure to `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Algorithm outside the supported set, missing from the header, or a
    /// token/verifier algorithm mismatch.
    #[error("invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    /// Key material could not be parsed for the requested algorithm family.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Wrong segment count, bad base64url, or a segment that is not JSON.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// Recomputed or verified signature does not match the token.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// The `exp` claim lies in the past.
    #[error("token has expired")]
    Expired,

    /// The `nbf` claim lies in the future.
    #[error("token not yet valid")]
    NotYetValid,

    /// Header or payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl JwtError {
    /// Create a malformed token error.
    #[inline]
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        JwtError::MalformedToken(msg.into())
    }

    /// Create an invalid key error.
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        JwtError::InvalidKey(msg.into())
    }

    /// Create an invalid algorithm error.
    #[inline]
    #[must_use]
    pub fn invalid_algorithm(msg: impl Into<String>) -> Self {
        JwtError::InvalidAlgorithm(msg.into())
    }
}
