//! Sign and verify configuration.
//!
//! Both operations take `impl Into<...>`, so a bare [`Algorithm`] works
//! as shorthand for a full options struct without any runtime type
//! inspection.

use crate::algorithm::{Algorithm, DEFAULT_ALGORITHM};
use serde_json::{Map, Value};

/// Configuration for [`sign`](crate::sign).
#[derive(Debug, Clone)]
pub struct SignOptions {
    /// Signing algorithm, [`DEFAULT_ALGORITHM`] unless set.
    pub algorithm: Algorithm,
    /// Key id stamped into the header as `kid`.
    pub keyid: Option<String>,
    /// Extra fields merged into the JOSE header.
    pub header: Map<String, Value>,
}

impl SignOptions {
    /// Create options with the default algorithm and an empty header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signing algorithm.
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the key id stamped into the header.
    #[inline]
    #[must_use]
    pub fn with_keyid(mut self, keyid: impl Into<String>) -> Self {
        self.keyid = Some(keyid.into());
        self
    }

    /// Add an extra header field.
    #[inline]
    #[must_use]
    pub fn with_header_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.header.insert(key.into(), value);
        self
    }
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM,
            keyid: None,
            header: Map::new(),
        }
    }
}

impl From<Algorithm> for SignOptions {
    /// Bare-algorithm shorthand: `sign(payload, secret, Algorithm::HS512)`.
    fn from(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }
}

/// Configuration for [`verify`](crate::verify).
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    /// When set, the token's `alg` header must match exactly. Any
    /// mismatch is a verification failure, never silently ignored.
    pub algorithm: Option<Algorithm>,
    /// Surface the failure reason as an error instead of `Ok(false)`.
    pub throw_error: bool,
}

impl VerifyOptions {
    /// Create options with no algorithm restriction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the token to be signed with `algorithm`.
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Return the failure reason as an error instead of `Ok(false)`.
    #[inline]
    #[must_use]
    pub fn with_throw_error(mut self, throw_error: bool) -> Self {
        self.throw_error = throw_error;
        self
    }
}

impl From<Algorithm> for VerifyOptions {
    /// Bare-algorithm shorthand: `verify(token, secret, Algorithm::HS256)`.
    fn from(algorithm: Algorithm) -> Self {
        Self {
            algorithm: Some(algorithm),
            throw_error: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_default_is_hs256() {
        assert_eq!(SignOptions::default().algorithm, Algorithm::HS256);
        assert_eq!(SignOptions::default().algorithm, DEFAULT_ALGORITHM);
    }

    #[test]
    fn algorithm_shorthand_expands() {
        let sign = SignOptions::from(Algorithm::ES384);
        assert_eq!(sign.algorithm, Algorithm::ES384);
        assert!(sign.keyid.is_none());
        assert!(sign.header.is_empty());

        let verify = VerifyOptions::from(Algorithm::RS512);
        assert_eq!(verify.algorithm, Some(Algorithm::RS512));
        assert!(!verify.throw_error);
    }

    #[test]
    fn verify_default_has_no_restriction() {
        let opts = VerifyOptions::new();
        assert_eq!(opts.algorithm, None);
        assert!(!opts.throw_error);
    }
}
