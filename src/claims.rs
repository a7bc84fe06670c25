//! Payload claim helpers and time-based claim validation.

use crate::error::{JwtError, JwtResult};
use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};

/// Builder for a payload object carrying the reserved time claims.
///
/// Payloads are arbitrary key/value maps; this is a convenience for
/// stamping `exp`/`nbf`/`iat` as epoch seconds next to custom entries.
#[derive(Debug, Clone, Default)]
pub struct Claims {
    entries: Map<String, Value>,
}

impl Claims {
    /// Create an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `exp` claim relative to now.
    #[must_use]
    pub fn expires_in(self, duration: Duration) -> Self {
        self.expires_at(Utc::now() + duration)
    }

    /// Set the `exp` claim to an absolute instant.
    #[must_use]
    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.entries.insert("exp".to_string(), at.timestamp().into());
        self
    }

    /// Set the `nbf` claim.
    #[must_use]
    pub fn not_before(mut self, at: DateTime<Utc>) -> Self {
        self.entries.insert("nbf".to_string(), at.timestamp().into());
        self
    }

    /// Set the `iat` claim to now.
    #[must_use]
    pub fn issued_now(mut self) -> Self {
        self.entries
            .insert("iat".to_string(), Utc::now().timestamp().into());
        self
    }

    /// Add an arbitrary claim.
    #[must_use]
    pub fn claim(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Finish into a plain JSON object payload.
    #[must_use]
    pub fn build(self) -> Map<String, Value> {
        self.entries
    }
}

/// Check the reserved time claims against `now` (epoch seconds).
///
/// `nbf` passes once `now >= nbf`; `exp` passes while `now < exp`. Absent
/// claims mean the token is valid indefinitely.
pub(crate) fn validate_time_claims(payload: &Value, now: i64) -> JwtResult<()> {
    let Some(claims) = payload.as_object() else {
        return Ok(());
    };

    if let Some(nbf) = claims.get("nbf").and_then(Value::as_i64) {
        if now < nbf {
            return Err(JwtError::NotYetValid);
        }
    }

    if let Some(exp) = claims.get("exp").and_then(Value::as_i64) {
        if now >= exp {
            return Err(JwtError::Expired);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_claims_are_valid_indefinitely() {
        assert!(validate_time_claims(&json!({"user": "a"}), 1_700_000_000).is_ok());
        assert!(validate_time_claims(&json!("not an object"), 0).is_ok());
    }

    #[test]
    fn exp_boundary_is_exclusive() {
        let payload = json!({"exp": 100});
        assert!(validate_time_claims(&payload, 99).is_ok());
        assert_eq!(validate_time_claims(&payload, 100), Err(JwtError::Expired));
        assert_eq!(validate_time_claims(&payload, 101), Err(JwtError::Expired));
    }

    #[test]
    fn nbf_boundary_is_inclusive() {
        let payload = json!({"nbf": 100});
        assert_eq!(
            validate_time_claims(&payload, 99),
            Err(JwtError::NotYetValid)
        );
        assert!(validate_time_claims(&payload, 100).is_ok());
        assert!(validate_time_claims(&payload, 101).is_ok());
    }

    #[test]
    fn nbf_checked_before_exp() {
        let payload = json!({"nbf": 200, "exp": 100});
        assert_eq!(
            validate_time_claims(&payload, 150),
            Err(JwtError::NotYetValid)
        );
    }

    #[test]
    fn builder_stamps_epoch_seconds() {
        let now = Utc::now().timestamp();
        let payload = Claims::new()
            .claim("user", json!("a"))
            .expires_in(Duration::hours(1))
            .not_before(Utc::now())
            .issued_now()
            .build();

        assert_eq!(payload.get("user"), Some(&json!("a")));
        let exp = payload.get("exp").and_then(Value::as_i64).unwrap();
        assert!(exp >= now + 3599 && exp <= now + 3601);
        assert!(payload.get("nbf").and_then(Value::as_i64).unwrap() <= exp);
        assert!(payload.get("iat").is_some());
    }
}
