//! JOSE header construction.

use crate::algorithm::Algorithm;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token type constant stamped into every header.
pub const TOKEN_TYPE: &str = "JWT";

/// JOSE header of a compact token.
///
/// Built fresh on every sign call and immutable once serialized. Extra
/// caller-supplied fields are flattened into the top level; the reserved
/// `typ` and `alg` fields always win over extras.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    /// Token type, always `"JWT"`.
    #[serde(default)]
    pub typ: String,
    /// Signature algorithm identifier.
    pub alg: String,
    /// Key id, stamped from the sign options when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// Extra caller-supplied header fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Header {
    /// Create a header for `alg` with no key id and no extra fields.
    #[must_use]
    pub fn new(alg: Algorithm) -> Self {
        Self {
            typ: TOKEN_TYPE.to_string(),
            alg: alg.as_str().to_string(),
            kid: None,
            extra: Map::new(),
        }
    }

    /// Merge caller extras into the header.
    ///
    /// Reserved fields stay authoritative: `typ` and `alg` entries are
    /// dropped, a `kid` entry lands in the typed field (and is later
    /// overridden by an explicit `keyid` option).
    pub(crate) fn merge_extra(&mut self, extra: &Map<String, Value>) {
        for (key, value) in extra {
            match key.as_str() {
                "typ" | "alg" => {}
                "kid" => {
                    if let Some(kid) = value.as_str() {
                        self.kid = Some(kid.to_string());
                    }
                }
                _ => {
                    self.extra.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reserved_fields_cannot_be_overridden() {
        let mut header = Header::new(Algorithm::HS256);
        let mut extra = Map::new();
        extra.insert("alg".to_string(), json!("none"));
        extra.insert("typ".to_string(), json!("JWE"));
        extra.insert("cty".to_string(), json!("example"));
        header.merge_extra(&extra);

        assert_eq!(header.alg, "HS256");
        assert_eq!(header.typ, "JWT");
        assert_eq!(header.extra.get("cty"), Some(&json!("example")));
    }

    #[test]
    fn extra_kid_lands_in_typed_field() {
        let mut header = Header::new(Algorithm::RS256);
        let mut extra = Map::new();
        extra.insert("kid".to_string(), json!("key-7"));
        header.merge_extra(&extra);

        assert_eq!(header.kid.as_deref(), Some("key-7"));
        assert!(header.extra.is_empty());
    }

    #[test]
    fn serializes_without_absent_kid() {
        let header = Header::new(Algorithm::ES384);
        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json, json!({"typ": "JWT", "alg": "ES384"}));
    }
}
