//! The OfertMatch API response envelope.
//!
//! Every endpoint answers with the same shape: `{ ok, data?, msg? }`, plus
//! `id` on successful creates. Unknown fields (such as `pagination`) are
//! ignored on deserialize.

use serde::{Deserialize, Serialize};

/// Wire envelope returned by every OfertMatch API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded application-side.
    pub ok: bool,
    /// Result rows for list endpoints.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
    /// Human-readable message, set on errors and some successes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Id of the created record, set by create endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl<T> Envelope<T> {
    /// Take the data rows, treating an absent `data` field as empty.
    #[must_use]
    pub fn into_rows(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn list_envelope_decodes() {
        let raw = r#"{"ok": true, "data": [{"nome": "Leite"}], "pagination": {"page": 1}}"#;
        let env: Envelope<Value> = serde_json::from_str(raw).expect("valid envelope");
        assert!(env.ok);
        assert_eq!(env.into_rows().len(), 1);
    }

    #[test]
    fn create_envelope_carries_id() {
        let raw = r#"{"ok": true, "id": "64f0c1"}"#;
        let env: Envelope<Value> = serde_json::from_str(raw).expect("valid envelope");
        assert!(env.ok);
        assert_eq!(env.id.as_deref(), Some("64f0c1"));
        assert!(env.into_rows().is_empty());
    }

    #[test]
    fn error_envelope_carries_msg() {
        let raw = r#"{"ok": false, "msg": "CNPJ já cadastrado"}"#;
        let env: Envelope<Value> = serde_json::from_str(raw).expect("valid envelope");
        assert!(!env.ok);
        assert_eq!(env.msg.as_deref(), Some("CNPJ já cadastrado"));
    }
}
