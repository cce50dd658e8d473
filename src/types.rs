//! Common types used throughout tap-nikabot
//!
//! This module contains shared type aliases used across multiple modules.

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single record as returned by the API, field name to JSON value.
///
/// Field order is preserved exactly as received.
pub type Record = JsonObject;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_field_order() {
        let record: Record =
            serde_json::from_str(r#"{"updated_at": "2020-01-01", "id": 1, "name": "A"}"#).unwrap();
        let keys: Vec<_> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["updated_at", "id", "name"]);
    }
}
