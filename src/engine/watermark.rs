//! Running maximum of a stream's replication key

use crate::types::{JsonValue, Record};

/// Largest replication-key value seen so far
///
/// Values compare as strings, so ISO-8601 timestamps order chronologically.
/// Numbers are compared by their JSON text. Records where the field is
/// missing, null or not a scalar are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watermark {
    max: Option<String>,
}

impl Watermark {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value into the maximum
    pub fn observe(&mut self, value: &JsonValue) {
        let candidate = match value {
            JsonValue::String(s) => s.clone(),
            JsonValue::Number(n) => n.to_string(),
            _ => return,
        };
        if self.max.as_deref().map_or(true, |max| candidate.as_str() > max) {
            self.max = Some(candidate);
        }
    }

    /// Fold the `column` field of every record on a page
    pub fn observe_page(&mut self, records: &[Record], column: &str) {
        for record in records {
            if let Some(value) = record.get(column) {
                self.observe(value);
            }
        }
    }

    /// The maximum, if any value was observed
    pub fn value(&self) -> Option<&str> {
        self.max.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;
    use serde_json::json;

    #[test]
    fn test_empty_watermark() {
        assert_eq!(Watermark::new().value(), None);
    }

    #[test]
    fn test_keeps_maximum() {
        let mut watermark = Watermark::new();
        watermark.observe(&json!("2020-01-02"));
        watermark.observe(&json!("2020-01-03"));
        watermark.observe(&json!("2020-01-01"));
        assert_eq!(watermark.value(), Some("2020-01-03"));
    }

    #[test]
    fn test_ignores_missing_and_null() {
        let mut watermark = Watermark::new();
        let records = vec![
            record(json!({"id": "1"})),
            record(json!({"id": "2", "updated_at": null})),
            record(json!({"id": "3", "updated_at": "2020-01-01"})),
        ];
        watermark.observe_page(&records, "updated_at");
        assert_eq!(watermark.value(), Some("2020-01-01"));
    }

    #[test]
    fn test_empty_string_is_observed() {
        let mut watermark = Watermark::new();
        watermark.observe(&json!(""));
        assert_eq!(watermark.value(), Some(""));
    }

    #[test]
    fn test_numbers_compare_as_text() {
        let mut watermark = Watermark::new();
        watermark.observe(&json!(9));
        watermark.observe(&json!(10));
        assert_eq!(watermark.value(), Some("9"));
    }
}
