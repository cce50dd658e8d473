//! State types for tracking sync progress
//!
//! State is a flat JSON object from stream id to watermark, e.g.
//! `{"users": "2020-01-03T00:00:00Z"}`.

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Watermarks per stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    bookmarks: BTreeMap<String, JsonValue>,
}

impl State {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// State holding a single stream's watermark
    pub fn singleton(stream: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        let mut state = Self::new();
        state.set_bookmark(stream, value);
        state
    }

    /// Get the watermark for a stream
    pub fn get_bookmark(&self, stream: &str) -> Option<&JsonValue> {
        self.bookmarks.get(stream)
    }

    /// Set the watermark for a stream
    pub fn set_bookmark(&mut self, stream: impl Into<String>, value: impl Into<JsonValue>) {
        self.bookmarks.insert(stream.into(), value.into());
    }

    /// Merge another state into this one; entries in `other` win
    pub fn merge(&mut self, other: &State) {
        for (stream, value) in &other.bookmarks {
            self.bookmarks.insert(stream.clone(), value.clone());
        }
    }

    /// Streams that have a watermark
    pub fn streams(&self) -> impl Iterator<Item = &str> {
        self.bookmarks.keys().map(String::as_str)
    }

    /// Number of streams with a watermark
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    /// Whether no stream has a watermark
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_default() {
        let state = State::new();
        assert!(state.is_empty());
        assert!(state.get_bookmark("users").is_none());
    }

    #[test]
    fn test_state_bookmark() {
        let mut state = State::new();
        state.set_bookmark("users", "2024-01-01");
        assert_eq!(state.get_bookmark("users"), Some(&json!("2024-01-01")));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_state_merge_last_write_wins() {
        let mut state = State::singleton("users", "2020-01-01");
        state.set_bookmark("teams", "x");

        state.merge(&State::singleton("users", "2020-01-03"));

        assert_eq!(state.get_bookmark("users"), Some(&json!("2020-01-03")));
        assert_eq!(state.get_bookmark("teams"), Some(&json!("x")));
        assert_eq!(state.streams().collect::<Vec<_>>(), vec!["teams", "users"]);
    }

    #[test]
    fn test_state_serializes_flat() {
        let state = State::singleton("users", "2020-01-03");
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"users": "2020-01-03"})
        );

        let restored: State = serde_json::from_str(r#"{"users": "2020-01-03"}"#).unwrap();
        assert_eq!(restored, state);
    }
}
