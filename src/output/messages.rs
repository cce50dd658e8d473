//! Singer message types
//!
//! Each message is written as one JSON line with a `type` tag.

use crate::catalog::CatalogEntry;
use crate::schema::Schema;
use crate::state::State;
use crate::types::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message on the Singer output stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Message {
    /// Describes the records that follow for a stream
    Schema {
        stream: String,
        schema: Schema,
        key_properties: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bookmark_properties: Option<Vec<String>>,
    },

    /// One extracted record
    Record {
        stream: String,
        record: Record,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time_extracted: Option<DateTime<Utc>>,
    },

    /// Watermarks to persist
    State { value: State },
}

impl Message {
    /// SCHEMA message for a catalog entry
    pub fn schema(entry: &CatalogEntry) -> Self {
        Message::Schema {
            stream: entry.tap_stream_id.clone(),
            schema: entry.schema.clone(),
            key_properties: entry.key_properties.clone(),
            bookmark_properties: entry.replication_key.clone().map(|key| vec![key]),
        }
    }

    /// RECORD message stamped with the extraction time
    pub fn record(stream: impl Into<String>, record: Record, time_extracted: DateTime<Utc>) -> Self {
        Message::Record {
            stream: stream.into(),
            record,
            time_extracted: Some(time_extracted),
        }
    }

    /// STATE message
    pub fn state(value: State) -> Self {
        Message::State { value }
    }
}
