//! Catalog types
//!
//! These serialise to the Singer catalog format consumed by `--catalog`
//! and produced by `--discover`.

use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full catalog of streams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Streams, in sync order
    #[serde(default)]
    pub streams: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create a catalog from entries
    pub fn new(streams: Vec<CatalogEntry>) -> Self {
        Self { streams }
    }

    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(format!("Invalid catalog JSON: {e}")))
    }

    /// Load a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read catalog file: {e}")))?;
        Self::from_json(&contents)
    }

    /// Serialise as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find an entry by stream id
    pub fn get_stream(&self, tap_stream_id: &str) -> Option<&CatalogEntry> {
        self.streams
            .iter()
            .find(|entry| entry.tap_stream_id == tap_stream_id)
    }

    /// Selected entries, in catalog order
    pub fn selected_streams(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.streams.iter().filter(|entry| entry.is_selected())
    }
}

/// One stream in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stream identifier used by the tap
    pub tap_stream_id: String,

    /// Stream name used by the target
    pub stream: String,

    /// JSON schema of the stream's records
    pub schema: Schema,

    /// Primary key fields
    #[serde(default)]
    pub key_properties: Vec<String>,

    /// Watermark field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_key: Option<String>,

    /// Singer metadata
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataEntry>,
}

impl CatalogEntry {
    /// Create an entry with standard metadata, selected by default
    pub fn new(
        stream_id: impl Into<String>,
        schema: Schema,
        key_properties: Vec<String>,
        replication_key: Option<String>,
    ) -> Self {
        let stream_id = stream_id.into();
        let mut metadata =
            standard_metadata(&schema, &key_properties, replication_key.as_deref());
        set_root_value(&mut metadata, "selected", JsonValue::Bool(true));

        Self {
            tap_stream_id: stream_id.clone(),
            stream: stream_id,
            schema,
            key_properties,
            replication_key,
            metadata,
        }
    }

    /// Root (stream-level) metadata, if present
    pub fn root_metadata(&self) -> Option<&JsonObject> {
        self.metadata
            .iter()
            .find(|entry| entry.breadcrumb.is_empty())
            .map(|entry| &entry.metadata)
    }

    /// Whether this stream should be synced
    ///
    /// Root metadata `selected` wins; the legacy `schema.selected` flag is
    /// consulted only when metadata says nothing.
    pub fn is_selected(&self) -> bool {
        match self
            .root_metadata()
            .and_then(|metadata| metadata.get("selected"))
            .and_then(JsonValue::as_bool)
        {
            Some(selected) => selected,
            None => self.schema.selected.unwrap_or(false),
        }
    }

    /// Select or deselect this stream
    pub fn set_selected(&mut self, selected: bool) {
        set_root_value(&mut self.metadata, "selected", JsonValue::Bool(selected));
    }
}

/// Metadata attached to a stream (empty breadcrumb) or one of its fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Path to the described node, e.g. `["properties", "id"]`
    #[serde(default)]
    pub breadcrumb: Vec<String>,
    /// Metadata values
    #[serde(default)]
    pub metadata: JsonObject,
}

impl MetadataEntry {
    /// Create an entry for the given breadcrumb
    pub fn new(breadcrumb: Vec<String>) -> Self {
        Self {
            breadcrumb,
            metadata: JsonObject::new(),
        }
    }
}

/// Standard Singer metadata for a stream
///
/// Key and replication fields are `automatic`, everything else `available`.
pub fn standard_metadata(
    schema: &Schema,
    key_properties: &[String],
    replication_key: Option<&str>,
) -> Vec<MetadataEntry> {
    let mut root = MetadataEntry::new(Vec::new());
    root.metadata.insert(
        "table-key-properties".to_string(),
        JsonValue::from(key_properties.to_vec()),
    );
    if let Some(key) = replication_key {
        root.metadata.insert(
            "valid-replication-keys".to_string(),
            JsonValue::from(vec![key.to_string()]),
        );
    }
    root.metadata
        .insert("inclusion".to_string(), JsonValue::from("available"));

    let mut entries = vec![root];
    for name in schema.property_names() {
        let automatic =
            key_properties.iter().any(|k| k == name) || replication_key == Some(name);
        let mut entry = MetadataEntry::new(vec!["properties".to_string(), name.to_string()]);
        entry.metadata.insert(
            "inclusion".to_string(),
            JsonValue::from(if automatic { "automatic" } else { "available" }),
        );
        entries.push(entry);
    }
    entries
}

fn set_root_value(metadata: &mut Vec<MetadataEntry>, key: &str, value: JsonValue) {
    if let Some(root) = metadata.iter_mut().find(|entry| entry.breadcrumb.is_empty()) {
        root.metadata.insert(key.to_string(), value);
    } else {
        let mut root = MetadataEntry::new(Vec::new());
        root.metadata.insert(key.to_string(), value);
        metadata.insert(0, root);
    }
}
