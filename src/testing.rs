//! Test doubles shared by the unit tests

use crate::catalog::CatalogEntry;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::output::Sink;
use crate::pagination::{PageRequest, PageResponse};
use crate::schema::SchemaCatalog;
use crate::state::State;
use crate::types::{JsonValue, Record};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Build a record from a `json!` object
pub(crate) fn record(value: JsonValue) -> Record {
    match value {
        JsonValue::Object(map) => map,
        other => panic!("record must be an object, got {other}"),
    }
}

/// Swagger document with every stream's definition
pub(crate) fn swagger() -> JsonValue {
    json!({
        "swagger": "2.0",
        "definitions": {
            "UserDTO": {
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "name": {"type": "string"},
                    "updated_at": {"type": "string", "format": "date-time"},
                    "role": {"$ref": "#/definitions/RoleDTO"}
                }
            },
            "RoleDTO": {
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "name": {"type": "string"}
                }
            },
            "GroupDTO": {
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "name": {"type": "string"}
                }
            },
            "TeamDTO": {
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "members": {"type": "array", "items": {"type": "string"}}
                }
            }
        }
    })
}

/// Schema catalog built from [`swagger`]
pub(crate) fn schema_catalog() -> SchemaCatalog {
    SchemaCatalog::from_swagger(&swagger()).unwrap()
}

/// Something observable that happened during a sync
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Fetch(PageRequest),
    Schema(String),
    Records(String, Vec<Record>),
    State(State),
}

/// Shared, ordered event log
pub(crate) type EventLog = Arc<Mutex<Vec<Event>>>;

#[derive(Debug, Clone, Default)]
struct Resource {
    pages: Vec<Vec<Record>>,
    fail_at: Option<u32>,
    endless: bool,
}

/// Scripted transport serving fixed pages per resource path
///
/// Paths without a script answer every page with an empty result.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    resources: HashMap<String, Resource>,
    schemas: Option<SchemaCatalog>,
    log: EventLog,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serve `pages`, then empty pages
    pub(crate) fn with_pages(mut self, path: &str, pages: Vec<Vec<Record>>) -> Self {
        self.resources.entry(path.to_string()).or_default().pages = pages;
        self
    }

    /// Fail with HTTP 500 when page `index` is requested
    pub(crate) fn failing_at(mut self, path: &str, index: u32) -> Self {
        self.resources.entry(path.to_string()).or_default().fail_at = Some(index);
        self
    }

    /// Never return an empty page
    pub(crate) fn endless(mut self, path: &str) -> Self {
        self.resources.entry(path.to_string()).or_default().endless = true;
        self
    }

    pub(crate) fn with_schemas(mut self, schemas: SchemaCatalog) -> Self {
        self.schemas = Some(schemas);
        self
    }

    /// Share an event log with a [`RecordingSink`]
    pub(crate) fn with_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    /// Every page request, in order
    pub(crate) fn requests(&self) -> Vec<PageRequest> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                Event::Fetch(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }

    /// Page requests made for one path
    pub(crate) fn requests_for(&self, path: &str) -> Vec<PageRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.resource_path == path)
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse> {
        self.log.lock().unwrap().push(Event::Fetch(request.clone()));

        let Some(resource) = self.resources.get(&request.resource_path) else {
            return Ok(PageResponse::empty());
        };
        if resource.fail_at == Some(request.page_index) {
            return Err(Error::http_status(500, "boom"));
        }
        if resource.endless {
            return Ok(PageResponse::new(vec![record(
                json!({"id": request.page_index.to_string()}),
            )]));
        }
        Ok(resource
            .pages
            .get(request.page_index as usize)
            .cloned()
            .map(PageResponse::new)
            .unwrap_or_default())
    }

    async fn fetch_schema_catalog(&self) -> Result<SchemaCatalog> {
        self.schemas
            .clone()
            .ok_or_else(|| Error::http_status(503, "schema unavailable"))
    }
}

/// Sink that records every call
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    log: EventLog,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_log(log: EventLog) -> Self {
        Self { log }
    }

    /// Everything the sink received, in order
    pub(crate) fn events(&self) -> Vec<Event> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|event| !matches!(event, Event::Fetch(_)))
            .cloned()
            .collect()
    }

    /// Records received for one stream, flattened across pages
    pub(crate) fn records(&self, stream: &str) -> Vec<Record> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Records(s, records) if s == stream => Some(records),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// State messages received
    pub(crate) fn states(&self) -> Vec<State> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::State(state) => Some(state),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Sink for RecordingSink {
    async fn write_schema(&mut self, entry: &CatalogEntry) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(Event::Schema(entry.tap_stream_id.clone()));
        Ok(())
    }

    async fn write_records(&mut self, stream: &str, records: &[Record]) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(Event::Records(stream.to_string(), records.to_vec()));
        Ok(())
    }

    async fn write_state(&mut self, state: &State) -> Result<()> {
        self.log.lock().unwrap().push(Event::State(state.clone()));
        Ok(())
    }
}
