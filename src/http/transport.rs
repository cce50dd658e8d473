//! Transport to the Nikabot API
//!
//! The sync engine only ever sees the [`Transport`] trait: one call per page
//! and one call for the schema document.

use super::client::{HttpClient, RequestConfig};
use crate::config::TapConfig;
use crate::error::Result;
use crate::pagination::{PageRequest, PageResponse};
use crate::schema::SchemaCatalog;
use crate::types::JsonValue;
use async_trait::async_trait;
use tracing::debug;

/// Path of the public Swagger document
pub const SCHEMA_DOCUMENT_PATH: &str = "/v2/api-docs";

/// Swagger group holding the public API
pub const SCHEMA_DOCUMENT_GROUP: &str = "public";

/// Fetches pages and the schema document from the remote API
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch one page of a resource
    ///
    /// Must fail on any non-success status and return an empty `result` once
    /// the resource is exhausted.
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse>;

    /// Fetch the schema definitions, keyed by entity name
    async fn fetch_schema_catalog(&self) -> Result<SchemaCatalog>;
}

/// HTTP transport for the Nikabot API
#[derive(Debug)]
pub struct NikabotTransport {
    client: HttpClient,
}

impl NikabotTransport {
    /// Create a transport from the tap config
    pub fn new(config: &TapConfig) -> Result<Self> {
        let client =
            HttpClient::with_config(config.http_config())?.with_bearer_token(&config.access_token);
        Ok(Self::with_client(client))
    }

    /// Create a transport over an existing client
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for NikabotTransport {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse> {
        debug!(
            "Fetching {} page {} (limit {})",
            request.resource_path, request.page_index, request.page_size
        );
        let config = RequestConfig::new()
            .query("limit", request.page_size.to_string())
            .query("page", request.page_index.to_string());
        self.client
            .get_json(&request.resource_path, &config)
            .await
    }

    async fn fetch_schema_catalog(&self) -> Result<SchemaCatalog> {
        debug!("Fetching API schema document");
        let config = RequestConfig::new()
            .query("group", SCHEMA_DOCUMENT_GROUP)
            .anonymous();
        let document: JsonValue = self
            .client
            .get_json(SCHEMA_DOCUMENT_PATH, &config)
            .await?;
        SchemaCatalog::from_swagger(&document)
    }
}
