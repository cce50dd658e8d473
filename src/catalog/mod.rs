//! Catalog module
//!
//! Discovery and the Singer catalog document.
//!
//! # Overview
//!
//! - `discover` - fetch the API schema and build one entry per stream
//! - `Catalog` / `CatalogEntry` - the catalog document and its selection
//! - `standard_metadata` - Singer metadata for a stream's schema

mod types;

pub use types::{standard_metadata, Catalog, CatalogEntry, MetadataEntry};

use crate::error::{Error, Result};
use crate::http::{Transport, SCHEMA_DOCUMENT_PATH};
use crate::schema::SchemaCatalog;
use crate::streams::StreamKind;
use tracing::info;

/// Run discovery against the API
pub async fn discover(transport: &dyn Transport) -> Result<Catalog> {
    info!("Fetching API schema definitions");
    let schemas = transport
        .fetch_schema_catalog()
        .await
        .map_err(|e| Error::discovery_fetch(SCHEMA_DOCUMENT_PATH, e))?;
    build_catalog(&schemas)
}

/// Build the catalog from already-fetched schema definitions
///
/// Every stream's definition must be present; if one is missing no catalog
/// is produced at all.
pub fn build_catalog(schemas: &SchemaCatalog) -> Result<Catalog> {
    let streams = StreamKind::ALL
        .into_iter()
        .map(|kind| kind.catalog_entry(schemas))
        .collect::<Result<Vec<_>>>()?;

    info!("Discovered {} streams", streams.len());
    Ok(Catalog::new(streams))
}
