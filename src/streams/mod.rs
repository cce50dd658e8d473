//! Stream registry
//!
//! Binds each [`StreamKind`] to its catalog entry and to its record fetch.
//! The sync engine never looks at resource paths directly: it asks the
//! stream for a paginator and consumes pages.

mod types;

pub use types::{StreamDefinition, StreamKind};

use crate::catalog::CatalogEntry;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::pagination::Paginator;
use crate::schema::{map_definition, SchemaCatalog};

impl StreamKind {
    /// Build this stream's catalog entry from the API schema definitions
    ///
    /// Fails if the API does not publish this stream's definition.
    pub fn catalog_entry(self, schemas: &SchemaCatalog) -> Result<CatalogEntry> {
        let schema = map_definition(schemas, self.schema_name())
            .ok_or_else(|| Error::discovery(self.stream_id(), self.schema_name()))?;

        Ok(CatalogEntry::new(
            self.stream_id(),
            schema,
            self.key_properties(),
            self.replication_key().map(ToString::to_string),
        ))
    }

    /// Lazy page sequence over this stream's records
    pub fn get_records<'a>(self, transport: &'a dyn Transport, page_size: u32) -> Paginator<'a> {
        Paginator::new(transport, self.resource_path(), page_size)
    }
}
