//! Execution engine module
//!
//! Main read loop and stream orchestration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SyncEngine` - Syncs the selected catalog streams, one after another
//! - `Watermark` - Running maximum of a stream's replication key
//! - `SyncConfig` / `SyncStats` - Configuration and counters

mod types;
mod watermark;

pub use types::{SyncConfig, SyncStats};
pub use watermark::Watermark;

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::output::Sink;
use crate::state::State;
use crate::streams::StreamKind;
use std::time::Instant;
use tracing::{debug, info};

/// Sync engine for orchestrating data extraction
pub struct SyncEngine<'a> {
    /// Transport used for every page fetch
    transport: &'a dyn Transport,
    /// Sync configuration
    config: SyncConfig,
    /// Statistics
    stats: SyncStats,
}

impl<'a> SyncEngine<'a> {
    /// Create a new sync engine
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            transport,
            config: SyncConfig::default(),
            stats: SyncStats::default(),
        }
    }

    /// Set sync configuration
    #[must_use]
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Get statistics
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Sync every selected stream in catalog order
    ///
    /// Streams run strictly one after another. The first failure aborts the
    /// run; state already emitted for earlier streams stays emitted.
    pub async fn sync(&mut self, catalog: &Catalog, sink: &mut dyn Sink) -> Result<SyncStats> {
        let start = Instant::now();

        let selected = catalog
            .selected_streams()
            .map(|entry| {
                let kind = StreamKind::from_stream_id(&entry.tap_stream_id).ok_or_else(|| {
                    Error::config(format!(
                        "Catalog selects unknown stream '{}'",
                        entry.tap_stream_id
                    ))
                })?;
                Ok((kind, entry))
            })
            .collect::<Result<Vec<_>>>()?;

        if selected.is_empty() {
            info!("No streams selected");
        }

        for (kind, entry) in selected {
            self.sync_stream(kind, entry, sink).await?;
        }

        self.stats.set_duration(start.elapsed().as_millis() as u64);
        info!(
            "Sync complete: {} streams, {} records in {}ms",
            self.stats.streams_synced, self.stats.records_synced, self.stats.duration_ms
        );
        Ok(self.stats.clone())
    }

    /// Sync one stream: schema, then every page, then its watermark
    ///
    /// Returns the watermark emitted as state, if any.
    pub async fn sync_stream(
        &mut self,
        kind: StreamKind,
        entry: &CatalogEntry,
        sink: &mut dyn Sink,
    ) -> Result<Option<String>> {
        let stream_id = entry.tap_stream_id.as_str();
        info!("Syncing stream: {stream_id}");

        sink.write_schema(entry).await?;

        let bookmark_column = entry.replication_key.as_deref();
        let mut watermark = Watermark::new();
        let mut records = 0usize;
        let mut pages = kind.get_records(self.transport, self.config.page_size);

        while let Some(page) = pages
            .next_page()
            .await
            .map_err(|e| Error::sync(stream_id, kind.resource_path(), e))?
        {
            debug!(
                "Page {} of {stream_id}: {} records",
                page.index,
                page.len()
            );
            sink.write_records(stream_id, &page.records).await?;

            if let Some(column) = bookmark_column {
                watermark.observe_page(&page.records, column);
            }
            records += page.len();
            self.stats.add_page(page.len());
        }

        let emitted = match (bookmark_column, watermark.value()) {
            (Some(_), Some(max)) => {
                sink.write_state(&State::singleton(stream_id, max)).await?;
                self.stats.add_state();
                Some(max.to_string())
            }
            _ => None,
        };

        self.stats.add_stream();
        info!("Completed sync for {stream_id}: {records} records");
        Ok(emitted)
    }
}

impl std::fmt::Debug for SyncEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncEngine")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
