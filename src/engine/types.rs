//! Engine types
//!
//! Configuration and statistics for the sync engine.

use crate::config::{TapConfig, DEFAULT_PAGE_SIZE};

/// Configuration for sync operation
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Records requested per page
    pub page_size: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SyncConfig {
    /// Create a new sync config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

impl From<&TapConfig> for SyncConfig {
    fn from(config: &TapConfig) -> Self {
        Self::new().with_page_size(config.page_size)
    }
}

/// Statistics from a sync operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Total records synced
    pub records_synced: usize,
    /// Total non-empty pages fetched
    pub pages_fetched: usize,
    /// Streams synced to completion
    pub streams_synced: usize,
    /// State messages emitted
    pub states_emitted: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page of `count` records
    pub fn add_page(&mut self, count: usize) {
        self.pages_fetched += 1;
        self.records_synced += count;
    }

    /// Add a stream
    pub fn add_stream(&mut self) {
        self.streams_synced += 1;
    }

    /// Add a state message
    pub fn add_state(&mut self) {
        self.states_emitted += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
