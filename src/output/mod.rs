//! Output module
//!
//! Where synced data goes.
//!
//! # Overview
//!
//! This module provides:
//! - `Sink` - the seam the sync engine writes schemas, records and state to
//! - `Message` - the Singer message types
//! - `SingerWriter` - a sink writing Singer JSON lines to any `Write`

mod messages;
mod writer;

pub use messages::Message;
pub use writer::SingerWriter;

use crate::catalog::CatalogEntry;
use crate::error::Result;
use crate::state::State;
use crate::types::Record;
use async_trait::async_trait;

/// Destination for a sync run
///
/// Calls arrive in order: one `write_schema` per stream before any of its
/// records, then zero or more `write_records`, then at most one
/// `write_state`.
#[async_trait]
pub trait Sink: Send {
    /// Announce a stream's schema
    async fn write_schema(&mut self, entry: &CatalogEntry) -> Result<()>;

    /// Write one page of records
    async fn write_records(&mut self, stream: &str, records: &[Record]) -> Result<()>;

    /// Record watermarks
    async fn write_state(&mut self, state: &State) -> Result<()>;
}
