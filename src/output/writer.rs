//! Singer JSON-lines writer

use super::messages::Message;
use super::Sink;
use crate::catalog::CatalogEntry;
use crate::error::{Error, Result};
use crate::state::{State, StateManager};
use crate::types::Record;
use async_trait::async_trait;
use chrono::Utc;
use std::io::Write;
use tracing::debug;

/// Writes Singer messages as JSON lines
///
/// Every emitted STATE is also merged into the attached [`StateManager`],
/// so the runner can persist the final state after the sync.
pub struct SingerWriter<W> {
    writer: W,
    state: StateManager,
    messages_written: u64,
}

impl<W: Write + Send> SingerWriter<W> {
    /// Create a writer with its own in-memory state
    pub fn new(writer: W) -> Self {
        Self::with_state(writer, StateManager::in_memory())
    }

    /// Create a writer merging emitted state into `state`
    pub fn with_state(writer: W, state: StateManager) -> Self {
        Self {
            writer,
            state,
            messages_written: 0,
        }
    }

    /// State accumulated from emitted STATE messages
    pub fn state(&self) -> &StateManager {
        &self.state
    }

    /// Number of messages written so far
    pub fn messages_written(&self) -> u64 {
        self.messages_written
    }

    /// Consume the writer, returning the underlying output
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a single message line
    pub fn write_message(&mut self, message: &Message) -> Result<()> {
        serde_json::to_writer(&mut self.writer, message)
            .map_err(|e| Error::output(format!("Failed to serialize message: {e}")))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| Error::output(format!("Failed to write message: {e}")))?;
        self.messages_written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::output(format!("Failed to flush output: {e}")))
    }
}

#[async_trait]
impl<W: Write + Send> Sink for SingerWriter<W> {
    async fn write_schema(&mut self, entry: &CatalogEntry) -> Result<()> {
        self.write_message(&Message::schema(entry))?;
        self.flush()
    }

    async fn write_records(&mut self, stream: &str, records: &[Record]) -> Result<()> {
        let extracted = Utc::now();
        for record in records {
            self.write_message(&Message::record(stream, record.clone(), extracted))?;
        }
        debug!("Wrote {} records for {}", records.len(), stream);
        self.flush()
    }

    async fn write_state(&mut self, state: &State) -> Result<()> {
        self.state.merge(state).await;
        self.write_message(&Message::state(state.clone()))?;
        self.flush()
    }
}

impl<W> std::fmt::Debug for SingerWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingerWriter")
            .field("state", &self.state)
            .field("messages_written", &self.messages_written)
            .finish_non_exhaustive()
    }
}
