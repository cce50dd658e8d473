// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # tap-nikabot
//!
//! A Singer tap extracting users, roles, groups and teams from the Nikabot
//! API.
//!
//! ## Features
//!
//! - **Discovery**: Catalog built from the API's published Swagger definitions
//! - **Bounded Pagination**: Lazy `?limit&page` paging that stops at the first
//!   empty page or after `MAX_API_PAGES`
//! - **Incremental Watermarks**: Per-stream maximum of the replication key,
//!   emitted as Singer STATE once the stream completes
//! - **HTTP**: Retry with backoff and client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tap_nikabot::{catalog, NikabotTransport, SingerWriter, SyncEngine, TapConfig};
//!
//! #[tokio::main]
//! async fn main() -> tap_nikabot::Result<()> {
//!     let config = TapConfig::new("my-token");
//!     let transport = NikabotTransport::new(&config)?;
//!
//!     let catalog = catalog::discover(&transport).await?;
//!     let mut writer = SingerWriter::new(std::io::stdout());
//!     SyncEngine::new(&transport).sync(&catalog, &mut writer).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     CLI (--discover | sync)                  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬──────────────┬──┴─────────┬────────────┬─────────┐
//! │  Catalog  │   Streams    │   Engine   │   Output   │  State  │
//! ├───────────┼──────────────┼────────────┼────────────┼─────────┤
//! │ Discovery │ users roles  │ Watermark  │ SCHEMA     │ Merge   │
//! │ Metadata  │ groups teams │ Stats      │ RECORD     │ Persist │
//! │ Selection │ Paginator    │            │ STATE      │         │
//! └───────────┴──────────────┴────────────┴────────────┴─────────┘
//!                               │
//! ┌──────────────────────────────────────────────────────────────┐
//! │        Transport: HTTP client, retry, rate limiting          │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the tap
pub mod error;

/// Common types and type aliases
pub mod types;

/// Tap configuration
pub mod config;

/// HTTP client, rate limiting and the API transport
pub mod http;

/// Page sequencing over the API
pub mod pagination;

/// Swagger to JSON Schema mapping
pub mod schema;

/// The set of extractable streams
pub mod streams;

/// Singer catalog and discovery
pub mod catalog;

/// State management and persistence
pub mod state;

/// Singer message output
pub mod output;

/// Main execution engine
pub mod engine;

/// Command-line interface
pub mod cli;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry};
pub use config::TapConfig;
pub use engine::{SyncConfig, SyncEngine, SyncStats};
pub use http::{NikabotTransport, Transport};
pub use output::{Message, SingerWriter, Sink};
pub use state::{State, StateManager};
pub use streams::StreamKind;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
