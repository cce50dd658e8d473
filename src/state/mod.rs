//! State management module
//!
//! Handles watermark tracking and persistence between runs.
//!
//! # Overview
//!
//! The state module provides:
//! - `State` - stream id to watermark map, serialised as a flat object
//! - `StateManager` - shared run state with last-write-wins merging
//! - Atomic persistence of the merged state

mod manager;
mod types;

pub use manager::StateManager;
pub use types::State;
