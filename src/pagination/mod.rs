//! Pagination module
//!
//! The Nikabot API pages with `?limit=N&page=K`, `K` starting at 0, and
//! signals the end of a resource with an empty `result` array.
//!
//! # Overview
//!
//! - `Paginator` - lazy, bounded, single-pass page sequence for one path
//! - `PageRequest` / `PageResponse` - the transport contract
//! - `MAX_API_PAGES` - ceiling that stops a never-ending resource

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{Page, PageRequest, PageResponse, PaginationState, MAX_API_PAGES};

#[cfg(test)]
mod tests;
