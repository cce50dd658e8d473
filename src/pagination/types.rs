//! Pagination types
//!
//! Defines the request/response shapes exchanged with the transport and the
//! bookkeeping the paginator keeps between pulls.

use crate::types::Record;
use serde::{Deserialize, Serialize};

/// Hard ceiling on pages fetched for a single resource path
pub const MAX_API_PAGES: u32 = 10_000;

/// Everything the transport needs to fetch one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// API path of the resource, e.g. `/api/v1/users`
    pub resource_path: String,
    /// Zero-based page number
    pub page_index: u32,
    /// Records per page (always positive)
    pub page_size: u32,
}

impl PageRequest {
    /// Create a new page request
    pub fn new(resource_path: impl Into<String>, page_index: u32, page_size: u32) -> Self {
        Self {
            resource_path: resource_path.into(),
            page_index,
            page_size,
        }
    }
}

/// Body of a paginated API response
///
/// An empty `result` signals that the resource is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Records on this page
    pub result: Vec<Record>,
}

impl PageResponse {
    /// Create a response holding the given records
    pub fn new(result: Vec<Record>) -> Self {
        Self { result }
    }

    /// Create an empty (terminal) response
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One non-empty page of records, in the order the API returned them
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Page number this page was fetched with
    pub index: u32,
    /// Records on the page
    pub records: Vec<Record>,
}

impl Page {
    /// Number of records on the page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the page holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

/// Tracks pagination progress for one resource path
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Next page number to request
    pub page: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}
