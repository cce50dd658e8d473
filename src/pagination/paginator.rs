//! Page-number paginator
//!
//! Pulls pages `0, 1, 2, ...` from the transport until a page comes back
//! empty or [`MAX_API_PAGES`] pages have been fetched.

use super::types::{Page, PageRequest, PaginationState, MAX_API_PAGES};
use crate::error::{Error, Result};
use crate::http::Transport;
use futures::Stream;
use tracing::{debug, warn};

/// Lazy, single-pass sequence of pages for one resource path
///
/// Each call to [`Paginator::next_page`] performs at most one fetch. Once the
/// sequence has ended, by exhaustion, by the page ceiling or by a transport
/// failure, every later call returns `Ok(None)`. Fetching from page 0 again
/// requires a new paginator.
pub struct Paginator<'a> {
    transport: &'a dyn Transport,
    resource_path: String,
    page_size: u32,
    state: PaginationState,
}

impl<'a> Paginator<'a> {
    /// Create a paginator over `resource_path`
    pub fn new(transport: &'a dyn Transport, resource_path: impl Into<String>, page_size: u32) -> Self {
        Self {
            transport,
            resource_path: resource_path.into(),
            page_size,
            state: PaginationState::new(),
        }
    }

    /// The resource path being paginated
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Fetch the next page, or `None` once the sequence is over
    pub async fn next_page(&mut self) -> Result<Option<Page>> {
        if self.state.done {
            return Ok(None);
        }

        if self.state.page >= MAX_API_PAGES {
            warn!(
                "Reached the {MAX_API_PAGES} page limit for {}, stopping",
                self.resource_path
            );
            self.state.mark_done();
            return Ok(None);
        }

        let request = PageRequest::new(&self.resource_path, self.state.page, self.page_size);
        let response = match self.transport.fetch_page(&request).await {
            Ok(response) => response,
            Err(e) => {
                self.state.mark_done();
                return Err(e);
            }
        };

        if response.result.is_empty() {
            debug!(
                "Page {} of {} is empty, pagination complete",
                request.page_index, self.resource_path
            );
            self.state.mark_done();
            return Ok(None);
        }

        self.state.next_page();
        self.state.add_fetched(response.result.len() as u64);

        Ok(Some(Page {
            index: request.page_index,
            records: response.result,
        }))
    }

    /// Turn the paginator into a `Stream` of pages
    ///
    /// The stream ends after the first error it yields.
    pub fn into_stream(self) -> impl Stream<Item = Result<Page>> + Send + 'a {
        futures::stream::try_unfold(self, |mut paginator| async move {
            let page = paginator.next_page().await?;
            Ok::<_, Error>(page.map(|page| (page, paginator)))
        })
    }
}

impl std::fmt::Debug for Paginator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("resource_path", &self.resource_path)
            .field("page_size", &self.page_size)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
