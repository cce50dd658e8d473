//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::testing::{record, MockTransport};
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;

const PATH: &str = "/api/v1/users";

fn page_of(ids: &[&str]) -> Vec<crate::types::Record> {
    ids.iter().map(|id| record(json!({"id": id}))).collect()
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state() {
    let mut state = PaginationState::new();
    assert_eq!(state.page, 0);
    assert!(!state.done);

    state.next_page();
    state.add_fetched(3);
    assert_eq!(state.page, 1);
    assert_eq!(state.total_fetched, 3);

    state.mark_done();
    assert!(state.done);
}

#[test]
fn test_page_response_deserialize() {
    let response: PageResponse =
        serde_json::from_str(r#"{"result": [{"id": "1"}], "ok": true}"#).unwrap();
    assert_eq!(response.result.len(), 1);
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[tokio::test]
async fn test_stops_at_first_empty_page() {
    let transport =
        MockTransport::new().with_pages(PATH, vec![page_of(&["a", "b"]), page_of(&["c"])]);
    let mut paginator = Paginator::new(&transport, PATH, 2);

    let first = paginator.next_page().await.unwrap().unwrap();
    assert_eq!(first.index, 0);
    assert_eq!(first.records, page_of(&["a", "b"]));

    let second = paginator.next_page().await.unwrap().unwrap();
    assert_eq!(second.index, 1);
    assert_eq!(second.len(), 1);

    assert!(paginator.next_page().await.unwrap().is_none());
    assert_eq!(transport.requests().len(), 3);

    // Exhausted: no further fetches
    assert!(paginator.next_page().await.unwrap().is_none());
    assert_eq!(transport.requests().len(), 3);
    assert_eq!(paginator.state().total_fetched, 3);
}

#[tokio::test]
async fn test_short_page_does_not_end_pagination() {
    let transport = MockTransport::new().with_pages(
        PATH,
        vec![page_of(&["a"]), page_of(&["b"]), page_of(&["c"])],
    );
    let pages: Vec<_> = Paginator::new(&transport, PATH, 100)
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 3);
}

#[tokio::test]
async fn test_empty_resource_yields_nothing() {
    let transport = MockTransport::new();
    let mut paginator = Paginator::new(&transport, PATH, 10);

    assert!(paginator.next_page().await.unwrap().is_none());
    assert_eq!(transport.requests(), vec![PageRequest::new(PATH, 0, 10)]);
}

#[tokio::test]
async fn test_requests_consecutive_indices_with_page_size() {
    let transport = MockTransport::new().with_pages(
        PATH,
        vec![page_of(&["a"]), page_of(&["b"]), page_of(&["c"])],
    );
    let _: Vec<Page> = Paginator::new(&transport, PATH, 7)
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    let requests = transport.requests();
    let indices: Vec<_> = requests.iter().map(|r| r.page_index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert!(requests.iter().all(|r| r.page_size == 7));
}

#[tokio::test]
async fn test_fetches_one_page_per_pull() {
    let transport =
        MockTransport::new().with_pages(PATH, vec![page_of(&["a"]), page_of(&["b"])]);
    let mut paginator = Paginator::new(&transport, PATH, 1);
    assert!(transport.requests().is_empty());

    paginator.next_page().await.unwrap();
    assert_eq!(transport.requests().len(), 1);

    paginator.next_page().await.unwrap();
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_stops_at_page_limit() {
    let transport = MockTransport::new().endless(PATH);
    let mut paginator = Paginator::new(&transport, PATH, 1);

    let mut count = 0u32;
    while let Some(page) = paginator.next_page().await.unwrap() {
        assert_eq!(page.index, count);
        count += 1;
    }

    assert_eq!(count, MAX_API_PAGES);
    assert_eq!(transport.requests().len(), MAX_API_PAGES as usize);
    assert_eq!(
        transport.requests().last().map(|r| r.page_index),
        Some(MAX_API_PAGES - 1)
    );
    assert!(paginator.state().done);
}

#[tokio::test]
async fn test_error_propagates_then_ends() {
    let transport = MockTransport::new()
        .with_pages(PATH, vec![page_of(&["a"]), page_of(&["b"])])
        .failing_at(PATH, 1);
    let mut paginator = Paginator::new(&transport, PATH, 1);

    assert!(paginator.next_page().await.unwrap().is_some());

    let err = paginator.next_page().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));

    assert!(paginator.next_page().await.unwrap().is_none());
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_stream_yields_error_once() {
    let transport = MockTransport::new().failing_at(PATH, 0);
    let results: Vec<_> = futures::StreamExt::collect::<Vec<_>>(
        Paginator::new(&transport, PATH, 5).into_stream(),
    )
    .await;

    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}
