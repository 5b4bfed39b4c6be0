//! Tests for pagination module

use super::*;
use crate::decode::{ItemConverter, PageDecoder, SerdeConverter};
use crate::error::Error;
use crate::http::{MockTransport, RawResponse, RequestDescriptor, RequestOptions, Transport};
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use test_case::test_case;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Thing {
    id: String,
}

fn thing(id: &str) -> Thing {
    Thing { id: id.to_string() }
}

fn converter() -> Arc<dyn ItemConverter<Thing>> {
    Arc::new(SerdeConverter::<Thing>::new())
}

fn page_url(n: usize) -> String {
    format!("https://api.example/v1/things?offset={}", n * 2)
}

/// Script `pages` pages of two items each, chained by `next` URLs.
/// Returns the raw response of the first page; later pages are served by
/// the transport.
fn script_pages(transport: &MockTransport, pages: usize) -> RawResponse {
    let mut first = None;
    for n in 0..pages {
        let next = if n + 1 < pages {
            json!(page_url(n + 1))
        } else {
            json!(null)
        };
        let body = json!({
            "next": next,
            "items": [{"id": format!("{n}-a")}, {"id": format!("{n}-b")}]
        });
        if n == 0 {
            first = Some(RawResponse::json(&body));
        } else {
            transport.respond_json(page_url(n), body);
        }
    }
    first.unwrap_or_default()
}

async fn first_page(transport: &MockTransport, pages: usize) -> Page<Thing> {
    let request = RequestDescriptor::get("/things").query("limit", 2);
    let options = RequestOptions::new().timeout(Duration::from_secs(3));
    // The first request goes through the transport like any other
    transport.respond("/things?limit=2", script_pages(transport, pages));
    let response = transport.execute(&request, &options).await.unwrap();
    PageDecoder::new()
        .decode(&response, converter().as_ref(), request, options)
        .unwrap()
}

fn stream_from(transport: &MockTransport, first: Page<Thing>) -> PageStream<Thing> {
    PageStream::new(
        first,
        Arc::new(transport.clone()),
        PageDecoder::new(),
        converter(),
    )
}

// ============================================================================
// Cursor Tests
// ============================================================================

#[test_case(None, false ; "absent")]
#[test_case(Some(""), false ; "empty string")]
#[test_case(Some("https://api.example/v1/things?offset=2"), true ; "url")]
fn test_cursor_has_next(next: Option<&str>, expected: bool) {
    let cursor = Cursor::new(next.map(ToString::to_string));
    assert_eq!(cursor.has_next(), expected);
    assert_eq!(cursor.next_url().is_some(), expected);
}

#[test]
fn test_cursor_constructors() {
    assert!(!Cursor::end().has_next());
    assert!(!Cursor::default().has_next());
    assert_eq!(Cursor::to("/next").next_url(), Some("/next"));
}

// ============================================================================
// Page Tests
// ============================================================================

#[test_case(None ; "null cursor")]
#[test_case(Some("") ; "empty cursor")]
fn test_exhausted_page_has_no_next_request(next: Option<&str>) {
    let page = Page::new(
        vec![thing("a")],
        Cursor::new(next.map(ToString::to_string)),
        RequestDescriptor::get("/things"),
        RequestOptions::new(),
    );
    assert!(!page.has_next());
    assert!(page.next_page_request().is_none());
}

#[test]
fn test_next_page_request_targets_cursor() {
    let request = RequestDescriptor::get("/things")
        .query("limit", 2)
        .header("Accept-Language", "sv");
    let options = RequestOptions::new()
        .base_url("https://api.example/v1")
        .timeout(Duration::from_secs(7))
        .header("X-Trace", "abc");

    let page = Page::new(
        vec![thing("a")],
        Cursor::to("https://api.example/v1/things?offset=20&limit=2"),
        request.clone(),
        options.clone(),
    );

    let (next, next_options) = page.next_page_request().unwrap();
    assert_eq!(next.method, request.method);
    assert_eq!(next.headers, request.headers);
    assert_eq!(next.body, request.body);
    assert_eq!(next.path, "https://api.example/v1/things");
    assert_eq!(next.query_value("offset").as_deref(), Some("20"));
    assert_eq!(next_options, options);

    // Deriving the next request leaves the page untouched
    assert_eq!(page.request(), &request);
}

#[test]
fn test_items_idempotent() {
    let page = Page::new(
        vec![thing("a"), thing("b")],
        Cursor::end(),
        RequestDescriptor::get("/things"),
        RequestOptions::new(),
    );

    let first: Vec<Thing> = page.items().to_vec();
    let second: Vec<Thing> = page.items().to_vec();
    assert_eq!(first, second);
    assert!(std::ptr::eq(page.items(), page.items()));
}

#[test]
fn test_page_map_and_iter() {
    let page = Page::new(
        vec![thing("a"), thing("b")],
        Cursor::to("/next"),
        RequestDescriptor::get("/things"),
        RequestOptions::new(),
    )
    .with_meta(PageMeta {
        total: Some(4),
        ..Default::default()
    });

    let ids: Vec<&str> = page.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    let mapped = page.map(|t| t.id);
    assert_eq!(mapped.items(), &["a".to_string(), "b".to_string()]);
    assert_eq!(mapped.cursor().next_url(), Some("/next"));
    assert_eq!(mapped.meta().total, Some(4));

    let owned: Vec<String> = mapped.into_iter().collect();
    assert_eq!(owned.len(), 2);
}

#[test]
fn test_page_empty() {
    let page: Page<Thing> = Page::empty(RequestDescriptor::get("/x"), RequestOptions::new());
    assert!(page.is_empty());
    assert_eq!(page.len(), 0);
    assert!(page.next_page_request().is_none());
}

#[test]
fn test_fetch_after_last_page_does_no_io() {
    let transport = MockTransport::new();
    let page: Page<Thing> = Page::empty(RequestDescriptor::get("/x"), RequestOptions::new());

    let next = tokio_test::block_on(fetch_next_page(
        &transport,
        &page,
        &PageDecoder::new(),
        converter().as_ref(),
    ))
    .unwrap();
    assert!(next.is_none());
    assert_eq!(transport.calls(), 0);
}

// ============================================================================
// Advancing Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_next_page() {
    let transport = MockTransport::new();
    let first = first_page(&transport, 2).await;
    let snapshot = first.clone();

    let second = fetch_next_page(&transport, &first, &PageDecoder::new(), converter().as_ref())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(second.items(), &[thing("1-a"), thing("1-b")]);
    assert!(!second.has_next());
    // Advancing leaves the previous page unchanged
    assert_eq!(first, snapshot);
    assert_eq!(second.options(), first.options());

    let done = fetch_next_page(&transport, &second, &PageDecoder::new(), converter().as_ref())
        .await
        .unwrap();
    assert!(done.is_none());
    // first request + one advance
    assert_eq!(transport.calls(), 2);
}

#[test_case(1 ; "single page")]
#[test_case(2 ; "two pages")]
#[test_case(5 ; "five pages")]
#[tokio::test]
async fn test_stream_yields_all_items_in_order(pages: usize) {
    let transport = MockTransport::new();
    let first = first_page(&transport, pages).await;

    let mut stream = stream_from(&transport, first);
    let items = stream.collect_all().await.unwrap();

    let expected: Vec<Thing> = (0..pages)
        .flat_map(|n| [thing(&format!("{n}-a")), thing(&format!("{n}-b"))])
        .collect();
    assert_eq!(items, expected);
    assert_eq!(stream.pages_fetched(), pages);
    // N transport calls: the first one plus N - 1 advances
    assert_eq!(transport.calls(), pages);
    assert!(stream.is_done());
}

#[tokio::test]
async fn test_stream_carries_options_forward() {
    let transport = MockTransport::new();
    let first = first_page(&transport, 3).await;
    let options = first.options().clone();

    stream_from(&transport, first).collect_all().await.unwrap();

    for (_, sent) in transport.requests() {
        assert_eq!(sent, options);
    }
}

#[tokio::test]
async fn test_stream_is_lazy() {
    let transport = MockTransport::new();
    let first = first_page(&transport, 3).await;
    let mut stream = stream_from(&transport, first);

    // The first page's items need no further requests
    assert_eq!(stream.take(2).await.unwrap().len(), 2);
    assert_eq!(transport.calls(), 1);

    // The third item forces the second page
    assert_eq!(stream.next().await.unwrap(), Some(thing("1-a")));
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_stream_take_bounded() {
    let transport = MockTransport::new();
    let first = first_page(&transport, 5).await;
    let mut stream = stream_from(&transport, first);

    let items = stream.take(3).await.unwrap();
    assert_eq!(items, vec![thing("0-a"), thing("0-b"), thing("1-a")]);
    assert_eq!(stream.pages_fetched(), 2);
}

#[tokio::test]
async fn test_stream_max_pages() {
    let transport = MockTransport::new();
    let first = first_page(&transport, 5).await;
    let mut stream = stream_from(&transport, first).with_max_pages(2);

    let items = stream.collect_all().await.unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_stream_stops_on_item_decode_error() {
    let transport = MockTransport::new();
    let first = Page::new(
        vec![thing("a")],
        Cursor::to("/bad"),
        RequestDescriptor::get("/things"),
        RequestOptions::new(),
    );
    transport.respond_json(
        "/bad",
        json!({"next": "/never", "items": [{"id": "b"}, {"oops": true}]}),
    );

    let mut stream = stream_from(&transport, first);
    assert_eq!(stream.next().await.unwrap(), Some(thing("a")));

    let err = stream.next().await.unwrap_err();
    assert!(matches!(err, Error::ItemDecode { index: 1, .. }));

    // No partial page, no further requests
    assert_eq!(stream.next().await.unwrap(), None);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_stream_propagates_transport_error() {
    let transport = MockTransport::new();
    let first = Page::new(
        vec![thing("a")],
        Cursor::to("/down"),
        RequestDescriptor::get("/things"),
        RequestOptions::new(),
    );
    transport.fail("/down", 502, "bad gateway");

    let mut stream = stream_from(&transport, first);
    let err = stream.collect_all().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert!(stream.is_done());
}

#[tokio::test]
async fn test_stream_empty_body_ends_traversal() {
    let transport = MockTransport::new();
    let first = Page::new(
        vec![thing("a")],
        Cursor::to("/empty"),
        RequestDescriptor::get("/things"),
        RequestOptions::new(),
    );
    transport.respond("/empty", RawResponse::no_content());

    let items = stream_from(&transport, first).collect_all().await.unwrap();
    assert_eq!(items, vec![thing("a")]);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_into_stream() {
    let transport = MockTransport::new();
    let first = first_page(&transport, 3).await;

    let items: Vec<Thing> = stream_from(&transport, first)
        .into_stream()
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(items.len(), 6);
    assert_eq!(items[5], thing("2-b"));
}

#[tokio::test]
async fn test_into_stream_ends_after_error() {
    let transport = MockTransport::new();
    let first = Page::new(
        vec![thing("a")],
        Cursor::to("/down"),
        RequestDescriptor::get("/things"),
        RequestOptions::new(),
    );
    transport.fail("/down", 500, "");

    let results: Vec<_> = stream_from(&transport, first).into_stream().collect().await;
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}
