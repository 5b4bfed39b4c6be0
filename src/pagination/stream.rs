//! Auto-pagination
//!
//! Walks pages strictly in cursor order: a page is only requested after the
//! previous page's cursor has been read, and never two at once.

use super::page::Page;
use crate::decode::{ItemConverter, PageDecoder};
use crate::error::Result;
use crate::http::{RequestDescriptor, RequestOptions, Transport};
use futures::Stream;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::trace;

/// Fetch and decode the page after `page`, or `None` if `page` is the last
pub async fn fetch_next_page<T>(
    transport: &dyn Transport,
    page: &Page<T>,
    decoder: &PageDecoder,
    converter: &dyn ItemConverter<T>,
) -> Result<Option<Page<T>>> {
    let Some((request, options)) = page.next_page_request() else {
        return Ok(None);
    };

    let response = transport.execute(&request, &options).await?;
    decoder
        .decode(&response, converter, request, options)
        .map(Some)
}

/// Lazy, forward-only sequence over every item of a paginated collection
///
/// Yields the first page's items, then fetches further pages on demand.
/// Once advanced past a page its items are not revisited. An error ends the
/// traversal; later calls to [`next`](Self::next) return `Ok(None)`.
pub struct PageStream<T> {
    transport: Arc<dyn Transport>,
    decoder: PageDecoder,
    converter: Arc<dyn ItemConverter<T>>,
    buffer: VecDeque<T>,
    next_request: Option<(RequestDescriptor, RequestOptions)>,
    pages_fetched: usize,
    max_pages: Option<usize>,
    done: bool,
}

impl<T> PageStream<T> {
    /// Start from an already fetched first page
    pub fn new(
        first: Page<T>,
        transport: Arc<dyn Transport>,
        decoder: PageDecoder,
        converter: Arc<dyn ItemConverter<T>>,
    ) -> Self {
        let next_request = first.next_page_request();
        Self {
            transport,
            decoder,
            converter,
            buffer: first.into_items().into(),
            next_request,
            pages_fetched: 1,
            max_pages: None,
            done: false,
        }
    }

    /// Stop after `max_pages` pages have been fetched (including the first)
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Number of pages fetched so far, including the first
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Check if the traversal is finished
    pub fn is_done(&self) -> bool {
        self.done || (self.buffer.is_empty() && self.next_request.is_none())
    }

    /// Next item, fetching the next page when the current one is used up
    pub async fn next(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }

            if self.done {
                return Ok(None);
            }

            if self.max_pages.is_some_and(|max| self.pages_fetched >= max) {
                trace!("Page limit reached after {} pages", self.pages_fetched);
                self.done = true;
                return Ok(None);
            }

            let Some((request, options)) = self.next_request.take() else {
                self.done = true;
                return Ok(None);
            };

            trace!(
                "Fetching page {}: {} {}",
                self.pages_fetched + 1,
                request.method,
                request.path
            );

            let page = match self.fetch(request, options).await {
                Ok(page) => page,
                Err(e) => {
                    self.done = true;
                    return Err(e);
                }
            };

            self.pages_fetched += 1;
            self.next_request = page.next_page_request();
            self.buffer.extend(page.into_items());
        }
    }

    async fn fetch(&self, request: RequestDescriptor, options: RequestOptions) -> Result<Page<T>> {
        let response = self.transport.execute(&request, &options).await?;
        self.decoder
            .decode(&response, self.converter.as_ref(), request, options)
    }

    /// Collect all remaining items.
    ///
    /// Fetches every remaining page; prefer [`take`](Self::take) for large
    /// collections.
    pub async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Take up to `n` items
    pub async fn take(&mut self, n: usize) -> Result<Vec<T>> {
        let mut items = Vec::with_capacity(n.min(self.buffer.len()));
        while items.len() < n {
            match self.next().await? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    /// Convert into a `futures` stream of items
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        futures::stream::unfold(self, |mut stream| async move {
            match stream.next().await {
                Ok(Some(item)) => Some((Ok(item), stream)),
                Ok(None) => None,
                Err(e) => Some((Err(e), stream)),
            }
        })
    }
}

impl<T> std::fmt::Debug for PageStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStream")
            .field("decoder", &self.decoder)
            .field("buffered", &self.buffer.len())
            .field("has_next_request", &self.next_request.is_some())
            .field("pages_fetched", &self.pages_fetched)
            .field("max_pages", &self.max_pages)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
