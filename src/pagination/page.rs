//! The page value

use super::types::{Cursor, PageMeta};
use crate::http::{RequestDescriptor, RequestOptions};

/// One fetched slice of a paginated collection
///
/// A page is immutable once built: items are decoded exactly once, and
/// advancing always produces a new page. It holds no connection or other
/// resource, so it can be cloned and shared freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    cursor: Cursor,
    meta: PageMeta,
    request: RequestDescriptor,
    options: RequestOptions,
}

impl<T> Page<T> {
    /// Create a page from already-decoded items
    pub fn new(
        items: Vec<T>,
        cursor: Cursor,
        request: RequestDescriptor,
        options: RequestOptions,
    ) -> Self {
        Self {
            items,
            cursor,
            meta: PageMeta::default(),
            request,
            options,
        }
    }

    /// Create an empty, exhausted page
    pub fn empty(request: RequestDescriptor, options: RequestOptions) -> Self {
        Self::new(Vec::new(), Cursor::end(), request, options)
    }

    /// Attach paging metadata
    #[must_use]
    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Items on this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take ownership of the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Iterate over the items on this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Continuation cursor
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Paging metadata
    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// The request that produced this page
    pub fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    /// The options used for this page's request
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Check if another page exists
    pub fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    /// Request for the next page, or `None` when exhausted.
    ///
    /// The returned descriptor targets the cursor URL and keeps this page's
    /// method, headers and body; the options are passed through unchanged.
    pub fn next_page_request(&self) -> Option<(RequestDescriptor, RequestOptions)> {
        let url = self.cursor.next_url()?;
        Some((self.request.retarget(url), self.options.clone()))
    }

    /// Convert the items, keeping cursor, metadata and request context
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            cursor: self.cursor,
            meta: self.meta,
            request: self.request,
            options: self.options,
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
