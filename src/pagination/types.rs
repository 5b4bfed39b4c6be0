//! Pagination types
//!
//! The continuation cursor and the informational paging metadata that
//! Spotify attaches to every paging object.

use serde::{Deserialize, Serialize};

/// Continuation cursor: the full URL of the next page, as sent by the server
///
/// The URL is kept opaque. A missing or empty value means there is no
/// further page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Raw `next` value from the response
    pub next: Option<String>,
}

impl Cursor {
    /// Create a cursor from a raw `next` value
    pub fn new(next: Option<String>) -> Self {
        Self { next }
    }

    /// Create an exhausted cursor
    pub fn end() -> Self {
        Self { next: None }
    }

    /// Create a cursor pointing at `url`
    pub fn to(url: impl Into<String>) -> Self {
        Self {
            next: Some(url.into()),
        }
    }

    /// The next-page URL, if there is one
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|url| !url.is_empty())
    }

    /// Check if another page exists
    pub fn has_next(&self) -> bool {
        self.next_url().is_some()
    }
}

/// Spotify paging metadata
///
/// Informational only. Exhaustion is decided by [`Cursor`] alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// URL of this page
    pub href: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
    /// Requested page size
    pub limit: Option<u64>,
    /// Offset of the first item (offset-based paging)
    pub offset: Option<u64>,
    /// Total number of items available
    pub total: Option<u64>,
    /// `cursors.after` (cursor-based paging)
    pub after: Option<String>,
    /// `cursors.before` (cursor-based paging)
    pub before: Option<String>,
}
