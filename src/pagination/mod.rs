//! Pagination module
//!
//! # Overview
//!
//! A [`Page`] is one decoded slice of a server-paginated collection. Its
//! [`Cursor`] is the server-supplied URL of the next page, and
//! [`Page::next_page_request`] derives the request for it without doing any
//! I/O. [`PageStream`] drives a [`Transport`](crate::http::Transport) to walk
//! every page lazily, one item at a time.

mod page;
mod stream;
mod types;

pub use page::Page;
pub use stream::{fetch_next_page, PageStream};
pub use types::{Cursor, PageMeta};

#[cfg(test)]
mod tests;
