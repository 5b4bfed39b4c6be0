//! Response decoder module
//!
//! # Overview
//!
//! Turns raw responses into typed values. Paging objects become
//! [`Page`](crate::pagination::Page)s through a [`PageDecoder`]; everything
//! else is decoded directly with [`decode_json`] and friends. Per-element
//! conversion goes through an [`ItemConverter`].

mod decoders;
mod types;

pub use decoders::{decode_json, decode_json_at, decode_optional, decode_with, PageDecoder};
pub use types::{from_fn, FnConverter, ItemConverter, SerdeConverter};
