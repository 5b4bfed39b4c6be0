//! Response decoders
//!
//! [`PageDecoder`] builds a [`Page`] from a paging object and tolerates empty
//! or non-JSON bodies. [`decode_json`] is the strict path for single-object
//! endpoints.

use super::types::ItemConverter;
use crate::error::{Error, Result};
use crate::http::{RawResponse, RequestDescriptor, RequestOptions};
use crate::pagination::{Cursor, Page, PageMeta};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::any::type_name;
use tracing::{debug, warn};

// ============================================================================
// Page Decoder
// ============================================================================

/// Decodes paging objects (`{"next": ..., "items": [...]}`) into pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDecoder {
    /// Dot-separated path to the paging object, if it is wrapped
    envelope: Option<String>,
}

impl PageDecoder {
    /// Decoder for a top-level paging object
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder for a paging object nested under `path` (e.g. `"tracks"`)
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            envelope: Some(path.into()),
        }
    }

    /// The envelope path, if any
    pub fn envelope(&self) -> Option<&str> {
        self.envelope.as_deref()
    }

    /// Decode a response into a page.
    ///
    /// Empty bodies, invalid JSON, non-object values and a missing envelope
    /// yield an empty, exhausted page. An element rejected by `converter`
    /// fails the whole page, as does an `items` field that is not an array.
    pub fn decode<T>(
        &self,
        response: &RawResponse,
        converter: &dyn ItemConverter<T>,
        request: RequestDescriptor,
        options: RequestOptions,
    ) -> Result<Page<T>> {
        let Some(root) = parse_body(response) else {
            return Ok(Page::empty(request, options));
        };

        let paging = match &self.envelope {
            Some(path) => extract_simple_path(&root, path),
            None => Some(&root),
        };

        let Some(Value::Object(paging)) = paging else {
            debug!(
                "No paging object at {:?}, treating as empty page",
                self.envelope
            );
            return Ok(Page::empty(request, options));
        };

        let items = decode_items(paging, converter)?;
        let cursor = Cursor::new(string_field(paging, "next"));
        let meta = read_meta(paging);

        debug!(
            "Decoded page: {} items, has_next={}",
            items.len(),
            cursor.has_next()
        );

        Ok(Page::new(items, cursor, request, options).with_meta(meta))
    }
}

/// Parse a body for the page path; `None` means "no decodable content"
fn parse_body(response: &RawResponse) -> Option<Value> {
    if response.is_empty() {
        debug!("Empty response body (status {})", response.status);
        return None;
    }

    match serde_json::from_slice::<Value>(&response.body) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Response body is not JSON, treating as empty page: {e}");
            None
        }
    }
}

fn decode_items<T>(
    paging: &Map<String, Value>,
    converter: &dyn ItemConverter<T>,
) -> Result<Vec<T>> {
    let elements = match paging.get("items") {
        None => return Ok(Vec::new()),
        Some(Value::Array(elements)) => elements,
        Some(other) => {
            return Err(Error::decode(
                type_name::<Vec<T>>(),
                other.to_string(),
                "`items` is not an array",
            ))
        }
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            converter
                .convert(element)
                .map_err(|e| Error::item_decode(index, e.to_string()))
        })
        .collect()
}

fn read_meta(paging: &Map<String, Value>) -> PageMeta {
    let cursors = paging.get("cursors").and_then(Value::as_object);

    PageMeta {
        href: string_field(paging, "href"),
        previous: string_field(paging, "previous"),
        limit: paging.get("limit").and_then(Value::as_u64),
        offset: paging.get("offset").and_then(Value::as_u64),
        total: paging.get("total").and_then(Value::as_u64),
        after: cursors.and_then(|c| string_field(c, "after")),
        before: cursors.and_then(|c| string_field(c, "before")),
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

/// Walk a dot-separated path through nested objects
fn extract_simple_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    path.split('.')
        .filter(|part| !part.is_empty())
        .try_fold(value, |current, part| match current {
            Value::Object(map) => map.get(part),
            _ => None,
        })
}

// ============================================================================
// Direct Decoding
// ============================================================================

/// Decode a whole response body into `T`.
///
/// Unlike page decoding this is strict: an empty body, invalid JSON or a
/// shape mismatch is an [`Error::Decode`] carrying the body and the target
/// type name.
pub fn decode_json<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    serde_json::from_slice(&response.body)
        .map_err(|e| Error::decode(type_name::<T>(), response.text(), e.to_string()))
}

/// Decode the value found under `path` (e.g. `{"albums": [...]}`)
pub fn decode_json_at<T: DeserializeOwned>(response: &RawResponse, path: &str) -> Result<T> {
    let root: Value = serde_json::from_slice(&response.body)
        .map_err(|e| Error::decode(type_name::<T>(), response.text(), e.to_string()))?;

    let value = extract_simple_path(&root, path).ok_or_else(|| {
        Error::decode(
            type_name::<T>(),
            response.text(),
            format!("missing field `{path}`"),
        )
    })?;

    T::deserialize(value)
        .map_err(|e| Error::decode(type_name::<T>(), response.text(), e.to_string()))
}

/// Decode a response that may legitimately be empty (204 No Content)
pub fn decode_optional<T: DeserializeOwned>(response: &RawResponse) -> Result<Option<T>> {
    if response.status == 204 || response.is_empty() {
        return Ok(None);
    }
    decode_json(response).map(Some)
}

/// Decode a whole response body through a converter
pub fn decode_with<T>(response: &RawResponse, converter: &dyn ItemConverter<T>) -> Result<T> {
    let value: Value = serde_json::from_slice(&response.body)
        .map_err(|e| Error::decode(type_name::<T>(), response.text(), e.to_string()))?;

    converter
        .convert(&value)
        .map_err(|e| Error::decode(type_name::<T>(), response.text(), e.to_string()))
}
