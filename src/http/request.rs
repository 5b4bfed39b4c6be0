//! Request and response values exchanged with a [`Transport`](super::Transport)
//!
//! A [`RequestDescriptor`] records everything needed to reissue a call, and
//! [`RequestOptions`] carries transport-level settings that travel unchanged
//! from one page fetch to the next.

use crate::types::{JsonValue, Method, QueryPairs, StringMap};
use bytes::Bytes;
use std::borrow::Cow;
use std::time::Duration;

// ============================================================================
// Request Descriptor
// ============================================================================

/// Immutable description of one HTTP call
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, or an absolute URL
    pub path: String,
    /// Query parameters, in order
    pub query: QueryPairs,
    /// Query string copied verbatim from a cursor URL, sent before `query`
    pub raw_query: Option<String>,
    /// Request-specific headers
    pub headers: StringMap,
    /// JSON body
    pub body: Option<JsonValue>,
}

impl RequestDescriptor {
    /// Create a descriptor for the given method and path
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    /// Create a GET descriptor
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST descriptor
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a PUT descriptor
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Create a DELETE descriptor
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a query parameter when a value is present
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up the first query value for `key`, decoded
    pub fn query_value(&self, key: &str) -> Option<Cow<'_, str>> {
        let raw = self.raw_query.as_deref().unwrap_or_default();
        url::form_urlencoded::parse(raw.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .or_else(|| {
                self.query
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| Cow::Borrowed(v.as_str()))
            })
    }

    /// Encoded query string: the raw cursor query followed by `query`
    pub fn query_string(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(2);
        if let Some(raw) = self.raw_query.as_deref().filter(|raw| !raw.is_empty()) {
            parts.push(raw.to_string());
        }
        if !self.query.is_empty() {
            parts.push(
                url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(self.query.iter())
                    .finish(),
            );
        }
        (!parts.is_empty()).then(|| parts.join("&"))
    }

    /// Path with the encoded query appended
    pub fn target(&self) -> String {
        match self.query_string() {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }

    /// Derive a descriptor that targets `url`.
    ///
    /// Path and query are replaced by the ones in `url`, and the query is
    /// kept exactly as the server wrote it. Method, headers and body are
    /// kept. `self` is left untouched.
    pub fn retarget(&self, url: &str) -> Self {
        let url = url.split('#').next().unwrap_or(url);
        let (path, raw_query) = match url.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (url, None),
        };

        Self {
            method: self.method,
            path: path.to_string(),
            query: QueryPairs::new(),
            raw_query,
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

// ============================================================================
// Request Options
// ============================================================================

/// Transport-level settings carried forward to every page fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestOptions {
    /// Base URL override
    pub base_url: Option<String>,
    /// Per-call timeout
    pub timeout: Option<Duration>,
    /// Additional headers
    pub headers: StringMap,
}

impl RequestOptions {
    /// Create empty request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL override
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Raw Response
// ============================================================================

/// Undecoded response returned by a transport
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lowercase names)
    pub headers: StringMap,
    /// Response body
    pub body: Bytes,
}

impl RawResponse {
    /// Create a response with a status and body
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: StringMap::new(),
            body: body.into(),
        }
    }

    /// Create a 200 response with a JSON body
    pub fn json(value: &JsonValue) -> Self {
        Self::new(200, value.to_string())
    }

    /// Create a 204 response
    pub fn no_content() -> Self {
        Self::new(204, Bytes::new())
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Look up a header (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Body as text (lossy)
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Check if the body is empty or only whitespace
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
