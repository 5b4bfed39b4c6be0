//! Error types for the Spotify Web API client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Maximum number of body bytes kept in error messages
const BODY_PREVIEW_LEN: usize = 200;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid Spotify {kind} ID: {input}")]
    InvalidId { kind: String, input: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response as {target}: {message} (body: {})", preview(.body))]
    Decode {
        target: String,
        body: String,
        message: String,
    },

    #[error("Failed to decode page item {index}: {message}")]
    ItemDecode { index: usize, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid ID error
    pub fn invalid_id(kind: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidId {
            kind: kind.into(),
            input: input.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error for a direct (non-page) decode
    pub fn decode(
        target: impl Into<String>,
        body: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Decode {
            target: target.into(),
            body: body.into(),
            message: message.into(),
        }
    }

    /// Create an item decode error for the page element at `index`
    pub fn item_decode(index: usize, message: impl Into<String>) -> Self {
        Self::ItemDecode {
            index,
            message: message.into(),
        }
    }

    /// Check if this error came from decoding a response
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. } | Error::ItemDecode { .. })
    }

    /// Check if this error came from the transport
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. }
        )
    }

    /// HTTP status code, if this is a status error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn preview(body: &str) -> &str {
    if body.len() <= BODY_PREVIEW_LEN {
        return body;
    }
    let mut end = BODY_PREVIEW_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;
