//! HTTP module
//!
//! Request descriptors, the transport boundary, and a reqwest-backed client.
//!
//! # Features
//!
//! - **Request Descriptors**: Immutable method/path/query/headers/body values
//! - **Request Options**: Base URL, timeout and headers carried across pages
//! - **Transport Trait**: The single seam where network I/O happens
//! - **HttpClient**: reqwest implementation with bearer token injection
//! - **MockTransport**: scripted in-memory transport for tests

mod client;
mod mock;
mod request;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_BASE_URL};
pub use mock::MockTransport;
pub use request::{RawResponse, RequestDescriptor, RequestOptions};
pub use transport::Transport;

#[cfg(test)]
mod tests;
