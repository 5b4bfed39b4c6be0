//! Transport abstraction
//!
//! Everything that performs network I/O goes through [`Transport`]. Pages and
//! decoders never touch the network themselves.

use super::request::{RawResponse, RequestDescriptor, RequestOptions};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Performs one HTTP call
///
/// Network failures and non-2xx statuses are reported as errors; the caller
/// only ever sees successful responses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and return the raw response
    async fn execute(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<RawResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<RawResponse> {
        (**self).execute(request, options).await
    }
}

