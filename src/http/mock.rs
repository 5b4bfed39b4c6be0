//! In-memory transport for tests
//!
//! Responses are scripted per request target (`path?query`, see
//! [`RequestDescriptor::target`]); every executed
//! request is recorded so tests can assert on call counts and on what was
//! sent.

use super::request::{RawResponse, RequestDescriptor, RequestOptions};
use super::transport::Transport;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone)]
enum Scripted {
    Response(RawResponse),
    Status { status: u16, body: String },
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, Scripted>,
    requests: Vec<(RequestDescriptor, RequestOptions)>,
}

/// Scripted transport that never touches the network
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Create a transport with no scripted responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a raw response for `target`
    pub fn respond(&self, target: impl Into<String>, response: RawResponse) -> &Self {
        self.with_state(|state| {
            state
                .responses
                .insert(target.into(), Scripted::Response(response));
        });
        self
    }

    /// Script a 200 JSON response for `target`
    pub fn respond_json(&self, target: impl Into<String>, body: JsonValue) -> &Self {
        self.respond(target, RawResponse::json(&body))
    }

    /// Script a failing status for `target`
    pub fn fail(&self, target: impl Into<String>, status: u16, body: impl Into<String>) -> &Self {
        self.with_state(|state| {
            state.responses.insert(
                target.into(),
                Scripted::Status {
                    status,
                    body: body.into(),
                },
            );
        });
        self
    }

    /// Number of requests executed so far
    pub fn calls(&self) -> usize {
        self.with_state(|state| state.requests.len())
    }

    /// Every request executed so far, in order
    pub fn requests(&self) -> Vec<(RequestDescriptor, RequestOptions)> {
        self.with_state(|state| state.requests.clone())
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<RawResponse> {
        let target = request.target();
        let scripted = self.with_state(|state| {
            state.requests.push((request.clone(), options.clone()));
            state.responses.get(&target).cloned()
        });

        match scripted {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Status { status, body }) => Err(Error::http_status(status, body)),
            None => Err(Error::http_status(
                404,
                format!("no scripted response for {} {target}", request.method),
            )),
        }
    }
}
