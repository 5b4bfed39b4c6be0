//! reqwest-backed HTTP transport
//!
//! Resolves request paths against a base URL, layers headers (client
//! defaults, bearer token, per-call options, per-request), and turns
//! non-2xx statuses into errors. There is no retry or rate limiting here;
//! callers that want either wrap their own [`Transport`].

use super::request::{RawResponse, RequestDescriptor, RequestOptions};
use super::transport::Transport;
use crate::decode::decode_json;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Default Spotify Web API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// Configuration for the HTTP client
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Base URL for relative request paths
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Bearer token sent with every request
    pub access_token: Option<String>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            access_token: None,
            default_headers: HashMap::new(),
            user_agent: format!("spotify-web-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_access_token", &self.access_token.is_some())
            .field("default_headers", &self.default_headers)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the bearer token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP transport backed by reqwest
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Execute a request and decode the JSON response into `T`
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<T> {
        let response = self.execute(request, options).await?;
        decode_json(&response)
    }

    /// Build full URL from path
    pub fn build_url(&self, path: &str, options: &RequestOptions) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = options
            .base_url
            .as_deref()
            .unwrap_or(&self.config.base_url);
        if base.is_empty() {
            return path.to_string();
        }

        let base = base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> Result<RawResponse> {
        let mut full_url = self.build_url(&request.path, options);
        if let Some(query) = request.query_string() {
            full_url.push(if full_url.contains('?') { '&' } else { '?' });
            full_url.push_str(&query);
        }
        let timeout = options.timeout.unwrap_or(self.config.timeout);

        let mut req = self.client.request(request.method.into(), &full_url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref token) = self.config.access_token {
            req = req.bearer_auth(token);
        }

        for (key, value) in &options.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        req = req.timeout(timeout);

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            full_url,
            status.as_u16(),
            body.len()
        );

        if !status.is_success() {
            return Err(Error::http_status(
                status.as_u16(),
                String::from_utf8_lossy(&body),
            ));
        }

        Ok(RawResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
