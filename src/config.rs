//! Client configuration
//!
//! Settings come from a YAML file, the environment, or both (environment
//! wins). Environment lookup happens only here; the rest of the crate takes
//! explicit values.
//!
//! ```yaml
//! base_url: https://api.spotify.com/v1
//! access_token: BQD...
//! timeout_secs: 10
//! market: SE
//! headers:
//!   Accept-Language: sv
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestOptions, DEFAULT_BASE_URL};
use crate::types::{OptionStringExt, StringMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the access token
pub const ENV_ACCESS_TOKEN: &str = "SPOTIFY_ACCESS_TOKEN";
/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "SPOTIFY_BASE_URL";
/// Environment variable overriding the timeout, in seconds
pub const ENV_TIMEOUT_SECS: &str = "SPOTIFY_TIMEOUT_SECS";
/// Environment variable setting the market
pub const ENV_MARKET: &str = "SPOTIFY_MARKET";

/// Everything needed to build a [`SpotifyClient`](crate::SpotifyClient)
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for relative request paths
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OAuth access token, sent as `Authorization: Bearer <token>`
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// ISO 3166-1 alpha-2 market for catalog lookups
    #[serde(default)]
    pub market: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: StringMap,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("{}/{}", crate::NAME, crate::VERSION)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            market: None,
            headers: StringMap::new(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("has_access_token", &self.access_token.is_some())
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("market", &self.market)
            .field("headers", &self.headers)
            .finish()
    }
}

impl ClientConfig {
    // ========================================================================
    // Loading
    // ========================================================================

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {e}",
                    path.display()
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().merge_env()
    }

    /// Overlay the process environment
    pub fn merge_env(self) -> Result<Self> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup`, keyed by the `SPOTIFY_*` variable names
    ///
    /// Empty values are ignored.
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).map(|value| value.trim().to_string()).none_if_empty();

        if let Some(token) = var(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        if let Some(base_url) = var(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(timeout) = var(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout.parse().map_err(|_| {
                Error::config(format!("{ENV_TIMEOUT_SECS} must be a whole number, got '{timeout}'"))
            })?;
        }
        if let Some(market) = var(ENV_MARKET) {
            self.market = Some(market);
        }
        Ok(self)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check that the config can build a working client
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http or https, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Check that an access token is present
    pub fn require_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::missing_field("access_token"))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Options carried by every request and every page
    pub fn request_options(&self) -> RequestOptions {
        let mut options = RequestOptions::new()
            .base_url(self.base_url.clone())
            .timeout(self.timeout());
        for (key, value) in &self.headers {
            options = options.header(key.clone(), value.clone());
        }
        options
    }

    /// Build the reqwest-backed transport
    ///
    /// Extra headers travel in [`request_options`](Self::request_options),
    /// not in the client defaults.
    pub fn build_http_client(&self) -> Result<HttpClient> {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(self.timeout())
            .user_agent(self.user_agent.clone());
        if let Some(token) = &self.access_token {
            builder = builder.access_token(token.clone());
        }
        HttpClient::with_config(builder.build())
    }
}
