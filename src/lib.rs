// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Spotify Web SDK
//!
//! A typed client for the Spotify Web API built around lazy, cursor-based
//! pagination.
//!
//! ## Features
//!
//! - **Typed Objects**: albums, artists, tracks, shows, episodes, playlists,
//!   users and player state as serde structs
//! - **Pages**: every list endpoint returns a [`Page`] that knows how to
//!   request the page after it
//! - **Auto-pagination**: [`PageStream`] walks a whole collection one item at
//!   a time, fetching pages only when needed
//! - **Pluggable Transport**: a reqwest client for real use, an in-memory
//!   transport for tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spotify_web_sdk::{ClientConfig, SpotifyClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads SPOTIFY_ACCESS_TOKEN and friends
//!     let client = SpotifyClient::from_config(&ClientConfig::from_env()?)?;
//!
//!     // One page
//!     let page = client.playlists().current_user_playlists(Some(20)).await?;
//!     for playlist in &page {
//!         println!("{}", playlist.name);
//!     }
//!
//!     // Every page, lazily
//!     let mut items = client.playlists().items_all("3cEYpjA9oz9GiPac4AsH4n").await?;
//!     while let Some(item) = items.next().await? {
//!         if let Some(track) = item.track {
//!             println!("{}", track.name());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  SpotifyClient → albums() artists() playlists() player() ... │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ RequestDescriptor + RequestOptions
//! ┌──────────────┬───────────────┴──────────┬────────────────────┐
//! │  Transport   │  PageDecoder             │  Page / PageStream │
//! ├──────────────┼──────────────────────────┼────────────────────┤
//! │ HttpClient   │ envelope ("tracks", ...) │ cursor = next URL  │
//! │ MockTransport│ ItemConverter per item   │ lazy advance       │
//! └──────────────┴──────────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request descriptors, transport trait and HTTP client
pub mod http;

/// Response decoding into pages and values
pub mod decode;

/// Pages, cursors and auto-pagination
pub mod pagination;

/// Spotify object model
pub mod model;

/// Per-resource services
pub mod api;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::SpotifyClient;
pub use config::ClientConfig;
pub use http::{HttpClient, MockTransport, RequestDescriptor, RequestOptions, Transport};
pub use pagination::{Cursor, Page, PageStream};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
