//! Spotify Web API services
//!
//! [`SpotifyClient`] hands out one thin service per resource. Each method
//! builds a [`RequestDescriptor`](crate::http::RequestDescriptor) and either
//! decodes the response directly or returns a [`Page`](crate::pagination::Page).
//! `*_all` methods return a [`PageStream`](crate::pagination::PageStream)
//! that walks every page lazily.
//!
//! # Example
//!
//! ```no_run
//! use spotify_web_sdk::{ClientConfig, SpotifyClient};
//!
//! # async fn run() -> spotify_web_sdk::Result<()> {
//! let client = SpotifyClient::from_config(&ClientConfig::from_env()?)?;
//! let mut saved = client.library().saved_tracks_all().await?;
//! while let Some(saved_track) = saved.next().await? {
//!     println!("{}", saved_track.track.name);
//! }
//! # Ok(())
//! # }
//! ```

mod albums;
mod artists;
mod browse;
mod client;
mod library;
mod player;
mod playlists;
mod search;
mod shows;
mod tracks;
mod users;

pub use albums::Albums;
pub use artists::Artists;
pub use browse::Browse;
pub use client::SpotifyClient;
pub use library::Library;
pub use player::{Player, StartPlayback};
pub use playlists::{PlaylistDetails, Playlists};
pub use search::{Search, SearchResults};
pub use shows::{Episodes, Shows};
pub use tracks::Tracks;
pub use users::Users;
