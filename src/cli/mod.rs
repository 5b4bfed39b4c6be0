//! CLI module
//!
//! Command-line interface over the Spotify client.
//!
//! # Commands
//!
//! - `me` - Show the current user's profile
//! - `playlists` - List the current user's playlists
//! - `playlist-items` - List the items of a playlist
//! - `saved-tracks` - List saved tracks
//! - `search` - Search the catalog
//! - `album` - Show one album
//! - `now-playing` - Show what is playing
//! - `devices` - List playback devices

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
