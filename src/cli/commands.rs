//! CLI commands and argument parsing

use crate::model::SearchType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spotify Web API command-line client
#[derive(Parser, Debug)]
#[command(name = "spotify-web-sdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); SPOTIFY_* environment variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current user's profile
    Me,

    /// List the current user's playlists
    Playlists {
        /// Maximum number of playlists
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the items of a playlist
    PlaylistItems {
        /// Playlist ID, URI or link
        id: String,

        /// Maximum number of items
        #[arg(long)]
        max: Option<usize>,
    },

    /// List saved tracks, most recent first
    SavedTracks {
        /// Maximum number of tracks
        #[arg(long)]
        max: Option<usize>,
    },

    /// Search the catalog
    Search {
        /// Search query
        query: String,

        /// Kind of item to search for
        #[arg(long = "type", default_value = "track")]
        kind: SearchType,

        /// Maximum number of results
        #[arg(long, default_value = "20")]
        max: usize,
    },

    /// Show one album
    Album {
        /// Album ID, URI or link
        id: String,
    },

    /// Show what is playing
    NowPlaying,

    /// List playback devices
    Devices,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per line)
    Json,
    /// Indented JSON
    Pretty,
}
