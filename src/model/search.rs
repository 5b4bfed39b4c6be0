//! Search item types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of item a search can return
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
    Show,
    Episode,
}

impl SearchType {
    pub const ALL: [SearchType; 6] = [
        SearchType::Album,
        SearchType::Artist,
        SearchType::Playlist,
        SearchType::Track,
        SearchType::Show,
        SearchType::Episode,
    ];

    /// Value of the `type` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
            SearchType::Show => "show",
            SearchType::Episode => "episode",
        }
    }

    /// Key of the paging object in the search response
    pub fn envelope(self) -> &'static str {
        match self {
            SearchType::Album => "albums",
            SearchType::Artist => "artists",
            SearchType::Playlist => "playlists",
            SearchType::Track => "tracks",
            SearchType::Show => "shows",
            SearchType::Episode => "episodes",
        }
    }

    /// Comma-separated `type` parameter for several kinds
    pub fn join(types: &[SearchType]) -> String {
        types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SearchType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Other(format!("Unknown search type: {s}")))
    }
}
