//! All objects related to track

use super::album::SimplifiedAlbum;
use super::artist::SimplifiedArtist;
use super::common::{ExternalIds, ExternalUrls, Restrictions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simplified track object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SimplifiedTrack {
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub disc_number: u32,
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    pub id: Option<String>,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub is_playable: Option<bool>,
    pub name: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub track_number: u32,
    #[serde(default)]
    pub uri: Option<String>,
}

impl SimplifiedTrack {
    /// Track length
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Full track object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Track {
    pub album: SimplifiedAlbum,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub disc_number: u32,
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    pub id: Option<String>,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub is_playable: Option<bool>,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub restrictions: Option<Restrictions>,
    #[serde(default)]
    pub track_number: u32,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Track {
    /// Track length
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Artist names joined with ", "
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Saved track object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedTrack {
    pub added_at: DateTime<Utc>,
    pub track: Track,
}

/// Audio features object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct AudioFeatures {
    pub id: String,
    pub acousticness: f32,
    pub danceability: f32,
    pub duration_ms: u64,
    pub energy: f32,
    pub instrumentalness: f32,
    pub key: i32,
    pub liveness: f32,
    pub loudness: f32,
    pub mode: i32,
    pub speechiness: f32,
    pub tempo: f32,
    pub time_signature: i32,
    pub valence: f32,
    #[serde(default)]
    pub uri: Option<String>,
}
