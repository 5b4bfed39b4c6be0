//! All objects related to shows and episodes

use super::common::{null_as_default, Copyright, ExternalUrls, Image, PagingObject, ResumePoint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simplified show object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SimplifiedShow {
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    pub name: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub total_episodes: Option<u32>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Full show object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Show {
    #[serde(flatten)]
    pub show: SimplifiedShow,
    /// First page of episodes
    #[serde(default)]
    pub episodes: PagingObject<SimplifiedEpisode>,
}

/// Saved show object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedShow {
    pub added_at: DateTime<Utc>,
    pub show: SimplifiedShow,
}

/// Simplified episode object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SimplifiedEpisode {
    #[serde(default)]
    pub audio_preview_url: Option<String>,
    #[serde(default)]
    pub description: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default)]
    pub is_playable: Option<bool>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub resume_point: Option<ResumePoint>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Full episode object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Episode {
    #[serde(flatten)]
    pub episode: SimplifiedEpisode,
    #[serde(default)]
    pub show: Option<SimplifiedShow>,
}

impl Episode {
    /// Episode length
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.episode.duration_ms)
    }
}

/// Saved episode object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedEpisode {
    pub added_at: DateTime<Utc>,
    pub episode: Episode,
}
