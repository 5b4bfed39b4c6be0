//! All objects related to the player

use super::common::ExternalUrls;
use super::track::Track;
use super::PlayableItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Device object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Device {
    pub id: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_private_session: bool,
    #[serde(default)]
    pub is_restricted: bool,
    pub name: String,
    /// `computer`, `smartphone`, `speaker`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub volume_percent: Option<u32>,
}

/// Wrapper returned by the devices endpoint
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Devices {
    pub devices: Vec<Device>,
}

/// Playback context (album, artist, playlist or show)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Context {
    pub uri: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Repeat mode
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RepeatState {
    #[default]
    Off,
    Track,
    Context,
}

impl RepeatState {
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatState::Off => "off",
            RepeatState::Track => "track",
            RepeatState::Context => "context",
        }
    }
}

impl fmt::Display for RepeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full playback state, including the active device
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybackState {
    pub device: Device,
    #[serde(default)]
    pub repeat_state: RepeatState,
    #[serde(default)]
    pub shuffle_state: bool,
    #[serde(default)]
    pub context: Option<Context>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub item: Option<PlayableItem>,
    /// `track`, `episode`, `ad` or `unknown`
    #[serde(default)]
    pub currently_playing_type: Option<String>,
}

/// Currently playing object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentlyPlaying {
    #[serde(default)]
    pub context: Option<Context>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub item: Option<PlayableItem>,
    #[serde(default)]
    pub currently_playing_type: Option<String>,
}

/// The user's queue
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Queue {
    #[serde(default)]
    pub currently_playing: Option<PlayableItem>,
    #[serde(default)]
    pub queue: Vec<PlayableItem>,
}

/// Recently played entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayHistory {
    pub track: Track,
    pub played_at: DateTime<Utc>,
    #[serde(default)]
    pub context: Option<Context>,
}
