//! All objects related to playlist

use super::common::{null_as_default, ExternalUrls, Followers, Image, PagingObject};
use super::user::PublicUser;
use super::PlayableItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a playlist's items: where to fetch them and how many
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlaylistTracksRef {
    pub href: String,
    pub total: u32,
}

/// Simplified playlist object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SimplifiedPlaylist {
    #[serde(default)]
    pub collaborative: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub name: String,
    pub owner: PublicUser,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub snapshot_id: Option<String>,
    #[serde(default)]
    pub tracks: PlaylistTracksRef,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Full playlist object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Playlist {
    #[serde(default)]
    pub collaborative: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub href: Option<String>,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub name: String,
    pub owner: PublicUser,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub snapshot_id: Option<String>,
    /// First page of items
    #[serde(default)]
    pub tracks: PagingObject<PlaylistItem>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Playlist item: a track or episode plus who added it and when
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlaylistItem {
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub added_by: Option<PublicUser>,
    #[serde(default)]
    pub is_local: bool,
    /// `None` when the item is no longer available
    #[serde(default)]
    pub track: Option<PlayableItem>,
}

/// Playlist version identifier returned by playlist mutations
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SnapshotId {
    pub snapshot_id: String,
}
