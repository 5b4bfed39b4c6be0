//! All objects related to album

use super::artist::SimplifiedArtist;
use super::common::{
    null_as_default, Copyright, ExternalIds, ExternalUrls, Image, PagingObject, Restrictions,
};
use super::track::SimplifiedTrack;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Simplified album object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SimplifiedAlbum {
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(default)]
    pub album_group: Option<String>,
    #[serde(default)]
    pub total_tracks: Option<u32>,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: Option<String>,
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub name: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub release_date_precision: Option<String>,
    #[serde(default)]
    pub restrictions: Option<Restrictions>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Full album object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Album {
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(default)]
    pub total_tracks: Option<u32>,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub href: Option<String>,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default)]
    pub label: Option<String>,
    pub name: String,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub release_date_precision: Option<String>,
    #[serde(default)]
    pub tracks: PagingObject<SimplifiedTrack>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Saved album object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedAlbum {
    pub added_at: DateTime<Utc>,
    pub album: Album,
}
