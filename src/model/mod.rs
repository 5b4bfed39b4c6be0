//! Spotify object model
//!
//! Typed response objects for the Web API. Fields the API may omit or send
//! as `null` are optional or defaulted, so partial objects still decode.
//!
//! # Features
//!
//! - **Simplified and full objects**: albums, artists, tracks, shows,
//!   episodes, playlists and users
//! - **Saved wrappers**: library items with their `added_at` timestamp
//! - **Player**: devices, playback state, queue and history
//! - **IDs**: parse and normalize bare IDs, URIs and links

mod album;
mod artist;
mod category;
mod common;
mod id;
mod player;
mod playlist;
mod search;
mod show;
mod track;
mod user;

pub use album::{Album, SavedAlbum, SimplifiedAlbum};
pub use artist::{Artist, SimplifiedArtist};
pub use category::Category;
pub use common::{
    largest_image, Copyright, ExternalIds, ExternalUrls, Followers, Image, PagingObject,
    Restrictions, ResumePoint,
};
pub use id::{join_ids, parse_id, parse_ids, to_uri, to_uris, SpotifyId, SpotifyType};
pub use player::{
    Context, CurrentlyPlaying, Device, Devices, PlayHistory, PlaybackState, Queue, RepeatState,
};
pub use playlist::{Playlist, PlaylistItem, PlaylistTracksRef, SimplifiedPlaylist, SnapshotId};
pub use search::SearchType;
pub use show::{Episode, SavedEpisode, SavedShow, Show, SimplifiedEpisode, SimplifiedShow};
pub use track::{AudioFeatures, SavedTrack, SimplifiedTrack, Track};
pub use user::{PrivateUser, PublicUser};

use serde::{Deserialize, Serialize};

/// Item that can be played: a track or an episode
///
/// Resolved from the object's `type` field; any other type fails to decode.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayableItem {
    Track(Track),
    Episode(Episode),
}

impl PlayableItem {
    /// ID of the underlying item
    pub fn id(&self) -> Option<&str> {
        match self {
            PlayableItem::Track(track) => track.id.as_deref(),
            PlayableItem::Episode(episode) => Some(&episode.episode.id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PlayableItem::Track(track) => &track.name,
            PlayableItem::Episode(episode) => &episode.episode.name,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            PlayableItem::Track(track) => track.duration_ms,
            PlayableItem::Episode(episode) => episode.episode.duration_ms,
        }
    }

    /// Artist names for tracks, show name for episodes
    pub fn creator(&self) -> String {
        match self {
            PlayableItem::Track(track) => track.artist_names(),
            PlayableItem::Episode(episode) => episode
                .show
                .as_ref()
                .map(|show| show.name.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests;
