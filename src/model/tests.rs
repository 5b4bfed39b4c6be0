//! Tests for the object model

use super::*;
use crate::error::Error;
use crate::http::{RequestDescriptor, RequestOptions};
use chrono::{Datelike, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

const TRACK_ID: &str = "4iV5W9uYEdYUVa79Axb7Rh";

fn track_json(id: &str) -> serde_json::Value {
    json!({
        "type": "track",
        "id": id,
        "name": "Song",
        "duration_ms": 215000,
        "artists": [{"id": "a1", "name": "First"}, {"id": "a2", "name": "Second"}],
        "album": {"id": "al1", "name": "Album", "images": null}
    })
}

// ============================================================================
// Object Tests
// ============================================================================

#[test]
fn test_track_minimal() {
    let track: Track = serde_json::from_value(track_json("t1")).unwrap();
    assert_eq!(track.id.as_deref(), Some("t1"));
    assert_eq!(track.artist_names(), "First, Second");
    assert_eq!(track.duration().as_secs(), 215);
    assert!(track.album.images.is_empty());
    assert!(!track.explicit);
}

#[test]
fn test_local_track_has_no_id() {
    let track: Track = serde_json::from_value(json!({
        "id": null, "name": "Local", "duration_ms": 1, "is_local": true,
        "album": {"id": null, "name": ""}
    }))
    .unwrap();
    assert!(track.id.is_none());
    assert!(track.is_local);
}

#[test]
fn test_playable_item_by_type() {
    let track: PlayableItem = serde_json::from_value(track_json("t1")).unwrap();
    assert_eq!(track.id(), Some("t1"));
    assert_eq!(track.creator(), "First, Second");

    let episode: PlayableItem = serde_json::from_value(json!({
        "type": "episode", "id": "e1", "name": "Ep", "duration_ms": 60000,
        "show": {"id": "s1", "name": "Podcast"}
    }))
    .unwrap();
    assert_eq!(episode.name(), "Ep");
    assert_eq!(episode.duration_ms(), 60000);
    assert_eq!(episode.creator(), "Podcast");
}

#[test_case(json!({"type": "audiobook", "id": "x", "name": "Book"}) ; "unknown type")]
#[test_case(json!({"id": "x", "name": "No type"}) ; "missing type")]
fn test_playable_item_rejects(value: serde_json::Value) {
    assert!(serde_json::from_value::<PlayableItem>(value).is_err());
}

#[test]
fn test_playlist_item_with_null_track() {
    let item: PlaylistItem = serde_json::from_value(json!({
        "added_at": "2024-03-01T10:00:00Z",
        "added_by": {"id": "someone"},
        "is_local": false,
        "track": null
    }))
    .unwrap();
    assert!(item.track.is_none());
    assert_eq!(item.added_at.unwrap().month(), 3);
}

#[test]
fn test_saved_track() {
    let saved: SavedTrack = serde_json::from_value(json!({
        "added_at": "2023-12-24T18:30:00Z",
        "track": track_json("t9")
    }))
    .unwrap();
    assert_eq!(
        saved.added_at,
        Utc.with_ymd_and_hms(2023, 12, 24, 18, 30, 0).unwrap()
    );
    assert_eq!(saved.track.name, "Song");
}

#[test]
fn test_playback_state() {
    let state: PlaybackState = serde_json::from_value(json!({
        "device": {"id": "d1", "is_active": true, "name": "Kitchen", "type": "Speaker",
                   "volume_percent": 40},
        "repeat_state": "context",
        "shuffle_state": true,
        "timestamp": 1_700_000_000_000_i64,
        "progress_ms": 1234,
        "is_playing": true,
        "item": track_json("t1"),
        "currently_playing_type": "track"
    }))
    .unwrap();

    assert_eq!(state.device.kind, "Speaker");
    assert_eq!(state.repeat_state, RepeatState::Context);
    assert_eq!(state.timestamp.timestamp(), 1_700_000_000);
    assert!(matches!(state.item, Some(PlayableItem::Track(_))));
}

#[test]
fn test_queue_mixes_tracks_and_episodes() {
    let queue: Queue = serde_json::from_value(json!({
        "currently_playing": null,
        "queue": [
            track_json("t1"),
            {"type": "episode", "id": "e1", "name": "Ep", "duration_ms": 1}
        ]
    }))
    .unwrap();
    assert_eq!(queue.queue.len(), 2);
    assert!(matches!(queue.queue[1], PlayableItem::Episode(_)));
}

#[test]
fn test_album_embedded_tracks_into_page() {
    let album: Album = serde_json::from_value(json!({
        "id": "al1",
        "name": "Album",
        "tracks": {
            "items": [{"id": "t1", "name": "One", "duration_ms": 1}],
            "next": "https://api.spotify.com/v1/albums/al1/tracks?offset=1&limit=1",
            "limit": 1,
            "offset": 0,
            "total": 2
        }
    }))
    .unwrap();

    let page = album.tracks.into_page(
        RequestDescriptor::get("/albums/al1/tracks"),
        RequestOptions::new(),
    );
    assert_eq!(page.len(), 1);
    assert_eq!(page.meta().total, Some(2));
    let (next, _) = page.next_page_request().unwrap();
    assert_eq!(next.query_value("offset").as_deref(), Some("1"));
}

#[test]
fn test_largest_image() {
    let images = vec![
        Image { url: "small".into(), height: Some(64), width: Some(64) },
        Image { url: "large".into(), height: Some(640), width: Some(640) },
        Image { url: "unknown".into(), height: None, width: None },
    ];
    assert_eq!(largest_image(&images).map(|i| i.url.as_str()), Some("large"));
    assert!(largest_image(&[]).is_none());
}

// ============================================================================
// Search Type Tests
// ============================================================================

#[test]
fn test_search_type() {
    assert_eq!("Track".parse::<SearchType>().unwrap(), SearchType::Track);
    assert!("movie".parse::<SearchType>().is_err());
    assert_eq!(SearchType::Show.envelope(), "shows");
    assert_eq!(
        SearchType::join(&[SearchType::Track, SearchType::Artist]),
        "track,artist"
    );
}

// ============================================================================
// ID Tests
// ============================================================================

#[test_case(TRACK_ID ; "bare id")]
#[test_case("spotify:track:4iV5W9uYEdYUVa79Axb7Rh" ; "uri")]
#[test_case("https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh?si=abc" ; "link")]
#[test_case("https://open.spotify.com/intl-de/track/4iV5W9uYEdYUVa79Axb7Rh" ; "localized link")]
#[test_case("  spotify:track:4iV5W9uYEdYUVa79Axb7Rh " ; "padded")]
fn test_parse_id_accepts(input: &str) {
    assert_eq!(parse_id(SpotifyType::Track, input).unwrap(), TRACK_ID);
}

#[test_case("spotify:album:4iV5W9uYEdYUVa79Axb7Rh" ; "wrong type")]
#[test_case("short" ; "too short")]
#[test_case("4iV5W9uYEdYUVa79Axb7R!" ; "bad character")]
#[test_case("spotify:track" ; "truncated uri")]
#[test_case("" ; "empty")]
fn test_parse_id_rejects(input: &str) {
    let err = parse_id(SpotifyType::Track, input).unwrap_err();
    assert!(matches!(err, Error::InvalidId { .. }));
}

#[test]
fn test_user_ids_are_not_base62() {
    assert_eq!(
        parse_id(SpotifyType::User, "spotify:user:some.user_1").unwrap(),
        "some.user_1"
    );
    assert_eq!(parse_id(SpotifyType::User, "wizzler").unwrap(), "wizzler");
}

#[test]
fn test_spotify_id_uri() {
    let id: SpotifyId = "https://open.spotify.com/episode/512ojhOuo1ktJprKbVcKyQ"
        .parse()
        .unwrap();
    assert_eq!(id.kind(), SpotifyType::Episode);
    assert_eq!(id.uri(), "spotify:episode:512ojhOuo1ktJprKbVcKyQ");
    assert_eq!(id.to_string(), id.uri());
}

#[test]
fn test_join_ids_and_uris() {
    assert_eq!(
        join_ids(SpotifyType::Track, &[TRACK_ID, "spotify:track:1301WleyT98MSxVHPZCA6M"]).unwrap(),
        "4iV5W9uYEdYUVa79Axb7Rh,1301WleyT98MSxVHPZCA6M"
    );
    assert!(join_ids(SpotifyType::Track, &["bad"]).is_err());

    let uris = to_uris(
        SpotifyType::Track,
        &[TRACK_ID, "spotify:episode:512ojhOuo1ktJprKbVcKyQ"],
    )
    .unwrap();
    assert_eq!(
        uris,
        vec![
            "spotify:track:4iV5W9uYEdYUVa79Axb7Rh".to_string(),
            "spotify:episode:512ojhOuo1ktJprKbVcKyQ".to_string(),
        ]
    );
}
