//! Player service
//!
//! Commands act on the active device unless a `device_id` is given. Most
//! require a Premium account; the API answers 403 otherwise.

use super::SpotifyClient;
use crate::decode::PageDecoder;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::model::{
    to_uri, CurrentlyPlaying, Device, Devices, PlayHistory, PlaybackState, Queue, SpotifyType,
};
use crate::pagination::{Page, PageStream};
use serde::Serialize;

/// What to start playing; the default resumes the current context
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct StartPlayback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_ms: Option<u64>,
}

impl StartPlayback {
    /// Resume playback
    pub fn resume() -> Self {
        Self::default()
    }

    /// Play an album, artist, playlist or show URI
    pub fn context(uri: impl Into<String>) -> Self {
        Self {
            context_uri: Some(uri.into()),
            ..Self::default()
        }
    }

    /// Play a list of track or episode URIs
    pub fn uris(uris: Vec<String>) -> Self {
        Self {
            uris: Some(uris),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn position_ms(mut self, position_ms: u64) -> Self {
        self.position_ms = Some(position_ms);
        self
    }

    fn is_resume(&self) -> bool {
        *self == Self::default()
    }
}

/// `/me/player`
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Player<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Full playback state, or `None` when nothing is active
    pub async fn playback_state(&self) -> Result<Option<PlaybackState>> {
        let request = self
            .client
            .market_query(RequestDescriptor::get("/me/player"))
            .query("additional_types", "track,episode");
        self.client.get_optional(request).await
    }

    /// What is playing right now, or `None` when nothing is
    pub async fn currently_playing(&self) -> Result<Option<CurrentlyPlaying>> {
        let request = self
            .client
            .market_query(RequestDescriptor::get("/me/player/currently-playing"))
            .query("additional_types", "track,episode");
        self.client.get_optional(request).await
    }

    pub async fn devices(&self) -> Result<Vec<Device>> {
        let devices: Devices = self
            .client
            .get_json(RequestDescriptor::get("/me/player/devices"))
            .await?;
        Ok(devices.devices)
    }

    pub async fn queue(&self) -> Result<Queue> {
        self.client
            .get_json(RequestDescriptor::get("/me/player/queue"))
            .await
    }

    /// First page of recently played tracks
    pub async fn recently_played(&self, limit: Option<u32>) -> Result<Page<PlayHistory>> {
        let request =
            RequestDescriptor::get("/me/player/recently-played").query_opt("limit", limit);
        self.client.page(request, &PageDecoder::new()).await
    }

    /// Every recently played track the API keeps
    pub async fn recently_played_all(&self) -> Result<PageStream<PlayHistory>> {
        let request = RequestDescriptor::get("/me/player/recently-played").query("limit", 50);
        self.client.page_stream(request, PageDecoder::new()).await
    }

    // ========================================================================
    // Commands
    // ========================================================================

    pub async fn play(&self, playback: &StartPlayback, device_id: Option<&str>) -> Result<()> {
        let mut request =
            RequestDescriptor::put("/me/player/play").query_opt("device_id", device_id);
        if !playback.is_resume() {
            request = request.json(serde_json::to_value(playback)?);
        }
        self.client.command(request).await
    }

    pub async fn pause(&self, device_id: Option<&str>) -> Result<()> {
        let request = RequestDescriptor::put("/me/player/pause").query_opt("device_id", device_id);
        self.client.command(request).await
    }

    /// Skip to the next item
    pub async fn next(&self, device_id: Option<&str>) -> Result<()> {
        let request = RequestDescriptor::post("/me/player/next").query_opt("device_id", device_id);
        self.client.command(request).await
    }

    /// Skip to the previous item
    pub async fn previous(&self, device_id: Option<&str>) -> Result<()> {
        let request =
            RequestDescriptor::post("/me/player/previous").query_opt("device_id", device_id);
        self.client.command(request).await
    }

    pub async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> Result<()> {
        let request = RequestDescriptor::put("/me/player/seek")
            .query("position_ms", position_ms)
            .query_opt("device_id", device_id);
        self.client.command(request).await
    }

    /// Set the volume; values above 100 are clamped
    pub async fn set_volume(&self, percent: u8, device_id: Option<&str>) -> Result<()> {
        let request = RequestDescriptor::put("/me/player/volume")
            .query("volume_percent", percent.min(100))
            .query_opt("device_id", device_id);
        self.client.command(request).await
    }

    /// Append a track or episode to the queue
    pub async fn add_to_queue(&self, item: &str, device_id: Option<&str>) -> Result<()> {
        let uri = to_uri(SpotifyType::Track, item)?;
        let request = RequestDescriptor::post("/me/player/queue")
            .query("uri", uri)
            .query_opt("device_id", device_id);
        self.client.command(request).await
    }
}
