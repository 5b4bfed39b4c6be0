//! Library service: the current user's saved items and follows

use super::SpotifyClient;
use crate::decode::PageDecoder;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::model::{join_ids, parse_ids, Artist, SavedAlbum, SavedShow, SavedTrack, SpotifyType};
use crate::pagination::{Page, PageStream};
use serde::de::DeserializeOwned;
use serde_json::json;

/// `/me/tracks`, `/me/albums`, `/me/shows` and `/me/following`
#[derive(Debug, Clone, Copy)]
pub struct Library<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Library<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    async fn saved<T>(&self, path: &str, limit: Option<u32>) -> Result<Page<T>>
    where
        T: DeserializeOwned + 'static,
    {
        let request = RequestDescriptor::get(path).query_opt("limit", limit);
        let request = self.client.market_query(request);
        self.client.page(request, &PageDecoder::new()).await
    }

    async fn saved_all<T>(&self, path: &str) -> Result<PageStream<T>>
    where
        T: DeserializeOwned + 'static,
    {
        let request = self
            .client
            .market_query(RequestDescriptor::get(path).query("limit", 50));
        self.client.page_stream(request, PageDecoder::new()).await
    }

    // ========================================================================
    // Tracks
    // ========================================================================

    /// First page of saved tracks, most recent first
    pub async fn saved_tracks(&self, limit: Option<u32>) -> Result<Page<SavedTrack>> {
        self.saved("/me/tracks", limit).await
    }

    pub async fn saved_tracks_all(&self) -> Result<PageStream<SavedTrack>> {
        self.saved_all("/me/tracks").await
    }

    pub async fn save_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Result<()> {
        let ids = parse_ids(SpotifyType::Track, ids)?;
        let request = RequestDescriptor::put("/me/tracks").json(json!({ "ids": ids }));
        self.client.command(request).await
    }

    pub async fn remove_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Result<()> {
        let ids = parse_ids(SpotifyType::Track, ids)?;
        let request = RequestDescriptor::delete("/me/tracks").json(json!({ "ids": ids }));
        self.client.command(request).await
    }

    /// Whether each track is saved, in input order
    pub async fn contains_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<bool>> {
        let request = RequestDescriptor::get("/me/tracks/contains")
            .query("ids", join_ids(SpotifyType::Track, ids)?);
        self.client.get_json(request).await
    }

    // ========================================================================
    // Albums and Shows
    // ========================================================================

    pub async fn saved_albums(&self, limit: Option<u32>) -> Result<Page<SavedAlbum>> {
        self.saved("/me/albums", limit).await
    }

    pub async fn saved_albums_all(&self) -> Result<PageStream<SavedAlbum>> {
        self.saved_all("/me/albums").await
    }

    pub async fn saved_shows(&self, limit: Option<u32>) -> Result<Page<SavedShow>> {
        self.saved("/me/shows", limit).await
    }

    pub async fn saved_shows_all(&self) -> Result<PageStream<SavedShow>> {
        self.saved_all("/me/shows").await
    }

    // ========================================================================
    // Following
    // ========================================================================

    /// First page of followed artists
    ///
    /// Cursor-based: the page's `meta().after` holds the last artist ID.
    pub async fn followed_artists(&self, limit: Option<u32>) -> Result<Page<Artist>> {
        let request = RequestDescriptor::get("/me/following")
            .query("type", "artist")
            .query_opt("limit", limit);
        self.client.page(request, &PageDecoder::at("artists")).await
    }

    pub async fn followed_artists_all(&self) -> Result<PageStream<Artist>> {
        let request = RequestDescriptor::get("/me/following")
            .query("type", "artist")
            .query("limit", 50);
        self.client
            .page_stream(request, PageDecoder::at("artists"))
            .await
    }
}
