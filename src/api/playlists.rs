//! Playlists service

use super::SpotifyClient;
use crate::decode::PageDecoder;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::model::{
    parse_id, to_uris, Playlist, PlaylistItem, SimplifiedPlaylist, SnapshotId, SpotifyType,
};
use crate::pagination::{Page, PageStream};
use serde::Serialize;
use serde_json::json;

/// Changes to a playlist's details; unset fields are left alone
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaylistDetails {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    #[must_use]
    pub fn collaborative(mut self, collaborative: bool) -> Self {
        self.collaborative = Some(collaborative);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// `/playlists`, `/me/playlists` and `/users/{id}/playlists`
#[derive(Debug, Clone, Copy)]
pub struct Playlists<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Playlists<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Playlist> {
        let id = parse_id(SpotifyType::Playlist, id)?;
        let request = self
            .client
            .market_query(RequestDescriptor::get(format!("/playlists/{id}")));
        self.client.get_json(request).await
    }

    /// First page of a playlist's items
    pub async fn items(&self, id: &str, limit: Option<u32>) -> Result<Page<PlaylistItem>> {
        let request = self.items_request(id, limit)?;
        self.client.page(request, &PageDecoder::new()).await
    }

    /// Every item of a playlist
    pub async fn items_all(&self, id: &str) -> Result<PageStream<PlaylistItem>> {
        let request = self.items_request(id, Some(100))?;
        self.client.page_stream(request, PageDecoder::new()).await
    }

    fn items_request(&self, id: &str, limit: Option<u32>) -> Result<RequestDescriptor> {
        let id = parse_id(SpotifyType::Playlist, id)?;
        let request = RequestDescriptor::get(format!("/playlists/{id}/tracks"))
            .query_opt("limit", limit)
            .query("additional_types", "track,episode");
        Ok(self.client.market_query(request))
    }

    /// First page of the current user's playlists
    pub async fn current_user_playlists(
        &self,
        limit: Option<u32>,
    ) -> Result<Page<SimplifiedPlaylist>> {
        let request = RequestDescriptor::get("/me/playlists").query_opt("limit", limit);
        self.client.page(request, &PageDecoder::new()).await
    }

    /// Every playlist of the current user
    pub async fn current_user_playlists_all(&self) -> Result<PageStream<SimplifiedPlaylist>> {
        let request = RequestDescriptor::get("/me/playlists").query("limit", 50);
        self.client.page_stream(request, PageDecoder::new()).await
    }

    /// First page of another user's public playlists
    pub async fn user_playlists(
        &self,
        user_id: &str,
        limit: Option<u32>,
    ) -> Result<Page<SimplifiedPlaylist>> {
        let user_id = parse_id(SpotifyType::User, user_id)?;
        let request =
            RequestDescriptor::get(format!("/users/{user_id}/playlists")).query_opt("limit", limit);
        self.client.page(request, &PageDecoder::new()).await
    }

    /// Every public playlist of another user
    pub async fn user_playlists_all(
        &self,
        user_id: &str,
    ) -> Result<PageStream<SimplifiedPlaylist>> {
        let user_id = parse_id(SpotifyType::User, user_id)?;
        let request =
            RequestDescriptor::get(format!("/users/{user_id}/playlists")).query("limit", 50);
        self.client.page_stream(request, PageDecoder::new()).await
    }

    /// Add tracks or episodes, at `position` or at the end
    ///
    /// Bare IDs are taken as tracks; pass URIs to add episodes.
    pub async fn add_items<S: AsRef<str>>(
        &self,
        id: &str,
        items: &[S],
        position: Option<u32>,
    ) -> Result<SnapshotId> {
        let id = parse_id(SpotifyType::Playlist, id)?;
        let mut body = json!({ "uris": to_uris(SpotifyType::Track, items)? });
        if let Some(position) = position {
            body["position"] = json!(position);
        }
        let request = RequestDescriptor::post(format!("/playlists/{id}/tracks")).json(body);
        self.client.get_json(request).await
    }

    /// Remove every occurrence of the given items
    ///
    /// With `snapshot_id`, the removal applies to that playlist version.
    pub async fn remove_items<S: AsRef<str>>(
        &self,
        id: &str,
        items: &[S],
        snapshot_id: Option<&str>,
    ) -> Result<SnapshotId> {
        let id = parse_id(SpotifyType::Playlist, id)?;
        let tracks: Vec<_> = to_uris(SpotifyType::Track, items)?
            .into_iter()
            .map(|uri| json!({ "uri": uri }))
            .collect();
        let mut body = json!({ "tracks": tracks });
        if let Some(snapshot_id) = snapshot_id {
            body["snapshot_id"] = json!(snapshot_id);
        }
        let request = RequestDescriptor::delete(format!("/playlists/{id}/tracks")).json(body);
        self.client.get_json(request).await
    }

    /// Change name, visibility or description
    pub async fn change_details(&self, id: &str, details: &PlaylistDetails) -> Result<()> {
        let id = parse_id(SpotifyType::Playlist, id)?;
        let request =
            RequestDescriptor::put(format!("/playlists/{id}")).json(serde_json::to_value(details)?);
        self.client.command(request).await
    }
}
