//! Albums service

use super::SpotifyClient;
use crate::decode::PageDecoder;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::model::{join_ids, parse_id, Album, SimplifiedAlbum, SimplifiedTrack, SpotifyType};
use crate::pagination::{Page, PageStream};

/// `/albums` and `/browse/new-releases`
#[derive(Debug, Clone, Copy)]
pub struct Albums<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Albums<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    /// Get one album
    pub async fn get(&self, id: &str) -> Result<Album> {
        let id = parse_id(SpotifyType::Album, id)?;
        let request = self
            .client
            .market_query(RequestDescriptor::get(format!("/albums/{id}")));
        self.client.get_json(request).await
    }

    /// Get several albums; unknown IDs come back as `None`
    pub async fn get_several<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Option<Album>>> {
        let request =
            RequestDescriptor::get("/albums").query("ids", join_ids(SpotifyType::Album, ids)?);
        let request = self.client.market_query(request);
        self.client.get_json_at(request, "albums").await
    }

    /// First page of an album's tracks
    pub async fn tracks(&self, id: &str, limit: Option<u32>) -> Result<Page<SimplifiedTrack>> {
        let request = self.tracks_request(id, limit)?;
        self.client.page(request, &PageDecoder::new()).await
    }

    /// Every track of an album
    pub async fn tracks_all(&self, id: &str) -> Result<PageStream<SimplifiedTrack>> {
        let request = self.tracks_request(id, Some(50))?;
        self.client.page_stream(request, PageDecoder::new()).await
    }

    fn tracks_request(&self, id: &str, limit: Option<u32>) -> Result<RequestDescriptor> {
        let id = parse_id(SpotifyType::Album, id)?;
        let request =
            RequestDescriptor::get(format!("/albums/{id}/tracks")).query_opt("limit", limit);
        Ok(self.client.market_query(request))
    }

    /// First page of new releases
    pub async fn new_releases(&self, limit: Option<u32>) -> Result<Page<SimplifiedAlbum>> {
        let request = RequestDescriptor::get("/browse/new-releases").query_opt("limit", limit);
        self.client.page(request, &PageDecoder::at("albums")).await
    }

    /// Every new release
    pub async fn new_releases_all(&self) -> Result<PageStream<SimplifiedAlbum>> {
        let request = RequestDescriptor::get("/browse/new-releases").query("limit", 50);
        self.client.page_stream(request, PageDecoder::at("albums")).await
    }
}
