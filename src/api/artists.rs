//! Artists service

use super::SpotifyClient;
use crate::decode::PageDecoder;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::model::{join_ids, parse_id, Artist, SimplifiedAlbum, SpotifyType, Track};
use crate::pagination::{Page, PageStream};

/// `/artists`
#[derive(Debug, Clone, Copy)]
pub struct Artists<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Artists<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Artist> {
        let id = parse_id(SpotifyType::Artist, id)?;
        self.client
            .get_json(RequestDescriptor::get(format!("/artists/{id}")))
            .await
    }

    /// Get several artists; unknown IDs come back as `None`
    pub async fn get_several<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Option<Artist>>> {
        let request =
            RequestDescriptor::get("/artists").query("ids", join_ids(SpotifyType::Artist, ids)?);
        self.client.get_json_at(request, "artists").await
    }

    /// First page of an artist's albums
    ///
    /// `include_groups` filters by `album`, `single`, `appears_on` or
    /// `compilation` (comma separated).
    pub async fn albums(
        &self,
        id: &str,
        include_groups: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Page<SimplifiedAlbum>> {
        let request = self.albums_request(id, include_groups, limit)?;
        self.client.page(request, &PageDecoder::new()).await
    }

    /// Every album of an artist
    pub async fn albums_all(
        &self,
        id: &str,
        include_groups: Option<&str>,
    ) -> Result<PageStream<SimplifiedAlbum>> {
        let request = self.albums_request(id, include_groups, Some(50))?;
        self.client.page_stream(request, PageDecoder::new()).await
    }

    fn albums_request(
        &self,
        id: &str,
        include_groups: Option<&str>,
        limit: Option<u32>,
    ) -> Result<RequestDescriptor> {
        let id = parse_id(SpotifyType::Artist, id)?;
        let request = RequestDescriptor::get(format!("/artists/{id}/albums"))
            .query_opt("include_groups", include_groups)
            .query_opt("limit", limit);
        Ok(self.client.market_query(request))
    }

    /// An artist's top tracks in the client's market
    pub async fn top_tracks(&self, id: &str) -> Result<Vec<Track>> {
        let id = parse_id(SpotifyType::Artist, id)?;
        let request = self
            .client
            .market_query(RequestDescriptor::get(format!("/artists/{id}/top-tracks")));
        self.client.get_json_at(request, "tracks").await
    }
}
