//! Shows and episodes services

use super::SpotifyClient;
use crate::decode::PageDecoder;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::model::{parse_id, Episode, Show, SimplifiedEpisode, SpotifyType};
use crate::pagination::{Page, PageStream};

/// `/shows`
#[derive(Debug, Clone, Copy)]
pub struct Shows<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Shows<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Show> {
        let id = parse_id(SpotifyType::Show, id)?;
        let request = self
            .client
            .market_query(RequestDescriptor::get(format!("/shows/{id}")));
        self.client.get_json(request).await
    }

    /// First page of a show's episodes
    pub async fn episodes(&self, id: &str, limit: Option<u32>) -> Result<Page<SimplifiedEpisode>> {
        let request = self.episodes_request(id, limit)?;
        self.client.page(request, &PageDecoder::new()).await
    }

    /// Every episode of a show
    pub async fn episodes_all(&self, id: &str) -> Result<PageStream<SimplifiedEpisode>> {
        let request = self.episodes_request(id, Some(50))?;
        self.client.page_stream(request, PageDecoder::new()).await
    }

    fn episodes_request(&self, id: &str, limit: Option<u32>) -> Result<RequestDescriptor> {
        let id = parse_id(SpotifyType::Show, id)?;
        let request =
            RequestDescriptor::get(format!("/shows/{id}/episodes")).query_opt("limit", limit);
        Ok(self.client.market_query(request))
    }
}

/// `/episodes`
#[derive(Debug, Clone, Copy)]
pub struct Episodes<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Episodes<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Episode> {
        let id = parse_id(SpotifyType::Episode, id)?;
        let request = self
            .client
            .market_query(RequestDescriptor::get(format!("/episodes/{id}")));
        self.client.get_json(request).await
    }
}
