//! Browse service

use super::SpotifyClient;
use crate::decode::PageDecoder;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::model::Category;
use crate::pagination::{Page, PageStream};

/// `/browse/categories`
#[derive(Debug, Clone, Copy)]
pub struct Browse<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Browse<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    /// First page of browse categories
    pub async fn categories(&self, limit: Option<u32>) -> Result<Page<Category>> {
        let request = RequestDescriptor::get("/browse/categories").query_opt("limit", limit);
        self.client.page(request, &PageDecoder::at("categories")).await
    }

    pub async fn categories_all(&self) -> Result<PageStream<Category>> {
        let request = RequestDescriptor::get("/browse/categories").query("limit", 50);
        self.client
            .page_stream(request, PageDecoder::at("categories"))
            .await
    }

    /// One category by its ID (e.g. `dinner`)
    pub async fn category(&self, id: &str) -> Result<Category> {
        self.client
            .get_json(RequestDescriptor::get(format!("/browse/categories/{id}")))
            .await
    }
}
