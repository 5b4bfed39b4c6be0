//! The Spotify client: shared request plumbing for every service

use crate::config::ClientConfig;
use crate::decode::{decode_json, decode_json_at, decode_optional, PageDecoder, SerdeConverter};
use crate::error::Result;
use crate::http::{RawResponse, RequestDescriptor, RequestOptions, Transport};
use crate::pagination::{fetch_next_page, Page, PageStream};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::{
    Albums, Artists, Browse, Episodes, Library, Player, Playlists, Search, Shows, Tracks, Users,
};

/// Entry point to the Web API
///
/// Cheap to clone. Every request goes through the same [`Transport`] with the
/// same [`RequestOptions`], and pages remember both so later pages are
/// fetched the same way as the first.
#[derive(Clone)]
pub struct SpotifyClient {
    transport: Arc<dyn Transport>,
    options: RequestOptions,
    market: Option<String>,
}

impl SpotifyClient {
    /// Create a client over any transport
    pub fn new(transport: Arc<dyn Transport>, options: RequestOptions) -> Self {
        Self {
            transport,
            options,
            market: None,
        }
    }

    /// Create a reqwest-backed client from a validated config
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = config.build_http_client()?;
        Ok(Self::new(Arc::new(http), config.request_options())
            .with_market(config.market.clone()))
    }

    /// Set the market (ISO 3166-1 alpha-2) sent with catalog lookups
    #[must_use]
    pub fn with_market(mut self, market: Option<String>) -> Self {
        self.market = market;
        self
    }

    pub fn market(&self) -> Option<&str> {
        self.market.as_deref()
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    // ========================================================================
    // Services
    // ========================================================================

    pub fn albums(&self) -> Albums<'_> {
        Albums::new(self)
    }

    pub fn artists(&self) -> Artists<'_> {
        Artists::new(self)
    }

    pub fn tracks(&self) -> Tracks<'_> {
        Tracks::new(self)
    }

    pub fn playlists(&self) -> Playlists<'_> {
        Playlists::new(self)
    }

    pub fn library(&self) -> Library<'_> {
        Library::new(self)
    }

    pub fn player(&self) -> Player<'_> {
        Player::new(self)
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    pub fn shows(&self) -> Shows<'_> {
        Shows::new(self)
    }

    pub fn episodes(&self) -> Episodes<'_> {
        Episodes::new(self)
    }

    pub fn browse(&self) -> Browse<'_> {
        Browse::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Fetch the page after `page`, decoding it the same way
    pub async fn next_page<T>(
        &self,
        page: &Page<T>,
        decoder: &PageDecoder,
    ) -> Result<Option<Page<T>>>
    where
        T: DeserializeOwned + 'static,
    {
        fetch_next_page(
            self.transport.as_ref(),
            page,
            decoder,
            &SerdeConverter::<T>::new(),
        )
        .await
    }

    /// Walk every item from `first` onwards
    pub fn stream<T>(&self, first: Page<T>, decoder: PageDecoder) -> PageStream<T>
    where
        T: DeserializeOwned + 'static,
    {
        PageStream::new(
            first,
            Arc::clone(&self.transport),
            decoder,
            Arc::new(SerdeConverter::<T>::new()),
        )
    }

    // ========================================================================
    // Request Plumbing
    // ========================================================================

    pub(crate) async fn send(&self, request: &RequestDescriptor) -> Result<RawResponse> {
        self.transport.execute(request, &self.options).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T> {
        let response = self.send(&request).await?;
        decode_json(&response)
    }

    pub(crate) async fn get_json_at<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
        key: &str,
    ) -> Result<T> {
        let response = self.send(&request).await?;
        decode_json_at(&response, key)
    }

    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<Option<T>> {
        let response = self.send(&request).await?;
        decode_optional(&response)
    }

    /// Send a command whose 2xx body carries nothing of interest
    pub(crate) async fn command(&self, request: RequestDescriptor) -> Result<()> {
        self.send(&request).await.map(|_| ())
    }

    pub(crate) async fn page<T>(
        &self,
        request: RequestDescriptor,
        decoder: &PageDecoder,
    ) -> Result<Page<T>>
    where
        T: DeserializeOwned + 'static,
    {
        let response = self.send(&request).await?;
        decoder.decode(
            &response,
            &SerdeConverter::<T>::new(),
            request,
            self.options.clone(),
        )
    }

    pub(crate) async fn page_stream<T>(
        &self,
        request: RequestDescriptor,
        decoder: PageDecoder,
    ) -> Result<PageStream<T>>
    where
        T: DeserializeOwned + 'static,
    {
        let first = self.page(request, &decoder).await?;
        Ok(self.stream(first, decoder))
    }

    /// Add the configured market to a catalog request
    pub(crate) fn market_query(&self, request: RequestDescriptor) -> RequestDescriptor {
        request.query_opt("market", self.market.as_deref())
    }
}

impl std::fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("options", &self.options)
            .field("market", &self.market)
            .finish_non_exhaustive()
    }
}
