//! Search service

use super::SpotifyClient;
use crate::decode::{PageDecoder, SerdeConverter};
use crate::error::Result;
use crate::http::{RawResponse, RequestDescriptor};
use crate::model::{
    Artist, SearchType, SimplifiedAlbum, SimplifiedEpisode, SimplifiedPlaylist, SimplifiedShow,
    Track,
};
use crate::pagination::{Page, PageStream};
use serde::de::DeserializeOwned;

/// One page per requested type
///
/// A type that was not requested is `None`. Each page advances on its own:
/// the API gives every type its own `next` URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub tracks: Option<Page<Track>>,
    pub artists: Option<Page<Artist>>,
    pub albums: Option<Page<SimplifiedAlbum>>,
    pub playlists: Option<Page<SimplifiedPlaylist>>,
    pub shows: Option<Page<SimplifiedShow>>,
    pub episodes: Option<Page<SimplifiedEpisode>>,
}

/// `/search`
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Search<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    fn request(&self, query: &str, types: &[SearchType], limit: Option<u32>) -> RequestDescriptor {
        let request = RequestDescriptor::get("/search")
            .query("q", query)
            .query("type", SearchType::join(types))
            .query_opt("limit", limit);
        self.client.market_query(request)
    }

    /// Search several types at once
    pub async fn search(
        &self,
        query: &str,
        types: &[SearchType],
        limit: Option<u32>,
    ) -> Result<SearchResults> {
        let request = self.request(query, types, limit);
        let response = self.client.send(&request).await?;

        let mut results = SearchResults::default();
        for &kind in types {
            match kind {
                SearchType::Track => results.tracks = Some(self.decode(&response, &request, kind)?),
                SearchType::Artist => {
                    results.artists = Some(self.decode(&response, &request, kind)?);
                }
                SearchType::Album => results.albums = Some(self.decode(&response, &request, kind)?),
                SearchType::Playlist => {
                    results.playlists = Some(self.decode(&response, &request, kind)?);
                }
                SearchType::Show => results.shows = Some(self.decode(&response, &request, kind)?),
                SearchType::Episode => {
                    results.episodes = Some(self.decode(&response, &request, kind)?);
                }
            }
        }
        Ok(results)
    }

    fn decode<T>(
        &self,
        response: &RawResponse,
        request: &RequestDescriptor,
        kind: SearchType,
    ) -> Result<Page<T>>
    where
        T: DeserializeOwned + 'static,
    {
        PageDecoder::at(kind.envelope()).decode(
            response,
            &SerdeConverter::<T>::new(),
            request.clone(),
            self.client.options().clone(),
        )
    }

    /// First page of matching tracks
    pub async fn search_tracks(&self, query: &str, limit: Option<u32>) -> Result<Page<Track>> {
        let request = self.request(query, &[SearchType::Track], limit);
        self.client.page(request, &PageDecoder::at("tracks")).await
    }

    /// Every matching track the API will page through
    pub async fn search_tracks_all(&self, query: &str) -> Result<PageStream<Track>> {
        self.search_all(query, SearchType::Track).await
    }

    /// Every match of one type, decoded as `T`
    ///
    /// `T` must fit the objects of `kind`, e.g. [`Artist`] for
    /// [`SearchType::Artist`], or `serde_json::Value` for raw objects.
    pub async fn search_all<T>(&self, query: &str, kind: SearchType) -> Result<PageStream<T>>
    where
        T: DeserializeOwned + 'static,
    {
        let request = self.request(query, &[kind], Some(50));
        self.client
            .page_stream(request, PageDecoder::at(kind.envelope()))
            .await
    }
}
