//! Tracks service

use super::SpotifyClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::model::{join_ids, parse_id, AudioFeatures, SpotifyType, Track};

/// `/tracks` and `/audio-features`
#[derive(Debug, Clone, Copy)]
pub struct Tracks<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Tracks<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Track> {
        let id = parse_id(SpotifyType::Track, id)?;
        let request = self
            .client
            .market_query(RequestDescriptor::get(format!("/tracks/{id}")));
        self.client.get_json(request).await
    }

    /// Get several tracks; unknown IDs come back as `None`
    pub async fn get_several<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Option<Track>>> {
        let request =
            RequestDescriptor::get("/tracks").query("ids", join_ids(SpotifyType::Track, ids)?);
        let request = self.client.market_query(request);
        self.client.get_json_at(request, "tracks").await
    }

    pub async fn audio_features(&self, id: &str) -> Result<AudioFeatures> {
        let id = parse_id(SpotifyType::Track, id)?;
        self.client
            .get_json(RequestDescriptor::get(format!("/audio-features/{id}")))
            .await
    }
}
