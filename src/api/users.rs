//! Users service

use super::SpotifyClient;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::model::{parse_id, PrivateUser, PublicUser, SpotifyType};

/// `/me` and `/users`
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a SpotifyClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    /// Profile of the user the access token belongs to
    pub async fn current_user(&self) -> Result<PrivateUser> {
        self.client.get_json(RequestDescriptor::get("/me")).await
    }

    pub async fn get(&self, user_id: &str) -> Result<PublicUser> {
        let user_id = parse_id(SpotifyType::User, user_id)?;
        self.client
            .get_json(RequestDescriptor::get(format!("/users/{user_id}")))
            .await
    }
}
