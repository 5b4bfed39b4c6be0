//! All objects related to user

use super::common::{null_as_default, ExternalUrls, Followers, Image};
use serde::{Deserialize, Serialize};

/// Public user object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PublicUser {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub href: Option<String>,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Private user object, returned for the current user
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PrivateUser {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub href: Option<String>,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    /// `premium`, `free` or `open`
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl PrivateUser {
    /// Display name, falling back to the user ID
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}
