//! All objects related to artist

use super::common::{null_as_default, ExternalUrls, Followers, Image};
use serde::{Deserialize, Serialize};

/// Simplified artist object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SimplifiedArtist {
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: Option<String>,
    pub id: Option<String>,
    pub name: String,
    pub uri: Option<String>,
}

/// Full artist object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Artist {
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub href: Option<String>,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    pub uri: Option<String>,
}
