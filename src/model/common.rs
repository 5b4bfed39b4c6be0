//! Objects shared by several resources

use crate::http::{RequestDescriptor, RequestOptions};
use crate::pagination::{Cursor, Page, PageMeta};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Known external URLs, keyed by service (usually just `spotify`)
pub type ExternalUrls = HashMap<String, String>;

/// Known external IDs (`isrc`, `ean`, `upc`)
pub type ExternalIds = HashMap<String, String>;

/// Image object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Followers object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Followers {
    pub href: Option<String>,
    pub total: u32,
}

/// Content restriction
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Restrictions {
    /// `market`, `product` or `explicit`
    pub reason: String,
}

/// Copyright statement
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Copyright {
    pub text: String,
    /// `C` (copyright) or `P` (performance copyright)
    #[serde(rename = "type")]
    pub kind: String,
}

/// Resume point of an episode
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResumePoint {
    pub fully_played: bool,
    pub resume_position_ms: u64,
}

/// Pick the largest image, if any
pub fn largest_image(images: &[Image]) -> Option<&Image> {
    images
        .iter()
        .max_by_key(|image| {
            u64::from(image.width.unwrap_or(0)) * u64::from(image.height.unwrap_or(0))
        })
}

/// Paging object embedded inside another resource
///
/// Full albums, playlists and shows embed their first page of children.
/// Use [`PagingObject::into_page`] to continue from it with a
/// [`PageStream`](crate::pagination::PageStream).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagingObject<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Default for PagingObject<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            href: None,
            next: None,
            previous: None,
            limit: None,
            offset: None,
            total: None,
        }
    }
}

impl<T> PagingObject<T> {
    /// Paging metadata of the embedded page
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            href: self.href.clone(),
            previous: self.previous.clone(),
            limit: self.limit,
            offset: self.offset,
            total: self.total,
            ..Default::default()
        }
    }

    /// Turn the embedded page into a [`Page`] that can be advanced
    ///
    /// `request` and `options` are the context later pages are fetched with.
    pub fn into_page(self, request: RequestDescriptor, options: RequestOptions) -> Page<T> {
        let meta = self.meta();
        Page::new(self.items, Cursor::new(self.next), request, options).with_meta(meta)
    }
}

/// Deserialize `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
