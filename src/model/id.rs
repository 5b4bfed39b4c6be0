//! Spotify IDs and URIs
//!
//! Endpoints take bare base-62 IDs. Callers may also pass a `spotify:` URI
//! or an `open.spotify.com` link; [`parse_id`] normalizes all three.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `spotify:<type>:<id>`
static URI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^spotify:(album|artist|track|playlist|show|episode|user):([^:?#/]+)$").unwrap()
});

/// `https://open.spotify.com/[intl-xx/]<type>/<id>[?...]`
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://open\.spotify\.com/(?:intl-[a-z]{2}/)?(album|artist|track|playlist|show|episode|user)/([^?#/]+)",
    )
    .unwrap()
});

static BASE62_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Za-z]{22}$").unwrap());

/// Kind of resource an ID refers to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpotifyType {
    Album,
    Artist,
    Track,
    Playlist,
    Show,
    Episode,
    User,
}

impl SpotifyType {
    pub fn as_str(self) -> &'static str {
        match self {
            SpotifyType::Album => "album",
            SpotifyType::Artist => "artist",
            SpotifyType::Track => "track",
            SpotifyType::Playlist => "playlist",
            SpotifyType::Show => "show",
            SpotifyType::Episode => "episode",
            SpotifyType::User => "user",
        }
    }
}

impl fmt::Display for SpotifyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpotifyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "album" => Ok(SpotifyType::Album),
            "artist" => Ok(SpotifyType::Artist),
            "track" => Ok(SpotifyType::Track),
            "playlist" => Ok(SpotifyType::Playlist),
            "show" => Ok(SpotifyType::Show),
            "episode" => Ok(SpotifyType::Episode),
            "user" => Ok(SpotifyType::User),
            other => Err(Error::Other(format!("Unknown Spotify type: {other}"))),
        }
    }
}

/// A typed Spotify ID
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpotifyId {
    kind: SpotifyType,
    id: String,
}

impl SpotifyId {
    /// Parse a URI or `open.spotify.com` link; the type comes from the input
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let captures = URI_REGEX
            .captures(input)
            .or_else(|| URL_REGEX.captures(input))
            .ok_or_else(|| Error::invalid_id("URI", input))?;

        let kind: SpotifyType = captures[1].parse()?;
        Self::new(kind, &captures[2])
    }

    /// Validate a bare ID of the given type
    pub fn new(kind: SpotifyType, id: &str) -> Result<Self> {
        let valid = match kind {
            // User IDs are account names, not base-62
            SpotifyType::User => !id.is_empty() && !id.contains(['/', '?', '#', ':']),
            _ => BASE62_REGEX.is_match(id),
        };
        if !valid {
            return Err(Error::invalid_id(kind.as_str(), id));
        }
        Ok(Self {
            kind,
            id: id.to_string(),
        })
    }

    pub fn kind(&self) -> SpotifyType {
        self.kind
    }

    /// The bare ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `spotify:<type>:<id>`
    pub fn uri(&self) -> String {
        format!("spotify:{}:{}", self.kind, self.id)
    }
}

impl fmt::Display for SpotifyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spotify:{}:{}", self.kind, self.id)
    }
}

impl FromStr for SpotifyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Normalize a bare ID, URI or link to a bare ID of type `kind`
///
/// A URI or link of another type is rejected.
pub fn parse_id(kind: SpotifyType, input: &str) -> Result<String> {
    let input = input.trim();
    if input.starts_with("spotify:") || input.starts_with("http") {
        let parsed = SpotifyId::parse(input)?;
        if parsed.kind != kind {
            return Err(Error::invalid_id(kind.as_str(), input));
        }
        return Ok(parsed.id);
    }
    SpotifyId::new(kind, input).map(|parsed| parsed.id)
}

/// Normalize several inputs to bare IDs of type `kind`
pub fn parse_ids<S: AsRef<str>>(kind: SpotifyType, inputs: &[S]) -> Result<Vec<String>> {
    inputs
        .iter()
        .map(|input| parse_id(kind, input.as_ref()))
        .collect()
}

/// Normalize several inputs and join them for an `ids` query parameter
pub fn join_ids<S: AsRef<str>>(kind: SpotifyType, inputs: &[S]) -> Result<String> {
    Ok(parse_ids(kind, inputs)?.join(","))
}

/// Normalize an input to a `spotify:<type>:<id>` URI
///
/// A bare ID gets `kind`; URIs and links keep their own type, which is how
/// playlists and the queue accept tracks and episodes alike.
pub fn to_uri(kind: SpotifyType, input: &str) -> Result<String> {
    let input = input.trim();
    let id = if input.starts_with("spotify:") || input.starts_with("http") {
        SpotifyId::parse(input)?
    } else {
        SpotifyId::new(kind, input)?
    };
    Ok(id.uri())
}

/// Normalize several inputs with [`to_uri`]
pub fn to_uris<S: AsRef<str>>(kind: SpotifyType, inputs: &[S]) -> Result<Vec<String>> {
    inputs
        .iter()
        .map(|input| to_uri(kind, input.as_ref()))
        .collect()
}
