// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error::{CatalogError, EpisodeError};

/// A single entry of the episode catalog as served by the API
#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisode {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file: RawFile,
}

/// The media file attached to a catalog entry
#[derive(Debug, Clone, Deserialize)]
pub struct RawFile {
    pub url: String,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub duration: RawDuration,
}

/// Duration as sent by the API
///
/// Numbers and numeric strings are usable; anything else (null, missing,
/// booleans, objects) is kept as `Other` so the entry can be rejected on its
/// own instead of failing the whole catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for RawDuration {
    fn default() -> Self {
        RawDuration::Other(serde_json::Value::Null)
    }
}

/// Catalog entries in API order, split by whether they could be read at all
#[derive(Debug, Default)]
pub struct Catalog {
    pub entries: Vec<RawEpisode>,
    /// Entries whose shape did not match a catalog episode
    pub malformed: Vec<EpisodeError>,
}

impl Catalog {
    /// Number of entries the API returned
    pub fn len(&self) -> usize {
        self.entries.len() + self.malformed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RawDuration {
    /// Numeric value of the duration, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawDuration::Number(n) => Some(*n),
            RawDuration::Text(s) => s.trim().parse().ok(),
            RawDuration::Other(_) => None,
        }
    }
}

impl fmt::Display for RawDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDuration::Number(n) => write!(f, "{n}"),
            RawDuration::Text(s) => write!(f, "{s:?}"),
            RawDuration::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Parse the catalog response body, preserving API order
///
/// Only a body that is not a JSON array fails; each entry is read on its own
/// and malformed ones are collected instead of aborting the parse.
pub fn parse_catalog(json_bytes: &[u8]) -> Result<Catalog, CatalogError> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(json_bytes)?;
    let mut catalog = Catalog::default();

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RawEpisode>(value) {
            Ok(entry) => catalog.entries.push(entry),
            Err(e) => catalog.malformed.push(EpisodeError::Malformed {
                index,
                reason: e.to_string(),
            }),
        }
    }

    Ok(catalog)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
