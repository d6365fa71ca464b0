use serde::{Deserialize, Serialize};

use crate::catalog::RawEpisode;
use crate::error::EpisodeError;

use super::date::{format_published_at, parse_published_at};
use super::duration::{duration_from_raw, format_duration};

/// An episode prepared for display
///
/// Every display string is computed once, when the episode is built from
/// the catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    /// Length in whole seconds
    pub duration: u64,
    pub duration_as_string: String,
    /// Playable media URL
    pub url: String,
    /// Publication date formatted for display
    pub published_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Episode {
    /// Build a display episode from a catalog entry
    pub fn from_raw(raw: &RawEpisode) -> Result<Self, EpisodeError> {
        let duration = raw
            .file
            .duration
            .as_f64()
            .and_then(duration_from_raw)
            .ok_or_else(|| EpisodeError::InvalidDuration {
                id: raw.id.clone(),
                value: raw.file.duration.to_string(),
            })?;

        let published_at =
            parse_published_at(&raw.published_at).ok_or_else(|| EpisodeError::InvalidDate {
                id: raw.id.clone(),
                date_str: raw.published_at.clone(),
            })?;

        Ok(Self {
            id: raw.id.clone(),
            title: raw.title.clone(),
            thumbnail: raw.thumbnail.clone(),
            members: raw.members.clone(),
            duration,
            duration_as_string: format_duration(duration),
            url: raw.file.url.clone(),
            published_at: format_published_at(&published_at),
            description: raw.description.clone(),
        })
    }
}

/// Map catalog entries to display episodes, keeping catalog order
///
/// Entries that cannot be mapped are left out and returned alongside.
pub fn episodes_from_catalog(raw: &[RawEpisode]) -> (Vec<Episode>, Vec<EpisodeError>) {
    let mut episodes = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();

    for entry in raw {
        match Episode::from_raw(entry) {
            Ok(episode) => episodes.push(episode),
            Err(e) => rejected.push(e),
        }
    }

    (episodes, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RawDuration, RawFile};

    fn make_raw(id: &str, duration: RawDuration, published_at: &str) -> RawEpisode {
        RawEpisode {
            id: id.to_string(),
            title: format!("Episode {id}"),
            members: "Diego e Richard".to_string(),
            published_at: published_at.to_string(),
            thumbnail: format!("https://example.com/{id}.jpg"),
            description: Some("<p>Sobre</p>".to_string()),
            file: RawFile {
                url: format!("https://example.com/{id}.m4a"),
                mime_type: Some("audio/x-m4a".to_string()),
                duration,
            },
        }
    }

    #[test]
    fn from_raw_converts_all_fields() {
        let raw = make_raw("ep-1", RawDuration::Number(3981.0), "2021-01-22 19:00:00");
        let episode = Episode::from_raw(&raw).unwrap();

        assert_eq!(episode.id, "ep-1");
        assert_eq!(episode.title, "Episode ep-1");
        assert_eq!(episode.thumbnail, "https://example.com/ep-1.jpg");
        assert_eq!(episode.members, "Diego e Richard");
        assert_eq!(episode.duration, 3981);
        assert_eq!(episode.duration_as_string, "01:06:21");
        assert_eq!(episode.url, "https://example.com/ep-1.m4a");
        assert_eq!(episode.published_at, "22 jan 21");
        assert_eq!(episode.description.as_deref(), Some("<p>Sobre</p>"));
    }

    #[test]
    fn from_raw_truncates_fractional_text_duration() {
        let raw = make_raw("ep-2", RawDuration::Text("61.9".to_string()), "2021-01-22");
        let episode = Episode::from_raw(&raw).unwrap();

        assert_eq!(episode.duration, 61);
        assert_eq!(episode.duration_as_string, "00:01:01");
    }

    #[test]
    fn from_raw_rejects_negative_duration() {
        let raw = make_raw("ep-3", RawDuration::Number(-5.0), "2021-01-22");

        match Episode::from_raw(&raw).unwrap_err() {
            EpisodeError::InvalidDuration { id, value } => {
                assert_eq!(id, "ep-3");
                assert_eq!(value, "-5");
            }
            other => panic!("Expected InvalidDuration, got {other:?}"),
        }
    }

    #[test]
    fn from_raw_rejects_null_duration() {
        let raw = make_raw("ep-6", RawDuration::Other(serde_json::Value::Null), "2021-01-22");

        match Episode::from_raw(&raw).unwrap_err() {
            EpisodeError::InvalidDuration { value, .. } => assert_eq!(value, "null"),
            other => panic!("Expected InvalidDuration, got {other:?}"),
        }
    }

    #[test]
    fn from_raw_rejects_unparseable_date() {
        let raw = make_raw("ep-4", RawDuration::Number(10.0), "sometime");
        assert!(matches!(
            Episode::from_raw(&raw),
            Err(EpisodeError::InvalidDate { .. })
        ));
    }

    #[test]
    fn episodes_from_catalog_keeps_order_and_skips_invalid() {
        let raw = vec![
            make_raw("newest", RawDuration::Number(100.0), "2021-01-22"),
            make_raw("broken", RawDuration::Text("n/a".to_string()), "2021-01-21"),
            make_raw("older", RawDuration::Number(200.0), "2021-01-20"),
        ];

        let (episodes, rejected) = episodes_from_catalog(&raw);

        let ids: Vec<_> = episodes.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["newest", "older"]);
        assert_eq!(rejected.len(), 1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let raw = make_raw("ep-5", RawDuration::Number(60.0), "2021-01-22");
        let json = serde_json::to_value(Episode::from_raw(&raw).unwrap()).unwrap();

        assert_eq!(json["durationAsString"], "00:01:00");
        assert_eq!(json["publishedAt"], "22 jan 21");
    }
}
