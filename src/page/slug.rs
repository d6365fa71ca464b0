use std::collections::HashSet;

use crate::episode::Episode;

/// File-safe form of an episode id
///
/// Anything outside `[A-Za-z0-9_-]` becomes `-`, so ids can never escape
/// the episodes directory.
pub fn episode_slug(id: &str) -> String {
    let slug: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();

    if slug.is_empty() {
        "episode".to_string()
    } else {
        slug
    }
}

/// One distinct slug per episode, in order
///
/// The first episode keeps its plain slug; later episodes whose slug is taken
/// get the first free `-2`, `-3`, ... suffix.
pub fn unique_slugs<'a>(episodes: impl IntoIterator<Item = &'a Episode>) -> Vec<String> {
    let mut taken = HashSet::new();

    episodes
        .into_iter()
        .map(|episode| {
            let base = episode_slug(&episode.id);
            let mut slug = base.clone();
            let mut suffix = 2;

            while taken.contains(&slug) {
                slug = format!("{base}-{suffix}");
                suffix += 1;
            }

            taken.insert(slug.clone());
            slug
        })
        .collect()
}

/// Location of a detail page, relative to the output directory
pub fn episode_page_path(slug: &str) -> String {
    format!("episodes/{slug}.html")
}

/// Link to a detail page from anywhere on the site
pub fn episode_href(slug: &str) -> String {
    format!("/{}", episode_page_path(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_episode(id: &str) -> Episode {
        Episode {
            id: id.to_string(),
            title: String::new(),
            thumbnail: String::new(),
            members: String::new(),
            duration: 0,
            duration_as_string: "00:00:00".to_string(),
            url: String::new(),
            published_at: String::new(),
            description: None,
        }
    }

    #[test]
    fn slug_keeps_safe_ids_and_replaces_the_rest() {
        assert_eq!(episode_slug("a-importancia_2"), "a-importancia_2");
        assert_eq!(episode_slug("../../etc/passwd"), "------etc-passwd");
        assert_eq!(episode_slug("episódio 1"), "epis-dio-1");
        assert_eq!(episode_slug(""), "episode");
    }

    #[test]
    fn href_points_at_detail_page() {
        assert_eq!(episode_page_path("ep-3"), "episodes/ep-3.html");
        assert_eq!(episode_href("ep-3"), "/episodes/ep-3.html");
    }

    #[test]
    fn distinct_ids_keep_plain_slugs() {
        let episodes = [make_episode("a"), make_episode("b")];
        assert_eq!(unique_slugs(&episodes), ["a", "b"]);
    }

    #[test]
    fn colliding_ids_get_numbered_suffixes() {
        let episodes = [
            make_episode("ep 1"),
            make_episode("ep-1"),
            make_episode("ep/1"),
        ];
        assert_eq!(unique_slugs(&episodes), ["ep-1", "ep-1-2", "ep-1-3"]);
    }

    #[test]
    fn suffix_skips_slugs_already_used_by_real_ids() {
        let episodes = [
            make_episode("ep-1"),
            make_episode("ep-1-2"),
            make_episode("ep 1"),
        ];
        assert_eq!(unique_slugs(&episodes), ["ep-1", "ep-1-2", "ep-1-3"]);
    }
}
