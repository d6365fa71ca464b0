use crate::episode::Episode;
use crate::player::PlayerState;

use super::slug::unique_slugs;

/// Number of episodes featured in the "latest" section by default
pub const DEFAULT_LATEST_COUNT: usize = 2;

/// Episodes split into the two sections of the home page
///
/// Order comes from the catalog (newest first) and is never recomputed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub latest: Vec<Episode>,
    pub remaining: Vec<Episode>,
    /// Detail page slug per episode, in playlist order
    slugs: Vec<String>,
}

/// A row of either section together with the playlist position it plays
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub playlist_index: usize,
    pub episode: &'a Episode,
    /// Detail page slug, unique within the page
    pub slug: &'a str,
}

impl HomePage {
    /// Split episodes into the first `latest_count` and the rest
    pub fn from_episodes(mut episodes: Vec<Episode>, latest_count: usize) -> Self {
        let slugs = unique_slugs(&episodes);
        let split = latest_count.min(episodes.len());
        let remaining = episodes.split_off(split);

        Self {
            latest: episodes,
            remaining,
            slugs,
        }
    }

    /// All episodes in display order: latest first, then the rest
    pub fn playlist(&self) -> Vec<Episode> {
        self.latest.iter().chain(&self.remaining).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.latest.len() + self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn latest_rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.latest
            .iter()
            .enumerate()
            .map(move |(index, episode)| Row {
                playlist_index: index,
                episode,
                slug: &self.slugs[index],
            })
    }

    /// Rows of the full table; their playlist positions follow the latest section
    pub fn remaining_rows(&self) -> impl Iterator<Item = Row<'_>> {
        let offset = self.latest.len();
        self.remaining
            .iter()
            .enumerate()
            .map(move |(index, episode)| Row {
                playlist_index: index + offset,
                episode,
                slug: &self.slugs[index + offset],
            })
    }

    /// Every row of both sections, in playlist order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.latest_rows().chain(self.remaining_rows())
    }

    /// Load the whole page as the player's playlist, starting at `playlist_index`
    pub fn play(&self, player: &mut PlayerState, playlist_index: usize) -> bool {
        player.play_list(self.playlist(), playlist_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_episodes(count: usize) -> Vec<Episode> {
        (0..count)
            .map(|i| Episode {
                id: format!("ep-{i}"),
                title: format!("Episode {i}"),
                thumbnail: String::new(),
                members: String::new(),
                duration: i as u64 * 60,
                duration_as_string: String::new(),
                url: format!("https://example.com/{i}.mp3"),
                published_at: String::new(),
                description: None,
            })
            .collect()
    }

    fn ids(episodes: &[Episode]) -> Vec<&str> {
        episodes.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn first_two_are_latest() {
        let page = HomePage::from_episodes(make_episodes(5), DEFAULT_LATEST_COUNT);

        assert_eq!(ids(&page.latest), ["ep-0", "ep-1"]);
        assert_eq!(ids(&page.remaining), ["ep-2", "ep-3", "ep-4"]);
    }

    #[test]
    fn short_catalog_leaves_remaining_empty() {
        let page = HomePage::from_episodes(make_episodes(1), DEFAULT_LATEST_COUNT);

        assert_eq!(page.latest.len(), 1);
        assert!(page.remaining.is_empty());

        let empty = HomePage::from_episodes(Vec::new(), DEFAULT_LATEST_COUNT);
        assert!(empty.is_empty());
    }

    #[test]
    fn playlist_concatenates_sections() {
        let page = HomePage::from_episodes(make_episodes(4), DEFAULT_LATEST_COUNT);
        assert_eq!(ids(&page.playlist()), ["ep-0", "ep-1", "ep-2", "ep-3"]);
    }

    #[test]
    fn remaining_rows_are_offset_by_latest_count() {
        let page = HomePage::from_episodes(make_episodes(5), DEFAULT_LATEST_COUNT);

        let latest: Vec<_> = page.latest_rows().map(|r| r.playlist_index).collect();
        let remaining: Vec<_> = page.remaining_rows().map(|r| r.playlist_index).collect();

        assert_eq!(latest, [0, 1]);
        assert_eq!(remaining, [2, 3, 4]);
    }

    #[test]
    fn rows_carry_distinct_slugs_across_sections() {
        let mut episodes = make_episodes(4);
        episodes[0].id = "same id".to_string();
        episodes[3].id = "same-id".to_string();
        let page = HomePage::from_episodes(episodes, DEFAULT_LATEST_COUNT);

        let slugs: Vec<_> = page.rows().map(|r| r.slug).collect();
        assert_eq!(slugs, ["same-id", "ep-1", "ep-2", "same-id-2"]);
    }

    #[test]
    fn every_row_plays_its_own_episode() {
        let page = HomePage::from_episodes(make_episodes(6), DEFAULT_LATEST_COUNT);
        let mut player = PlayerState::new();

        for row in page.rows() {
            assert!(page.play(&mut player, row.playlist_index));
            assert_eq!(player.current_episode(), Some(row.episode));
            assert_eq!(player.episode_list.len(), 6);
        }
    }
}
