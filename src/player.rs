use serde::{Deserialize, Serialize};

use crate::episode::Episode;

/// Playback state for the audio player
///
/// Owned by whoever drives playback and passed explicitly to the code that
/// changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
}

impl PlayerState {
    /// Create an empty, stopped player
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the playlist with a single episode and start playing it
    pub fn play(&mut self, episode: Episode) {
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    /// Replace the playlist and start playing at `index`
    ///
    /// An out-of-range index leaves the player untouched and returns false.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> bool {
        if index >= list.len() {
            return false;
        }

        self.episode_list = list;
        self.current_episode_index = index;
        self.is_playing = true;
        true
    }

    pub fn toggle_play(&mut self) {
        if !self.episode_list.is_empty() {
            self.is_playing = !self.is_playing;
        }
    }

    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing && !self.episode_list.is_empty();
    }

    pub fn has_next(&self) -> bool {
        self.current_episode_index + 1 < self.episode_list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// Advance to the next episode; stays put at the end of the list
    pub fn play_next(&mut self) -> bool {
        if self.has_next() {
            self.current_episode_index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one episode; stays put at the start of the list
    pub fn play_previous(&mut self) -> bool {
        if self.has_previous() {
            self.current_episode_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    /// Stop playback and drop the playlist
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
