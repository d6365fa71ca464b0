mod assemble;
mod render;
mod slug;

pub use assemble::{DEFAULT_LATEST_COUNT, HomePage, Row};
pub use render::{render_episode, render_home};
pub use slug::{episode_href, episode_page_path, episode_slug, unique_slugs};
