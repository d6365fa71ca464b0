pub mod catalog;
pub mod episode;
pub mod error;
pub mod generate;
pub mod http;
pub mod manifest;
pub mod page;
pub mod player;
pub mod progress;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogQuery, RawEpisode, fetch_catalog};
pub use episode::{Episode, duration_from_raw, format_duration};
pub use error::{CatalogError, EpisodeError, ManifestError, SiteError};
pub use generate::{
    DEFAULT_REVALIDATE_SECS, GenerateResult, SiteOptions, WatchSummary, generate_site, watch_site,
};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use page::{HomePage, render_episode, render_home};
pub use player::PlayerState;
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
