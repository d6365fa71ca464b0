use std::sync::Arc;

/// Events emitted during site generation for progress reporting
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Catalog is being fetched from the API
    FetchingCatalog { url: String },

    /// Catalog has been fetched and mapped into display episodes
    CatalogFetched {
        total_entries: usize,
        usable_episodes: usize,
    },

    /// A catalog entry was left out of the page
    EpisodeSkipped { reason: String },

    /// A page was written to disk
    PageWritten { path: String },

    /// A detail page from an earlier build was removed
    PageRemoved { path: String },

    /// Rendered home page matched the previous build and was not rewritten
    HomeUnchanged { content_hash: String },

    /// Generation finished successfully
    GenerationCompleted {
        latest_count: usize,
        remaining_count: usize,
        pages_written: usize,
    },

    /// Generation failed; the previously generated site is left in place
    GenerationFailed { error: String },

    /// Next regeneration is scheduled
    RevalidationScheduled { interval_secs: u64 },
}

/// Trait for reporting progress events during generation.
///
/// Implementations can use this to display spinners, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {}
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}
