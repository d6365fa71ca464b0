// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;
use std::future::Future;
use std::path::Path;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::catalog::{CatalogQuery, catalog_url, fetch_catalog};
use crate::episode::episodes_from_catalog;
use crate::error::SiteError;
use crate::http::HttpClient;
use crate::manifest::{SiteManifest, content_hash, read_manifest, write_manifest};
use crate::page::{
    DEFAULT_LATEST_COUNT, HomePage, episode_page_path, render_episode, render_home,
};
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// Default regeneration interval: eight hours
pub const DEFAULT_REVALIDATE_SECS: u64 = 60 * 60 * 8;

const HOME_FILENAME: &str = "index.html";
const EPISODES_DIR: &str = "episodes";

/// Options for site generation
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Number of episodes requested from the catalog
    pub limit: usize,
    /// Number of episodes featured in the latest section
    pub latest_count: usize,
    /// Seconds between regenerations in watch mode
    pub revalidate_secs: u64,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            limit: CatalogQuery::default().limit,
            latest_count: DEFAULT_LATEST_COUNT,
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
        }
    }
}

impl SiteOptions {
    fn query(&self) -> CatalogQuery {
        CatalogQuery {
            limit: self.limit,
            ..Default::default()
        }
    }
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Episodes shown in the latest section
    pub latest: usize,
    /// Episodes shown in the full table
    pub remaining: usize,
    /// Catalog entries left out of the page
    pub skipped: usize,
    /// Number of HTML files written
    pub pages_written: usize,
    /// Detail pages of episodes no longer in the catalog that were deleted
    pub pages_removed: usize,
    /// Whether index.html was rewritten
    pub home_changed: bool,
    /// Hash of the rendered home page
    pub content_hash: String,
}

/// Totals of a watch session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub runs: usize,
    pub failures: usize,
}

/// Generate the static site into `output_dir`
///
/// 1. Fetches the catalog
/// 2. Maps entries into display episodes
/// 3. Splits them into the latest and remaining sections
/// 4. Writes the home page (skipped when identical to the last build) and
///    one detail page per episode
/// 5. Removes detail pages left over from earlier builds
/// 6. Records the build in the manifest
pub async fn generate_site<C: HttpClient>(
    client: &C,
    api_url: &str,
    output_dir: &Path,
    options: &SiteOptions,
    reporter: &SharedProgressReporter,
) -> Result<GenerateResult, SiteError> {
    let query = options.query();
    reporter.report(ProgressEvent::FetchingCatalog {
        url: catalog_url(api_url, &query)?.to_string(),
    });

    let catalog = fetch_catalog(client, api_url, &query).await?;
    let (episodes, rejected) = episodes_from_catalog(&catalog.entries);
    let skipped = catalog.malformed.len() + rejected.len();

    for error in catalog.malformed.iter().chain(&rejected) {
        reporter.report(ProgressEvent::EpisodeSkipped {
            reason: error.to_string(),
        });
    }
    reporter.report(ProgressEvent::CatalogFetched {
        total_entries: catalog.len(),
        usable_episodes: episodes.len(),
    });

    let page = HomePage::from_episodes(episodes, options.latest_count);

    let episodes_dir = output_dir.join(EPISODES_DIR);
    tokio::fs::create_dir_all(&episodes_dir)
        .await
        .map_err(|e| SiteError::CreateDirectoryFailed {
            path: episodes_dir.clone(),
            source: e,
        })?;

    let home_html = render_home(&page);
    let hash = content_hash(&home_html);
    let home_path = output_dir.join(HOME_FILENAME);

    // A missing or unreadable manifest just means there is nothing to compare with
    let unchanged = read_manifest(output_dir)
        .map(|previous| previous.content_hash == hash)
        .unwrap_or(false)
        && home_path.exists();

    let mut pages_written = 0;

    if unchanged {
        reporter.report(ProgressEvent::HomeUnchanged {
            content_hash: hash.clone(),
        });
    } else {
        write_page(output_dir, HOME_FILENAME, &home_html, reporter).await?;
        pages_written += 1;
    }

    let mut current_pages = HashSet::new();
    for row in page.rows() {
        let relative_path = episode_page_path(row.slug);
        write_page(output_dir, &relative_path, &render_episode(row.episode), reporter).await?;
        current_pages.insert(relative_path);
        pages_written += 1;
    }

    let pages_removed = prune_episode_pages(output_dir, &current_pages, reporter).await?;

    let manifest = SiteManifest::new(api_url, page.len(), options.revalidate_secs, &home_html);
    write_manifest(&manifest, output_dir)?;

    reporter.report(ProgressEvent::GenerationCompleted {
        latest_count: page.latest.len(),
        remaining_count: page.remaining.len(),
        pages_written,
    });

    Ok(GenerateResult {
        latest: page.latest.len(),
        remaining: page.remaining.len(),
        skipped,
        pages_written,
        pages_removed,
        home_changed: !unchanged,
        content_hash: hash,
    })
}

/// Regenerate the site every `options.revalidate_secs` until `shutdown` resolves
///
/// The first generation runs immediately. A failed run is reported and the
/// previously written pages stay in place until the next successful one.
pub async fn watch_site<C, F>(
    client: &C,
    api_url: &str,
    output_dir: &Path,
    options: &SiteOptions,
    reporter: &SharedProgressReporter,
    shutdown: F,
) -> WatchSummary
where
    C: HttpClient,
    F: Future<Output = ()>,
{
    let period = Duration::from_secs(options.revalidate_secs.max(1));
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::pin!(shutdown);
    let mut summary = WatchSummary::default();

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => break,

            _ = interval.tick() => {
                summary.runs += 1;

                if let Err(e) = generate_site(client, api_url, output_dir, options, reporter).await {
                    summary.failures += 1;
                    reporter.report(ProgressEvent::GenerationFailed {
                        error: e.to_string(),
                    });
                }

                reporter.report(ProgressEvent::RevalidationScheduled {
                    interval_secs: period.as_secs(),
                });
            }
        }
    }

    summary
}

/// Write a page through a `.partial` file so readers never see half a page
async fn write_page(
    output_dir: &Path,
    relative_path: &str,
    html: &str,
    reporter: &SharedProgressReporter,
) -> Result<(), SiteError> {
    let path = output_dir.join(relative_path);
    let partial_path = output_dir.join(format!("{relative_path}.partial"));

    tokio::fs::write(&partial_path, html)
        .await
        .map_err(|e| SiteError::WritePageFailed {
            path: partial_path.clone(),
            source: e,
        })?;

    tokio::fs::rename(&partial_path, &path)
        .await
        .map_err(|e| SiteError::WritePageFailed {
            path: path.clone(),
            source: e,
        })?;

    reporter.report(ProgressEvent::PageWritten {
        path: relative_path.to_string(),
    });

    Ok(())
}

/// Delete detail pages (and stray `.partial` files) not written by this run
async fn prune_episode_pages(
    output_dir: &Path,
    current_pages: &HashSet<String>,
    reporter: &SharedProgressReporter,
) -> Result<usize, SiteError> {
    let episodes_dir = output_dir.join(EPISODES_DIR);
    let read_dir_failed = |e| SiteError::ReadDirectoryFailed {
        path: episodes_dir.clone(),
        source: e,
    };

    let mut entries = tokio::fs::read_dir(&episodes_dir)
        .await
        .map_err(read_dir_failed)?;
    let mut removed = 0;

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_failed)? {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !(name.ends_with(".html") || name.ends_with(".html.partial")) {
            continue;
        }

        let relative_path = format!("{EPISODES_DIR}/{name}");
        if current_pages.contains(&relative_path) {
            continue;
        }

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| SiteError::RemovePageFailed {
                path: path.clone(),
                source: e,
            })?;
        reporter.report(ProgressEvent::PageRemoved {
            path: relative_path,
        });
        removed += 1;
    }

    Ok(removed)
}
