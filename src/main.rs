use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use podcastr::{
    DEFAULT_REVALIDATE_SECS, NoopReporter, ProgressEvent, ProgressReporter, ReqwestClient,
    SharedProgressReporter, SiteOptions, generate_site, watch_site,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static PAGE: Emoji<'_, '_> = Emoji("📄 ", "[>] ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[?] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "[*] ");
static CLOCK: Emoji<'_, '_> = Emoji("⏰ ", "[@] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");

/// Generate a static podcast listing page from an episode catalog API
#[derive(Parser, Debug)]
#[command(name = "podcastr")]
#[command(about = "Generate a static podcast listing page from an episode catalog API")]
#[command(version)]
struct Args {
    /// Base URL of the catalog API (the episodes endpoint is appended)
    #[arg(env = "PODCASTR_API_URL")]
    api_url: String,

    /// Output directory for the generated pages
    output_dir: PathBuf,

    /// Number of episodes to request from the catalog
    #[arg(short, long, default_value = "12")]
    limit: usize,

    /// Number of episodes featured in the latest section
    #[arg(long, default_value = "2")]
    latest: usize,

    /// Keep running and regenerate the site periodically
    #[arg(short, long)]
    watch: bool,

    /// Seconds between regenerations in watch mode
    #[arg(long, env = "PODCASTR_REVALIDATE_SECS", default_value_t = DEFAULT_REVALIDATE_SECS)]
    revalidate: u64,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Progress reporter using an indicatif spinner for terminal output
struct SpinnerReporter {
    bar: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { bar }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingCatalog { url } => {
                self.bar
                    .set_message(format!("{SEARCH}Fetching catalog: {}", url.cyan()));
            }

            ProgressEvent::CatalogFetched {
                total_entries,
                usable_episodes,
            } => {
                self.bar.set_message(format!(
                    "{HEADPHONES}{} of {} catalog entries usable",
                    usable_episodes.to_string().green(),
                    total_entries.to_string().cyan()
                ));
            }

            ProgressEvent::EpisodeSkipped { reason } => {
                self.bar
                    .println(format!("{WARNING}{} {}", "Skipped:".yellow(), reason.dimmed()));
            }

            ProgressEvent::PageWritten { path } => {
                self.bar.set_message(format!("{PAGE}Wrote {}", path.cyan()));
            }

            ProgressEvent::PageRemoved { path } => {
                self.bar
                    .println(format!("{PAGE}{} {}", "Removed".dimmed(), path.dimmed()));
            }

            ProgressEvent::HomeUnchanged { content_hash } => {
                self.bar.println(format!(
                    "{PAGE}{} ({})",
                    "Home page unchanged".dimmed(),
                    content_hash.dimmed()
                ));
            }

            ProgressEvent::GenerationCompleted {
                latest_count,
                remaining_count,
                pages_written,
            } => {
                self.bar.println(format!(
                    "{PARTY}{} {} latest, {} in table, {} pages written",
                    "Site generated:".bold().green(),
                    latest_count.to_string().green().bold(),
                    remaining_count.to_string().cyan(),
                    pages_written.to_string().yellow()
                ));
            }

            ProgressEvent::GenerationFailed { error } => {
                self.bar.println(format!(
                    "{FAILURE}{} {}",
                    "Generation failed:".red().bold(),
                    error.red()
                ));
            }

            ProgressEvent::RevalidationScheduled { interval_secs } => {
                self.bar.set_message(format!(
                    "{CLOCK}Next regeneration in {}s",
                    interval_secs.to_string().cyan()
                ));
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podcastr".bold().magenta(),
            "- Podcast Page Generator".dimmed()
        );
    }

    let client = ReqwestClient::new();

    let options = SiteOptions {
        limit: args.limit,
        latest_count: args.latest,
        revalidate_secs: args.revalidate,
    };

    let spinner = (!args.quiet).then(|| Arc::new(SpinnerReporter::new()));
    let reporter: SharedProgressReporter = match &spinner {
        Some(spinner) => spinner.clone() as SharedProgressReporter,
        None => NoopReporter::shared(),
    };

    if args.watch {
        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
        };

        let summary = watch_site(
            &client,
            &args.api_url,
            &args.output_dir,
            &options,
            &reporter,
            shutdown,
        )
        .await;

        if let Some(spinner) = &spinner {
            spinner.bar.finish_and_clear();
        }

        if !args.quiet {
            println!(
                "\n{} {} runs, {} failed",
                "Stopped:".bold(),
                summary.runs.to_string().cyan(),
                summary.failures.to_string().red()
            );
        }
    } else {
        generate_site(
            &client,
            &args.api_url,
            &args.output_dir,
            &options,
            &reporter,
        )
        .await
        .context("Failed to generate site")?;
    }

    if let Some(spinner) = spinner {
        spinner.bar.finish_and_clear();
    }

    if !args.quiet {
        println!(
            "\n{FOLDER}Output: {}\n",
            args.output_dir.display().to_string().cyan()
        );
    }

    Ok(())
}
