//! # Smashing Scraper
//!
//! Crawls Smashing Magazine's article listing, scrapes each article's
//! title, author, date, categories, summary and body text, and saves the
//! collection as one JSON document.
//!
//! ## Usage
//!
//! ```sh
//! smashing_scraper -o smashingMagazineArticles.json
//! ```
//!
//! ## Architecture
//!
//! The application runs in three steps:
//! 1. **Indexing**: Walk the listing pages one by one and collect article links
//! 2. **Fetching**: Fetch and parse the articles in parallel (10 at a time)
//! 3. **Output**: Write every successfully parsed article to JSON
//!
//! Ctrl-C stops the crawl early; articles collected so far are still written.

use clap::Parser;
use std::error::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod crawl;
mod error;
mod fetcher;
mod models;
mod outputs;
mod scrapers;
mod utils;

#[cfg(test)]
mod test_utils;

use cli::Cli;
use config::ScrapeConfig;
use fetcher::HttpFetcher;
use outputs::json;
use utils::ensure_writable_output;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("smashing_scraper starting up");

    let args = Cli::parse();
    let config = ScrapeConfig::from(args);
    debug!(?config, "Resolved configuration");

    // Early check: fail before crawling if the output cannot be written
    if let Err(e) = ensure_writable_output(&config.output_path).await {
        error!(
            path = %config.output_path.display(),
            error = %e,
            "Output location is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let fetcher = HttpFetcher::new(&config.user_agent)?;

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received; finishing with articles collected so far");
                cancel.cancel();
            }
        });
    }

    // ---- Phase 1: collect article links ----
    info!("Collecting article links");
    let references = crawl::index_articles(&fetcher, &config, &cancel).await;
    info!(count = references.len(), "Collected article references");

    // ---- Phase 2: scrape articles in parallel ----
    info!(workers = config.workers, "Scraping articles in parallel");
    let summary = crawl::fetch_articles(&fetcher, &config, references, &cancel).await;

    // ---- Output ----
    json::write_articles(&summary.articles, &config.output_path).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = summary.articles.len(),
        failed = summary.failed,
        skipped = summary.skipped,
        path = %config.output_path.display(),
        "Scraping completed"
    );

    Ok(())
}
