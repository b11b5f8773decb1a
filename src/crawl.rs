//! The two-phase crawl: paginated link discovery, then bounded parallel
//! article fetching.
//!
//! # Phases
//!
//! 1. [`index_articles`] walks the listing pages one at a time, pausing
//!    between numbered pages, until a page has no article cards or the page
//!    ceiling is reached.
//! 2. [`fetch_articles`] fetches and parses every discovered article with at
//!    most `workers` requests in flight, collecting results in completion
//!    order. A failed article is logged and dropped; it never affects the
//!    others.
//!
//! Both phases watch a [`CancellationToken`] so an interrupted run still
//! returns whatever it has collected.

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::fetcher::FetchPage;
use crate::models::{ArticleRecord, ArticleReference, FetchSummary};
use crate::scrapers::smashing::{parse_article, parse_listing};
use futures::stream::{self, StreamExt};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Fetch one listing page and return the article hrefs on it.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn collect_links<F: FetchPage>(
    fetcher: &F,
    url: &Url,
) -> Result<Vec<String>, ScrapeError> {
    info!("Fetching listing page");
    let html = fetcher.fetch(url).await?;
    let links = parse_listing(&html);
    debug!(count = links.len(), "Collected article links");
    Ok(links)
}

/// Walk the listing pages and collect every article reference.
///
/// Pages are requested strictly in sequence. Pagination stops at the first
/// page without article cards, after `max_pages` pages, or when `cancel`
/// fires. A page that cannot be fetched is logged and skipped rather than
/// being mistaken for the end of the listing.
///
/// References are returned in discovery order; duplicates across pages are
/// kept.
#[instrument(level = "info", skip_all, fields(max_pages = config.max_pages))]
pub async fn index_articles<F: FetchPage>(
    fetcher: &F,
    config: &ScrapeConfig,
    cancel: &CancellationToken,
) -> Vec<ArticleReference> {
    let mut references = Vec::new();
    let mut failed_pages = 0usize;

    for page in 1..=config.max_pages {
        if page > 2 && !config.page_delay.is_zero() {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = sleep(config.page_delay) => {}
            }
        }
        if cancel.is_cancelled() {
            warn!(page, "Interrupted; stopping pagination");
            break;
        }

        let url = match config.listing_url(page) {
            Ok(url) => url,
            Err(e) => {
                error!(page, error = %e, "Cannot build listing URL; stopping pagination");
                break;
            }
        };

        match collect_links(fetcher, &url).await {
            Ok(links) if links.is_empty() => {
                info!(page, "Listing page has no articles; stopping pagination");
                break;
            }
            Ok(links) => {
                info!(page, count = links.len(), "Scraped listing page");
                references.extend(links.into_iter().map(ArticleReference::new));
            }
            Err(e) => {
                failed_pages += 1;
                error!(page, %url, error = %e, "Listing page fetch failed; moving to next page");
            }
        }
    }

    info!(
        count = references.len(),
        failed_pages,
        "Indexed article references"
    );
    references
}

/// Fetch and parse a single article page.
#[instrument(level = "debug", skip_all, fields(url = %reference.url))]
pub async fn fetch_article<F: FetchPage>(
    fetcher: &F,
    config: &ScrapeConfig,
    reference: &ArticleReference,
) -> Result<ArticleRecord, ScrapeError> {
    let url = config.article_url(&reference.url)?;
    let html = fetcher.fetch(&url).await?;
    parse_article(&reference.url, &html)
}

/// Fetch every referenced article with at most `config.workers` in flight.
///
/// All references are queued at once and the pool width is the only
/// throttle. Outcomes are consumed here, in completion order, and only this
/// loop touches the result list. Failed articles are logged and counted.
///
/// When `cancel` fires, in-flight requests are dropped and the articles
/// collected so far are returned; the rest are counted as skipped.
#[instrument(level = "info", skip_all, fields(total = references.len(), workers = config.workers))]
pub async fn fetch_articles<F: FetchPage>(
    fetcher: &F,
    config: &ScrapeConfig,
    references: Vec<ArticleReference>,
    cancel: &CancellationToken,
) -> FetchSummary {
    let total = references.len();
    let mut summary = FetchSummary::default();
    let mut completed = 0usize;

    let mut outcomes = stream::iter(references)
        .map(|reference| async move {
            let outcome = fetch_article(fetcher, config, &reference).await;
            (reference, outcome)
        })
        .buffer_unordered(config.workers.max(1));

    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!(completed, total, "Interrupted; abandoning remaining articles");
                break;
            }
            next = outcomes.next() => next,
        };
        let Some((reference, outcome)) = next else {
            break;
        };
        completed += 1;

        match outcome {
            Ok(record) => {
                info!(url = %record.url, completed, total, "Scraped article");
                summary.articles.push(record);
            }
            Err(e) => {
                summary.failed += 1;
                error!(
                    url = %reference.url,
                    structural = e.is_structural(),
                    error = %e,
                    "Failed to scrape article; skipping"
                );
            }
        }
    }

    summary.skipped = total - completed;
    info!(
        total,
        successful = summary.articles.len(),
        failed = summary.failed,
        skipped = summary.skipped,
        "Completed parallel article fetch"
    );
    summary
}
