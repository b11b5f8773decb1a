//! Runtime configuration for a scrape run.
//!
//! Every tunable the pipeline uses lives in [`ScrapeConfig`] and is passed
//! explicitly to each phase. The defaults reproduce a polite crawl of
//! Smashing Magazine's `/articles` listing.

use crate::cli::Cli;
use crate::error::ScrapeError;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ORIGIN: &str = "https://www.smashingmagazine.com";
pub const DEFAULT_LISTING_PATH: &str = "/articles";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_OUTPUT: &str = "smashingMagazineArticles.json";
pub const DEFAULT_MAX_PAGES: u32 = 10;
pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_PAGE_DELAY_MS: u64 = 1000;

/// Settings shared by the pagination, fetch and output phases.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Scheme and host every request is sent to.
    pub origin: Url,
    /// Path of the first, un-numbered listing page.
    pub listing_path: String,
    /// Value of the `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Number of listing pages to visit, counting the un-numbered first page.
    pub max_pages: u32,
    /// Number of article fetches allowed in flight at once.
    pub workers: usize,
    /// Pause between consecutive numbered listing requests.
    pub page_delay: Duration,
    /// Where the JSON document is written.
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            origin: Url::parse(DEFAULT_ORIGIN).expect("default origin is a valid URL"),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            workers: DEFAULT_WORKERS,
            page_delay: Duration::from_millis(DEFAULT_PAGE_DELAY_MS),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ScrapeConfig {
    /// URL of listing page `page`.
    ///
    /// Page 1 is the bare listing path (`/articles`); later pages live under
    /// `/articles/page/{n}/`.
    pub fn listing_url(&self, page: u32) -> Result<Url, ScrapeError> {
        let base = self.listing_path.trim_end_matches('/');
        let path = if page <= 1 {
            base.to_string()
        } else {
            format!("{base}/page/{page}/")
        };
        self.resolve(&path)
    }

    /// Resolve an href found in listing markup against the origin.
    pub fn article_url(&self, href: &str) -> Result<Url, ScrapeError> {
        self.resolve(href)
    }

    fn resolve(&self, href: &str) -> Result<Url, ScrapeError> {
        self.origin
            .join(href)
            .map_err(|source| ScrapeError::InvalidUrl {
                href: href.to_string(),
                source,
            })
    }
}

impl From<Cli> for ScrapeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            origin: cli.origin,
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            user_agent: cli.user_agent,
            max_pages: cli.max_pages,
            workers: cli.workers.max(1),
            page_delay: Duration::from_millis(cli.page_delay_ms),
            output_path: cli.output,
        }
    }
}
