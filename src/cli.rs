//! Command-line interface definitions for the scraper.
//!
//! Every option has a default, so running the binary with no arguments
//! performs the standard crawl.

use crate::config::{
    DEFAULT_MAX_PAGES, DEFAULT_ORIGIN, DEFAULT_OUTPUT, DEFAULT_PAGE_DELAY_MS, DEFAULT_USER_AGENT,
    DEFAULT_WORKERS,
};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Command-line arguments for the scraper.
///
/// # Examples
///
/// ```sh
/// # Standard run: 10 listing pages, 10 workers
/// smashing_scraper
///
/// # Quick run against the first three listing pages
/// smashing_scraper --max-pages 3 -o /tmp/articles.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Site origin to crawl
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    pub origin: Url,

    /// Path of the JSON file to write (overwritten if present)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of article pages fetched concurrently
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Listing pages to visit, counting the un-numbered first page
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Pause between listing page requests, in milliseconds
    #[arg(long, default_value_t = DEFAULT_PAGE_DELAY_MS)]
    pub page_delay_ms: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["smashing_scraper"]);

        assert_eq!(cli.origin.as_str(), "https://www.smashingmagazine.com/");
        assert_eq!(cli.output, PathBuf::from("smashingMagazineArticles.json"));
        assert_eq!(cli.workers, 10);
        assert_eq!(cli.max_pages, 10);
        assert_eq!(cli.page_delay_ms, 1000);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["smashing_scraper", "-o", "/tmp/out.json", "-w", "3"]);

        assert_eq!(cli.output, PathBuf::from("/tmp/out.json"));
        assert_eq!(cli.workers, 3);
    }

    #[test]
    fn test_cli_rejects_bad_origin() {
        assert!(Cli::try_parse_from(["smashing_scraper", "--origin", "not a url"]).is_err());
    }
}
