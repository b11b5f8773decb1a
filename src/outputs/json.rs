//! JSON output for scraped articles.
//!
//! The whole collection is written once, at the end of a run, as a single
//! pretty-printed array:
//!
//! ```text
//! [
//!   {
//!     "url": "/2024/05/some-article/",
//!     "title": "...",
//!     "author": "...",
//!     "date": "...",
//!     "categories": ["..."],
//!     "summary": "...",
//!     "content": "..."
//!   }
//! ]
//! ```
//!
//! Indentation is two spaces and non-ASCII text is written as-is.

use crate::models::ArticleRecord;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize articles to the output document text.
///
/// Output depends only on the records and their order.
pub fn render_articles(articles: &[ArticleRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(articles)
}

/// Write articles to `path`, replacing any existing file.
///
/// The parent directory is created if it does not exist.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = articles.len()))]
pub async fn write_articles(articles: &[ArticleRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    let json = render_articles(articles)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    info!("Writing JSON");
    fs::write(path, json).await?;
    info!("Wrote article JSON");
    Ok(())
}
