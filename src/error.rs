//! Error types for fetching and extracting articles.
//!
//! Per-page and per-article failures are values of [`ScrapeError`]. The
//! pipeline logs and drops them at the item level; only errors raised while
//! setting up the run or writing the output reach `main`.

use thiserror::Error;

/// Why a page could not be turned into links or an article record.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network or protocol failure before a response was read.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// An href could not be resolved against the origin.
    #[error("invalid article url {href:?}: {source}")]
    InvalidUrl {
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// A required element was absent from the article markup.
    #[error("missing {field} (selector `{selector}`)")]
    MissingElement {
        field: &'static str,
        selector: &'static str,
    },
}

impl ScrapeError {
    /// True for failures caused by the markup rather than the network.
    pub fn is_structural(&self) -> bool {
        matches!(self, ScrapeError::MissingElement { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = ScrapeError::MissingElement {
            field: "title",
            selector: "article .article-header--title",
        };
        assert_eq!(
            err.to_string(),
            "missing title (selector `article .article-header--title`)"
        );
        assert!(err.is_structural());
    }

    #[test]
    fn test_status_message() {
        let err = ScrapeError::Status {
            url: "https://example.com/articles".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "https://example.com/articles returned HTTP 404");
        assert!(!err.is_structural());
    }
}
