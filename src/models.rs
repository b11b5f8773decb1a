//! Data models for discovered and scraped articles.
//!
//! - [`ArticleReference`]: an article link found on a listing page
//! - [`ArticleRecord`]: the fields extracted from one article page
//! - [`FetchSummary`]: the outcome of the parallel fetch phase

use serde::{Deserialize, Serialize};

/// A link to one article, as discovered on a listing page.
///
/// The `url` is kept exactly as it appeared in the `href` attribute, which
/// on the target site is a site-relative path such as `/2024/05/some-slug/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleReference {
    pub url: String,
}

impl ArticleReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Metadata and body text of a single article.
///
/// Records are built in one step by
/// [`parse_article`](crate::scrapers::smashing::parse_article) and never
/// modified afterwards. Field order here is the field order in the output
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// The site-relative href the article was discovered under.
    pub url: String,
    pub title: String,
    pub author: String,
    /// Publication date as displayed on the page; not parsed.
    pub date: String,
    /// Category labels in page order.
    pub categories: Vec<String>,
    pub summary: String,
    /// Body paragraphs, trimmed and joined with `\n`.
    pub content: String,
}

/// Result of running the fetch phase over every discovered reference.
#[derive(Debug, Default)]
pub struct FetchSummary {
    /// Successful records, in completion order.
    pub articles: Vec<ArticleRecord>,
    /// References whose fetch or extraction failed.
    pub failed: usize,
    /// References never completed because the run was interrupted.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ArticleRecord {
        ArticleRecord {
            url: "/2024/05/css-grid/".to_string(),
            title: "CSS Grid".to_string(),
            author: "Rachel Andrew".to_string(),
            date: "May 6, 2024".to_string(),
            categories: vec!["CSS".to_string(), "Layout".to_string()],
            summary: "A short summary.".to_string(),
            content: "First.\nSecond.".to_string(),
        }
    }

    #[test]
    fn test_article_reference_creation() {
        let reference = ArticleReference::new("/2024/05/css-grid/");
        assert_eq!(reference.url, "/2024/05/css-grid/");
    }

    #[test]
    fn test_article_record_field_order() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        let positions: Vec<usize> = [
            "\"url\"",
            "\"title\"",
            "\"author\"",
            "\"date\"",
            "\"categories\"",
            "\"summary\"",
            "\"content\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_article_record_deserialization() {
        let json = r#"{
            "url": "/a/",
            "title": "T",
            "author": "A",
            "date": "D",
            "categories": [],
            "summary": "S",
            "content": "C"
        }"#;
        let record: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.url, "/a/");
        assert!(record.categories.is_empty());
    }
}
