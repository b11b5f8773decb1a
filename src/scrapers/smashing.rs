//! Smashing Magazine markup extraction.
//!
//! Listing pages at `/articles` and `/articles/page/{n}/` show one
//! `article.article--post` card per article, each with an `h2 a` link to
//! the article's site-relative path. Article pages carry the header, byline,
//! time, summary and body inside a single `<article>`, plus a `.subnav`
//! with category links.

use crate::error::ScrapeError;
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const CARD: &str = "article.article--post";
const CARD_LINK: &str = "h2 a";
const TITLE: &str = "article .article-header--title";
const AUTHOR: &str = "article a";
const DATE: &str = "article time";
const CATEGORY: &str = ".subnav a";
const SUMMARY: &str = "article .article__summary";
const BODY_MARKER: &str = "div.c-garfield-summary";
const BODY_PARAGRAPH: &str = "div.c-garfield-summary ~ p";

static CARD_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(CARD).unwrap());
static CARD_LINK_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(CARD_LINK).unwrap());
static TITLE_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(TITLE).unwrap());
static AUTHOR_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(AUTHOR).unwrap());
static DATE_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(DATE).unwrap());
static CATEGORY_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(CATEGORY).unwrap());
static SUMMARY_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(SUMMARY).unwrap());
static BODY_MARKER_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(BODY_MARKER).unwrap());
static BODY_PARAGRAPH_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse(BODY_PARAGRAPH).unwrap());

/// Extract article hrefs from a listing page.
///
/// Returns one href per card that has an `h2` link with an `href`, in
/// document order. Markup without cards yields an empty list.
pub fn parse_listing(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&CARD_SEL)
        .filter_map(|card| {
            card.select(&CARD_LINK_SEL)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string)
        })
        .collect()
}

/// Extract an [`ArticleRecord`] from an article page.
///
/// Title, author, date, summary and the body marker are required; the first
/// one missing fails the whole extraction with
/// [`ScrapeError::MissingElement`]. Categories may be empty.
///
/// Every text field, not only categories and body paragraphs, has its
/// surrounding whitespace trimmed; no other normalization is applied.
pub fn parse_article(url: &str, html: &str) -> Result<ArticleRecord, ScrapeError> {
    let document = Html::parse_document(html);

    let title = required_text(&document, &TITLE_SEL, "title", TITLE)?;
    let author = required_text(&document, &AUTHOR_SEL, "author", AUTHOR)?;
    let date = required_text(&document, &DATE_SEL, "date", DATE)?;
    let categories = document
        .select(&CATEGORY_SEL)
        .map(|a| element_text(&a))
        .collect::<Vec<_>>();
    let summary = required_text(&document, &SUMMARY_SEL, "summary", SUMMARY)?;

    if document.select(&BODY_MARKER_SEL).next().is_none() {
        return Err(ScrapeError::MissingElement {
            field: "content",
            selector: BODY_MARKER,
        });
    }
    let content = document
        .select(&BODY_PARAGRAPH_SEL)
        .map(|p| element_text(&p))
        .collect::<Vec<_>>()
        .join("\n");

    debug!(url, categories = categories.len(), bytes = content.len(), "Parsed article");
    Ok(ArticleRecord {
        url: url.to_string(),
        title,
        author,
        date,
        categories,
        summary,
        content,
    })
}

fn required_text(
    document: &Html,
    sel: &Selector,
    field: &'static str,
    selector: &'static str,
) -> Result<String, ScrapeError> {
    document
        .select(sel)
        .next()
        .map(|el| element_text(&el))
        .ok_or(ScrapeError::MissingElement { field, selector })
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
