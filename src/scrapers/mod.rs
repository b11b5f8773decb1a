//! Site-specific markup extraction.
//!
//! A scraper module knows one site's listing and article markup and exposes
//! two pure functions over HTML text:
//!
//! - `parse_listing(html)`: article hrefs found on a listing page
//! - `parse_article(url, html)`: one article's fields, or the missing element
//!
//! Fetching, pagination and concurrency live in [`crate::crawl`].
//!
//! # Supported Sources
//!
//! | Source | Module | Listing | Notes |
//! |--------|--------|---------|-------|
//! | Smashing Magazine | [`smashing`] | `/articles`, `/articles/page/{n}/` | Article cards are `article.article--post` |

pub mod smashing;
