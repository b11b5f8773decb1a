//! Output generation.
//!
//! - [`json`]: writes the scraped article collection to a single JSON file

pub mod json;
