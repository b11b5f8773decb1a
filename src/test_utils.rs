//! Test helpers: an in-memory [`FetchPage`] and a fast configuration.

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::fetcher::FetchPage;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use url::Url;

/// Serves registered pages by URL path and answers 404 for everything else.
///
/// Records every requested path and the highest number of concurrent
/// fetches it has observed.
#[derive(Debug, Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    delay: Duration,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every response for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn insert(&mut self, path: &str, body: String) {
        self.pages.insert(path.to_string(), body);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl FetchPage for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        let path = url.path().to_string();
        self.requests.lock().unwrap().push(path.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.pages.get(&path).cloned().ok_or(ScrapeError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

/// Default configuration with no politeness delay and `workers` slots.
pub fn test_config(workers: usize) -> ScrapeConfig {
    ScrapeConfig {
        workers,
        page_delay: Duration::ZERO,
        ..ScrapeConfig::default()
    }
}
