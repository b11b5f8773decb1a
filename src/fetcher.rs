//! HTTP page fetching.
//!
//! [`FetchPage`] is the single seam between the pipeline and the network.
//! [`HttpFetcher`] implements it with one pooled `reqwest` client that sends
//! a fixed browser `User-Agent` with every request.

use crate::error::ScrapeError;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use url::Url;

/// Fetch the markup behind a URL.
pub trait FetchPage {
    /// Download `url` and return its body.
    ///
    /// Fails with [`ScrapeError::Status`] on a non-2xx response and
    /// [`ScrapeError::Transport`] when no response could be read.
    async fn fetch(&self, url: &Url) -> Result<String, ScrapeError>;
}

/// [`FetchPage`] over a shared `reqwest::Client`.
///
/// No request timeout is configured; the client's defaults apply.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests all carry `user_agent`.
    pub fn new(user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl FetchPage for HttpFetcher {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        let t0 = Instant::now();
        let transport = |source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url.clone()).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Non-success status");
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}
