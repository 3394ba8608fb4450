// src/core/net.rs
// Blocking HTTP GET behind a small trait so the pipeline can run against fakes.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// The transport the scraper needs: one GET, body on success.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// `None` keeps the transport's own default.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }

    /// Shared with the geocoder so both reuse one connection pool.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Http { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(|source| ScrapeError::Http { url: s!(url), source })
    }
}

/// Page Fetcher: markup on success, `None` (logged) on any failure.
pub fn fetch_page(fetcher: &dyn Fetch, url: &str) -> Option<String> {
    match fetcher.get(url) {
        Ok(body) => Some(body),
        Err(ScrapeError::Status { status, .. }) => {
            warn!(url, status, "Failed to fetch page");
            None
        }
        Err(e) => {
            warn!(url, error = %e, "Failed to fetch page");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Always(Result<&'static str, u16>);

    impl Fetch for Always {
        fn get(&self, url: &str) -> Result<String> {
            match self.0 {
                Ok(body) => Ok(s!(body)),
                Err(status) => Err(ScrapeError::Status { url: s!(url), status }),
            }
        }
    }

    #[test]
    fn success_passes_body_through() {
        let f = Always(Ok("<html></html>"));
        assert_eq!(fetch_page(&f, "http://x/1").as_deref(), Some("<html></html>"));
    }

    #[test]
    fn status_failure_becomes_none() {
        let f = Always(Err(404));
        assert_eq!(fetch_page(&f, "http://x/1"), None);
    }
}
