// src/geocode.rs
//! Address lookup against the Google Geocoding JSON API.
//!
//! Only the fields the scraper reads are modelled: `status` and the
//! `formatted_address` of each candidate.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::consts::GEOCODE_OK;
use crate::error::{Result, ScrapeError};

/// Free-text address in, canonical formatted address out.
/// `Ok(None)` means the service answered but found nothing usable.
pub trait Geocode {
    fn geocode(&self, address: &str) -> Result<Option<String>>;
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeCandidate {
    pub formatted_address: String,
}

impl GeocodeResponse {
    /// First formatted address, only when the status is `OK`.
    pub fn best(self) -> Option<String> {
        if self.status != GEOCODE_OK {
            return None;
        }
        self.results.into_iter().next().map(|c| c.formatted_address)
    }
}

pub struct GoogleGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn with_endpoint(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into(), api_key: api_key.into() }
    }
}

impl Geocode for GoogleGeocoder {
    fn geocode(&self, address: &str) -> Result<Option<String>> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .map_err(|source| ScrapeError::Http { url: self.endpoint.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: self.endpoint.clone(), status: status.as_u16() });
        }

        let body: GeocodeResponse = resp.json().map_err(ScrapeError::Geocode)?;
        if body.status != GEOCODE_OK {
            debug!(
                address,
                status = %body.status,
                message = body.error_message.as_deref().unwrap_or(""),
                "Geocoding returned no match"
            );
        }
        Ok(body.best())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_takes_first_candidate_when_ok() {
        let r: GeocodeResponse = serde_json::from_str(
            r#"{"status":"OK","results":[{"formatted_address":"A, Tanzania"},{"formatted_address":"B"}]}"#,
        )
        .unwrap();
        assert_eq!(r.best().as_deref(), Some("A, Tanzania"));
    }

    #[test]
    fn best_is_none_for_any_other_status() {
        let r: GeocodeResponse =
            serde_json::from_str(r#"{"status":"REQUEST_DENIED","error_message":"bad key"}"#).unwrap();
        assert_eq!(r.best(), None);

        let r: GeocodeResponse = serde_json::from_str(r#"{"status":"ZERO_RESULTS","results":[]}"#).unwrap();
        assert_eq!(r.best(), None);
    }

    #[test]
    fn ok_without_results_is_none() {
        let r: GeocodeResponse = serde_json::from_str(r#"{"status":"OK","results":[]}"#).unwrap();
        assert_eq!(r.best(), None);
    }
}
