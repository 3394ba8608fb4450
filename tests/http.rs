// tests/http.rs
//
// The reqwest-backed transport and geocoder against a local mock server.
//
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use tira_scrape::config::options::{AddressFallback, Directory, ScrapeOptions};
use tira_scrape::core::{Fetch, HttpClient, fetch_page};
use tira_scrape::geocode::{Geocode, GoogleGeocoder};
use tira_scrape::normalize::AddressNormalizer;
use tira_scrape::scrape::Scraper;
use tira_scrape::{ScrapeError, file, runner};

#[test]
fn get_returns_body_on_success() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET).path("/list").query_param("page", "1");
        then.status(200).header("content-type", "text/html; charset=utf-8").body("<html>ok</html>");
    });

    let http = HttpClient::new().unwrap();
    let body = http.get(&server.url("/list?page=1")).unwrap();
    assert_eq!(body, "<html>ok</html>");
    m.assert();
}

#[test]
fn non_success_status_is_an_error_and_fetch_page_swallows_it() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("nope");
    });

    let http = HttpClient::new().unwrap();
    let url = server.url("/missing");
    match http.get(&url) {
        Err(ScrapeError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(fetch_page(&http, &url), None);
}

#[test]
fn timeout_turns_a_slow_page_into_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200).delay(Duration::from_secs(2)).body("late");
    });

    let http = HttpClient::with_timeout(Some(Duration::from_millis(100))).unwrap();
    let url = server.url("/slow");
    assert!(matches!(http.get(&url), Err(ScrapeError::Http { .. })));
    assert_eq!(fetch_page(&http, &url), None);
}

#[test]
fn geocoder_sends_address_and_key() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET)
            .path("/geocode/json")
            .query_param("address", "Plot 1 Samora Ave Tanzania")
            .query_param("key", "secret");
        then.status(200).json_body(json!({
            "status": "OK",
            "results": [
                { "formatted_address": "Samora Ave, Dar es Salaam, Tanzania" },
                { "formatted_address": "Somewhere else" }
            ]
        }));
    });

    let http = HttpClient::new().unwrap();
    let geo = GoogleGeocoder::with_endpoint(http.client().clone(), server.url("/geocode/json"), "secret");
    let address = AddressNormalizer::new(Some(Box::new(geo)), AddressFallback::Null);

    assert_eq!(
        address.normalize_address("Plot 1 Samora Ave").as_deref(),
        Some("Samora Ave, Dar es Salaam, Tanzania")
    );
    m.assert();
}

#[test]
fn geocoder_non_ok_status_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geocode/json");
        then.status(200).json_body(json!({ "status": "REQUEST_DENIED", "error_message": "invalid key" }));
    });

    let http = HttpClient::new().unwrap();
    let geo = GoogleGeocoder::with_endpoint(http.client().clone(), server.url("/geocode/json"), "bad");
    assert_eq!(geo.geocode("anything Tanzania").unwrap(), None);
}

#[test]
fn geocoder_transport_failure_degrades_to_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geocode/json");
        then.status(500);
    });

    let http = HttpClient::new().unwrap();
    let geo = GoogleGeocoder::with_endpoint(http.client().clone(), server.url("/geocode/json"), "k");
    assert!(geo.geocode("x").is_err());

    let address = AddressNormalizer::new(Some(Box::new(geo)), AddressFallback::Raw);
    assert_eq!(address.resolve(" Plot 9 "), Some(Some("Plot 9".to_string())));
}

#[test]
fn full_run_over_http() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/insurance-companies").query_param("page", "1");
        then.status(200).body(
            r#"<html><body>
                 <a href="/insurance-companies/alpha" class="row text-hover-primary cursor-pointerrr hover-bg border-top">
                   <div class="col-md-8 col-sm-8 col-6 pl-4 d-flex align-items-center"><span>1</span> Alpha Insurance</div>
                 </a>
               </body></html>"#,
        );
    });
    server.mock(|when, then| {
        when.method(GET).path("/insurance-companies").query_param("page", "2");
        then.status(200).body("<html><body><p>No records</p></body></html>");
    });
    let detail = server.mock(|when, then| {
        when.method(GET).path("/insurance-companies/alpha");
        then.status(200).body(
            r#"<div class="col-md-12 last-no-border py-2 border-bottom-faded">
                 <div class="faded">Phone</div><div class="text-dark mt-0">0222 123 456</div>
               </div>"#,
        );
    });

    let out = tempfile::tempdir().unwrap();
    let options = ScrapeOptions {
        directories: vec![Directory::Companies],
        companies_url: server.url("/insurance-companies?page="),
        out_dir: out.path().to_path_buf(),
        ..ScrapeOptions::default()
    };
    let http = HttpClient::new().unwrap();
    let address = AddressNormalizer::disabled(AddressFallback::Null);
    let scraper = Scraper::new(&http, &address);

    let summary = runner::run(&options, &scraper, None).unwrap();
    detail.assert();

    let records = file::read_records(&summary.files_written[0]).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].company_name(), "Alpha Insurance");
    assert_eq!(records[0].profile_url(), server.url("/insurance-companies/alpha"));
    assert_eq!(records[0].get("phone"), Some(Some("+255222123456")));
}
