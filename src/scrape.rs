// src/scrape.rs
use std::iter::FusedIterator;

use tracing::{info, warn};
use url::Url;

use crate::{
    core::net::{Fetch, fetch_page},
    normalize::AddressNormalizer,
    progress::Progress,
    record::{DetailRecord, DirectoryResult, StopReason, SummaryEntry},
    specs::{detail::extract_detail, listing::extract_summaries},
};

/// One listing page that had entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingPage {
    pub number: u32,
    pub url: String,
    pub entries: Vec<SummaryEntry>,
}

pub fn page_url(base_url: &str, page: u32) -> String {
    format!("{base_url}{page}")
}

/// Absolute hrefs are kept verbatim; relative ones are joined onto the
/// listing page they came from.
pub fn resolve_detail_url(page_url: &str, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return s!(href);
    }
    Url::parse(page_url)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| s!(href))
}

/// Listing pages 1, 2, 3, … of one directory.
///
/// Finite: ends at the first page that fails to fetch, lists nothing, or
/// would pass `max_pages`. Once ended it stays ended; the reason is kept in
/// [`ListingPages::stop_reason`].
pub struct ListingPages<'a> {
    fetcher: &'a dyn Fetch,
    base_url: String,
    next_page: u32,
    max_pages: Option<u32>,
    stop: Option<StopReason>,
}

impl<'a> ListingPages<'a> {
    pub fn new(fetcher: &'a dyn Fetch, base_url: impl Into<String>, max_pages: Option<u32>) -> Self {
        Self { fetcher, base_url: base_url.into(), next_page: 1, max_pages, stop: None }
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }
}

impl Iterator for ListingPages<'_> {
    type Item = ListingPage;

    fn next(&mut self) -> Option<ListingPage> {
        if self.stop.is_some() {
            return None;
        }
        let page = self.next_page;

        if self.max_pages.is_some_and(|max| page > max) {
            info!("Reached the page limit before page {page}. Stopping.");
            self.stop = Some(StopReason::PageLimit(page));
            return None;
        }

        info!("Scraping page {page}...");
        let url = page_url(&self.base_url, page);

        let Some(html) = fetch_page(self.fetcher, &url) else {
            info!("Stopping at page {page} due to no response.");
            self.stop = Some(StopReason::FetchFailed(page));
            return None;
        };

        let entries = extract_summaries(&html);
        if entries.is_empty() {
            info!("No more data found on page {page}. Stopping.");
            self.stop = Some(StopReason::EmptyPage(page));
            return None;
        }

        self.next_page += 1;
        Some(ListingPage { number: page, url, entries })
    }
}

impl FusedIterator for ListingPages<'_> {}

/// Pagination driver: walks a directory's listing pages and enriches every
/// entry from its detail page, strictly in order.
pub struct Scraper<'a> {
    fetcher: &'a dyn Fetch,
    address: &'a AddressNormalizer,
    max_pages: Option<u32>,
}

impl<'a> Scraper<'a> {
    pub fn new(fetcher: &'a dyn Fetch, address: &'a AddressNormalizer) -> Self {
        Self { fetcher, address, max_pages: None }
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn pages(&self, base_url: &str) -> ListingPages<'a> {
        ListingPages::new(self.fetcher, base_url, self.max_pages)
    }

    pub fn extract_detail(&self, entry: &SummaryEntry) -> Option<DetailRecord> {
        extract_detail(self.fetcher, self.address, &entry.name, &entry.detail_url)
    }

    /// Everything one directory has to offer, in page then listing order.
    /// Entities whose detail page fails are dropped, never retried.
    pub fn scrape_all(&self, base_url: &str, mut progress: Option<&mut dyn Progress>) -> DirectoryResult {
        let mut result = DirectoryResult::new();
        let mut pages = self.pages(base_url);

        for page in pages.by_ref() {
            result.stats.pages += 1;
            result.stats.entries += page.entries.len();

            for entry in page.entries {
                let entry = SummaryEntry {
                    detail_url: resolve_detail_url(&page.url, &entry.detail_url),
                    ..entry
                };
                match self.extract_detail(&entry) {
                    Some(record) => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(&record);
                        }
                        result.records.push(record);
                    }
                    None => {
                        warn!(name = %entry.name, url = %entry.detail_url, "Dropping entity; detail page unavailable");
                        result.stats.dropped += 1;
                    }
                }
            }

            if let Some(p) = progress.as_deref_mut() {
                p.page_done(page.number, &result.records);
            }
        }

        result.stats.stop = pages.stop_reason();
        info!(
            records = result.len(),
            pages = result.stats.pages,
            dropped = result.stats.dropped,
            "Finished {base_url}"
        );

        if let Some(p) = progress.as_deref_mut() {
            p.finish(&result);
        }
        result
    }
}
