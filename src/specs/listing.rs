// src/specs/listing.rs
//! Scraping *spec* for a directory listing page.
//!
//! Each entry on the page is an anchor carrying the detail-page link:
//!
//! ```text
//! <a href="…/insurance-companies/alpha" class="row text-hover-primary cursor-pointerrr hover-bg border-top">
//!   <div class="col-md-8 col-sm-8 col-6 pl-4 d-flex align-items-center">
//!     <span>1</span> Alpha Insurance Ltd
//!   </div>
//!   …
//! </a>
//! ```
//!
//! The leading `<span>` is a row number badge and is not part of the name.
//! A page with no such anchors is how the site says "no more pages".

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::{SEL_LISTING_BADGE, SEL_LISTING_ENTRY, SEL_LISTING_NAME, UNKNOWN_NAME};
use crate::core::html::{first, selector, text_without};
use crate::record::SummaryEntry;

static ENTRY: LazyLock<Selector> = LazyLock::new(|| selector(SEL_LISTING_ENTRY));
static NAME: LazyLock<Selector> = LazyLock::new(|| selector(SEL_LISTING_NAME));
static BADGE: LazyLock<Selector> = LazyLock::new(|| selector(SEL_LISTING_BADGE));

/// Entries in document order; empty when the page lists nothing.
pub fn extract_summaries(html: &str) -> Vec<SummaryEntry> {
    let doc = Html::parse_document(html);

    doc.select(&ENTRY)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let name = match first(a, &NAME) {
                Some(div) => text_without(div, first(div, &BADGE)),
                None => s!(UNKNOWN_NAME),
            };
            Some(SummaryEntry { name, detail_url: href.trim().to_string() })
        })
        .collect()
}
