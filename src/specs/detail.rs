// src/specs/detail.rs
//! Scraping *spec* for an entity's detail page.
//!
//! Fields come as repeated label/value blocks:
//!
//! ```text
//! <div class="col-md-12 last-no-border py-2 border-bottom-faded">
//!   <div class="faded">Phone Number</div>
//!   <div class="text-dark mt-0">0712 345 678</div>
//! </div>
//! ```
//!
//! The set of labels differs per entity, so the record is keyed by whatever
//! labels the page has. Keys mentioning address, country or phone go through
//! the normalizers.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::config::consts::{SEL_DETAIL_BLOCK, SEL_DETAIL_LABEL, SEL_DETAIL_VALUE};
use crate::core::html::{first, selector, text_of};
use crate::core::net::{Fetch, fetch_page};
use crate::core::sanitize::field_key;
use crate::normalize::{AddressNormalizer, FieldKind, normalize_country, normalize_phone};
use crate::record::{DetailRecord, Fields};

static BLOCK: LazyLock<Selector> = LazyLock::new(|| selector(SEL_DETAIL_BLOCK));
static LABEL: LazyLock<Selector> = LazyLock::new(|| selector(SEL_DETAIL_LABEL));
static VALUE: LazyLock<Selector> = LazyLock::new(|| selector(SEL_DETAIL_VALUE));

/// Fetch and parse one detail page. `None` when the page can't be fetched;
/// the entity is then left out of the directory.
pub fn extract_detail(
    fetcher: &dyn Fetch,
    address: &AddressNormalizer,
    name: &str,
    detail_url: &str,
) -> Option<DetailRecord> {
    info!("Reading the url: {detail_url}");
    let html = fetch_page(fetcher, detail_url)?;
    Some(parse_detail(&html, name, detail_url, address))
}

/// Parse an already fetched detail page.
pub fn parse_detail(html: &str, name: &str, detail_url: &str, address: &AddressNormalizer) -> DetailRecord {
    let doc = Html::parse_document(html);
    let mut fields = Fields::new();

    for block in doc.select(&BLOCK) {
        let (Some(label), Some(value)) = (first(block, &LABEL), first(block, &VALUE)) else {
            continue;
        };

        let key = field_key(&text_of(label));
        let raw = text_of(value);

        let stored = match FieldKind::classify(&key) {
            FieldKind::Address => match address.resolve(&raw) {
                Some(v) => v,
                None => {
                    // omitted by policy; an earlier value under this key goes too
                    fields.shift_remove(&key);
                    continue;
                }
            },
            FieldKind::Country => Some(normalize_country(&raw)),
            FieldKind::Phone => Some(normalize_phone(&raw)),
            FieldKind::Plain => Some(raw),
        };

        if fields.contains_key(&key) {
            debug!(key = %key, detail_url, "Duplicate label; keeping the later value");
        }
        fields.insert(key, stored);
    }

    DetailRecord::new(fields, detail_url, name)
}
