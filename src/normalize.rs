// src/normalize.rs
//! Field normalizers applied by the detail extractor.
//!
//! Phone and country are pure string transforms. Address goes out to a
//! [`Geocode`] collaborator, which may be missing entirely when no API key
//! was configured.

use std::cell::Cell;

use tracing::warn;

use crate::config::consts::{ADDRESS_SUFFIX, COUNTRY, COUNTRY_CODE, TRUNK_PREFIX};
use crate::config::options::AddressFallback;
use crate::core::sanitize::dialable;
use crate::geocode::Geocode;

/// Canonical `+255…` form for Tanzanian numbers. Anything without a
/// recognizable prefix is returned stripped but otherwise unchanged.
pub fn normalize_phone(raw: &str) -> String {
    let phone = dialable(raw);
    if phone.starts_with(COUNTRY_CODE) {
        phone
    } else if let Some(rest) = phone.strip_prefix(TRUNK_PREFIX) {
        format!("{COUNTRY_CODE}{rest}")
    } else {
        // "+<other code>" or bare digits: nothing to infer
        phone
    }
}

/// The directory only lists entities in one jurisdiction.
pub fn normalize_country(_raw: &str) -> String {
    s!(COUNTRY)
}

/// How a record key is routed to a normalizer. Checked in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Address,
    Country,
    Phone,
    Plain,
}

impl FieldKind {
    pub fn classify(key: &str) -> Self {
        if key.contains("address") {
            FieldKind::Address
        } else if key.contains("country") {
            FieldKind::Country
        } else if key.contains("phone") {
            FieldKind::Phone
        } else {
            FieldKind::Plain
        }
    }
}

pub struct AddressNormalizer {
    geocoder: Option<Box<dyn Geocode>>,
    fallback: AddressFallback,
    warned: Cell<bool>,
}

impl AddressNormalizer {
    pub fn new(geocoder: Option<Box<dyn Geocode>>, fallback: AddressFallback) -> Self {
        Self { geocoder, fallback, warned: Cell::new(false) }
    }

    /// No lookups at all; every address takes the fallback.
    pub fn disabled(fallback: AddressFallback) -> Self {
        Self::new(None, fallback)
    }

    pub fn is_enabled(&self) -> bool {
        self.geocoder.is_some()
    }

    /// Geocoded form of `raw` with the country suffix appended, or `None`.
    /// Collaborator errors are logged and count as "not found".
    pub fn normalize_address(&self, raw: &str) -> Option<String> {
        let Some(geocoder) = self.geocoder.as_deref() else {
            if !self.warned.replace(true) {
                warn!("No geocoding API key configured; addresses will not be normalized");
            }
            return None;
        };

        let query = format!("{}{ADDRESS_SUFFIX}", raw.trim());
        match geocoder.geocode(&query) {
            Ok(found) => found,
            Err(e) => {
                warn!(address = %query, error = %e, "Geocoding failed");
                None
            }
        }
    }

    /// Value to store for an address field, after the fallback policy.
    /// Outer `None` means the key is dropped.
    pub fn resolve(&self, raw: &str) -> Option<Option<String>> {
        match self.normalize_address(raw) {
            Some(addr) => Some(Some(addr)),
            None => match self.fallback {
                AddressFallback::Null => Some(None),
                AddressFallback::Raw => Some(Some(raw.trim().to_string())),
                AddressFallback::Omit => None,
            },
        }
    }
}
