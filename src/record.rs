// src/record.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::config::consts::{KEY_COMPANY_NAME, KEY_PROFILE_URL};
use crate::error::ScrapeError;

/// One row of a listing page, before its detail page is fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryEntry {
    pub name: String,
    pub detail_url: String,
}

pub type Fields = IndexMap<String, Option<String>>;

/// Fields scraped from one detail page, keyed by label, in page order.
/// `profile_url` and `company_name` are always present.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Fields")]
pub struct DetailRecord {
    fields: Fields,
}

impl DetailRecord {
    /// Inject the two guaranteed keys after the page fields. A page label
    /// that already produced one of them is overwritten in place.
    pub fn new(mut fields: Fields, detail_url: &str, name: &str) -> Self {
        fields.insert(s!(KEY_PROFILE_URL), Some(s!(detail_url)));
        fields.insert(s!(KEY_COMPANY_NAME), Some(s!(name)));
        Self { fields }
    }

    pub fn profile_url(&self) -> &str {
        self.required(KEY_PROFILE_URL)
    }

    pub fn company_name(&self) -> &str {
        self.required(KEY_COMPANY_NAME)
    }

    /// `None` when the key is absent, `Some(None)` when it was stored as null.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.fields.get(key).map(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    fn required(&self, key: &str) -> &str {
        // both keys are checked on every construction path
        self.fields.get(key).and_then(|v| v.as_deref()).unwrap_or_default()
    }
}

impl Serialize for DetailRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl TryFrom<Fields> for DetailRecord {
    type Error = ScrapeError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        for key in [KEY_PROFILE_URL, KEY_COMPANY_NAME] {
            match fields.get(key) {
                Some(Some(_)) => {}
                _ => return Err(ScrapeError::MissingKey(key)),
            }
        }
        Ok(Self { fields })
    }
}

/// Why a listing run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Page N could not be fetched.
    FetchFailed(u32),
    /// Page N had no entries: the normal end of a directory.
    EmptyPage(u32),
    /// Page N would have exceeded the configured ceiling.
    PageLimit(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeStats {
    /// Listing pages that yielded entries.
    pub pages: u32,
    pub entries: usize,
    /// Entries whose detail page could not be fetched.
    pub dropped: usize,
    pub stop: Option<StopReason>,
}

/// Records for one directory, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryResult {
    pub records: Vec<DetailRecord>,
    pub stats: ScrapeStats,
}

impl DirectoryResult {
    pub fn new() -> Self {
        Self { records: Vec::new(), stats: ScrapeStats::default() }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
