// src/search.rs
//! Name lookup over already scraped collections.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::consts::MIN_QUERY_LEN;
use crate::config::options::Directory;
use crate::record::DetailRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub directory: Directory,
    pub record: &'a DetailRecord,
}

/// Serializes as the record's own fields plus `"type"`.
impl Serialize for SearchHit<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.record.fields();
        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        for (k, v) in fields.iter().filter(|(k, _)| k.as_str() != "type") {
            map.serialize_entry(k, v)?;
        }
        map.serialize_entry("type", self.directory.type_tag())?;
        map.end()
    }
}

/// Case-insensitive substring match on `company_name`. The query is used as
/// typed, surrounding spaces included; shorter than two characters matches nothing. Brokers come first,
/// then companies; each keeps its file order.
pub fn search<'a>(collections: &'a [(Directory, Vec<DetailRecord>)], query: &str) -> Vec<SearchHit<'a>> {
    let needle = query.to_lowercase();
    if needle.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let order = [Directory::Brokers, Directory::Companies];
    order
        .iter()
        .flat_map(|dir| collections.iter().filter(move |(d, _)| d == dir))
        .flat_map(|(dir, records)| {
            records
                .iter()
                .filter(|r| r.company_name().to_lowercase().contains(&needle))
                .map(move |record| SearchHit { directory: *dir, record })
        })
        .collect()
}
