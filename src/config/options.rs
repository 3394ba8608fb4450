// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::ScrapeError;

/// One of the two paginated directories on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directory {
    Companies,
    Brokers,
}

impl Directory {
    pub const ALL: [Directory; 2] = [Directory::Companies, Directory::Brokers];

    pub fn default_url(&self) -> &'static str {
        match self {
            Directory::Companies => COMPANIES_URL,
            Directory::Brokers => BROKERS_URL,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Directory::Companies => COMPANIES_FILE,
            Directory::Brokers => BROKERS_FILE,
        }
    }

    /// Tag attached to search hits.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Directory::Companies => "insurance_company",
            Directory::Brokers => "insurance_broker",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Directory::Companies => "insurance companies",
            Directory::Brokers => "insurance brokers",
        }
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Directory {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "companies" | "company" => Ok(Directory::Companies),
            "brokers" | "broker" => Ok(Directory::Brokers),
            other => Err(ScrapeError::Option(format!("unknown directory: {other}"))),
        }
    }
}

/// What to store under an address key when geocoding gives nothing back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressFallback {
    /// Keep the key with a JSON `null`.
    #[default]
    Null,
    /// Keep the raw page text.
    Raw,
    /// Drop the key.
    Omit,
}

impl FromStr for AddressFallback {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" => Ok(AddressFallback::Null),
            "raw" => Ok(AddressFallback::Raw),
            "omit" => Ok(AddressFallback::Omit),
            other => Err(ScrapeError::Option(format!("unknown address fallback: {other}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Directories to scrape, in order.
    pub directories: Vec<Directory>,
    pub companies_url: String,
    pub brokers_url: String,
    /// Hard ceiling on listing pages per directory. `None` = until the site runs dry.
    pub max_pages: Option<u32>,
    pub address_fallback: AddressFallback,
    pub geocode_key: Option<String>,
    pub geocode_endpoint: String,
    pub out_dir: PathBuf,
    /// Per-request HTTP timeout. `None` keeps the client default.
    pub timeout: Option<Duration>,
    /// Rewrite the output file after every listing page.
    pub checkpoint: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            directories: Directory::ALL.to_vec(),
            companies_url: s!(COMPANIES_URL),
            brokers_url: s!(BROKERS_URL),
            max_pages: None,
            address_fallback: AddressFallback::default(),
            geocode_key: None,
            geocode_endpoint: s!(GEOCODE_ENDPOINT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            timeout: None,
            checkpoint: false,
        }
    }
}

impl ScrapeOptions {
    pub fn base_url(&self, dir: Directory) -> &str {
        match dir {
            Directory::Companies => &self.companies_url,
            Directory::Brokers => &self.brokers_url,
        }
    }

    pub fn out_path(&self, dir: Directory) -> PathBuf {
        out_path_in(&self.out_dir, dir)
    }

    /// Blank keys count as missing.
    pub fn geocode_key(&self) -> Option<&str> {
        self.geocode_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

pub fn out_path_in(dir: &Path, directory: Directory) -> PathBuf {
    dir.join(directory.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directory_names() {
        assert_eq!("Companies".parse::<Directory>().unwrap(), Directory::Companies);
        assert_eq!(" broker ".parse::<Directory>().unwrap(), Directory::Brokers);
        assert!("agents".parse::<Directory>().is_err());
    }

    #[test]
    fn parses_address_fallback() {
        assert_eq!("RAW".parse::<AddressFallback>().unwrap(), AddressFallback::Raw);
        assert_eq!("omit".parse::<AddressFallback>().unwrap(), AddressFallback::Omit);
        assert!("skip".parse::<AddressFallback>().is_err());
    }

    #[test]
    fn blank_geocode_key_is_missing() {
        let mut opts = ScrapeOptions::default();
        assert_eq!(opts.geocode_key(), None);
        opts.geocode_key = Some(s!("   "));
        assert_eq!(opts.geocode_key(), None);
        opts.geocode_key = Some(s!(" abc "));
        assert_eq!(opts.geocode_key(), Some("abc"));
    }

    #[test]
    fn default_run_covers_both_directories_in_order() {
        let opts = ScrapeOptions::default();
        assert_eq!(opts.directories, vec![Directory::Companies, Directory::Brokers]);
        assert!(opts.out_path(Directory::Brokers).ends_with(BROKERS_FILE));
        assert_eq!(opts.base_url(Directory::Companies), COMPANIES_URL);
    }
}
