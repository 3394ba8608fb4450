// src/config/consts.rs

// Directory listings (page number is appended)
pub const COMPANIES_URL: &str = "https://www.tira.go.tz/licensed-entities/insurance-companies?page=";
pub const BROKERS_URL: &str = "https://www.tira.go.tz/licensed-entities/insurance-brokers?page=";

// Output
pub const DEFAULT_OUT_DIR: &str = ".";
pub const COMPANIES_FILE: &str = "insurance_companies.json";
pub const BROKERS_FILE: &str = "insurance_brokers.json";
pub const JSON_INDENT: &[u8] = b"    ";

// Net
pub const USER_AGENT: &str = concat!("tira_scrape/", env!("CARGO_PKG_VERSION"));

// Geocoding
pub const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const GEOCODE_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const GEOCODE_OK: &str = "OK";

// Normalization
pub const COUNTRY: &str = "TANZANIA";
pub const COUNTRY_CODE: &str = "+255";
pub const TRUNK_PREFIX: char = '0';
pub const ADDRESS_SUFFIX: &str = " Tanzania";

// Injected record keys
pub const KEY_PROFILE_URL: &str = "profile_url";
pub const KEY_COMPANY_NAME: &str = "company_name";

// Listing page markup
pub const SEL_LISTING_ENTRY: &str = "a.row.text-hover-primary.cursor-pointerrr.hover-bg.border-top[href]";
pub const SEL_LISTING_NAME: &str = "div.col-md-8.col-sm-8.col-6.pl-4.d-flex.align-items-center";
pub const SEL_LISTING_BADGE: &str = "span";
pub const UNKNOWN_NAME: &str = "Unknown";

// Detail page markup
pub const SEL_DETAIL_BLOCK: &str = "div.col-md-12.last-no-border.py-2.border-bottom-faded";
pub const SEL_DETAIL_LABEL: &str = "div.faded";
pub const SEL_DETAIL_VALUE: &str = "div.text-dark.mt-0";

// Search
pub const MIN_QUERY_LEN: usize = 2;
