// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod geocode;
pub mod log;
pub mod normalize;
pub mod progress;
pub mod record;
pub mod runner;
pub mod scrape;
pub mod search;
pub mod specs;

pub use error::{Result, ScrapeError};
