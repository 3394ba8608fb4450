// src/runner.rs
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::{
    config::options::{Directory, ScrapeOptions},
    error::Result,
    file::write_json,
    progress::Progress,
    record::{DetailRecord, DirectoryResult},
    scrape::Scraper,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub counts: Vec<(Directory, usize)>,
}

/// Collection runner: one pagination run per selected directory, each result
/// written to its own JSON file. Runs share nothing but the scraper.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    options: &ScrapeOptions,
    scraper: &Scraper<'_>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for &dir in &options.directories {
        info!("Scraping {dir}...");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping {dir}..."));
        }

        let path = options.out_path(dir);
        let mut checkpoint = Checkpoint {
            path: options.checkpoint.then(|| path.clone()),
            inner: progress.as_deref_mut(),
        };

        let result = scraper.scrape_all(options.base_url(dir), Some(&mut checkpoint));

        let written = write_directory(&result, &path)?;
        info!("Wrote {} {dir} to {}", result.len(), written.display());

        summary.counts.push((dir, result.len()));
        summary.files_written.push(written);
    }

    info!("Scraping complete.");
    Ok(summary)
}

pub fn write_directory(result: &DirectoryResult, path: &Path) -> Result<PathBuf> {
    write_json(path, &result.records)
}

/// Forwards to the caller's progress sink and, when enabled, rewrites the
/// output file after every listing page.
struct Checkpoint<'p, 'q> {
    path: Option<PathBuf>,
    inner: Option<&'p mut (dyn Progress + 'q)>,
}

impl Progress for Checkpoint<'_, '_> {
    fn log(&mut self, msg: &str) {
        if let Some(p) = self.inner.as_deref_mut() {
            p.log(msg);
        }
    }

    fn item_done(&mut self, record: &DetailRecord) {
        if let Some(p) = self.inner.as_deref_mut() {
            p.item_done(record);
        }
    }

    fn page_done(&mut self, page: u32, records: &[DetailRecord]) {
        if let Some(path) = &self.path {
            // not fatal: the final write still happens
            if let Err(e) = write_json(path, records) {
                error!(page, error = %e, "Checkpoint write failed");
            }
        }
        if let Some(p) = self.inner.as_deref_mut() {
            p.page_done(page, records);
        }
    }

    fn finish(&mut self, result: &DirectoryResult) {
        if let Some(p) = self.inner.as_deref_mut() {
            p.finish(result);
        }
    }
}
