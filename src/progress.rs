// src/progress.rs
use crate::record::{DetailRecord, DirectoryResult};

/// Lightweight progress reporting for a directory run.
/// Frontends implement this to surface status; the runner uses it to checkpoint.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One entity made it into the result.
    fn item_done(&mut self, _record: &DetailRecord) {}

    /// A listing page has been fully processed; `records` is everything so far.
    fn page_done(&mut self, _page: u32, _records: &[DetailRecord]) {}

    /// Called once when pagination stops.
    fn finish(&mut self, _result: &DirectoryResult) {}
}
