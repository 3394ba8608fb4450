// src/log.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::uptime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::error::{Result, ScrapeError};

/// Default filter for a given `-v` count. `RUST_LOG` wins when set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber: elapsed-time stamped lines on stderr and,
/// optionally, the same lines appended to `log_file` without colours.
/// Calling it twice is harmless; the first subscriber stays.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let console = fmt::layer()
        .with_timer(uptime())
        .with_target(false)
        .with_writer(std::io::stderr);

    let file = match log_file {
        Some(path) => {
            let f = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ScrapeError::io(path, e))?;
            Some(
                fmt::layer()
                    .with_timer(uptime())
                    .with_ansi(false)
                    .with_writer(Mutex::new(f)),
            )
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "info");
        assert_eq!(default_directive(1), "debug");
        assert_eq!(default_directive(7), "trace");
    }

    #[test]
    fn init_twice_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        init(0, Some(&path)).unwrap();
        init(1, None).unwrap();
        assert!(path.exists());
    }
}
