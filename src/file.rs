// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::error::{Result, ScrapeError};
use crate::record::DetailRecord;

/// Write `value` as indented UTF-8 JSON. The file is written next to its
/// target and renamed into place, so readers never see half a file.
/// Returns the final path written to.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let tmp = tmp_path(path);
    let written = write_tmp(&tmp, path, value).and_then(|()| {
        fs::rename(&tmp, path).map_err(|e| ScrapeError::io(path, e))
    });
    if written.is_err() {
        // a half-written temp file is useless; the target is untouched
        let _ = fs::remove_file(&tmp);
    }
    written.map(|()| path.to_path_buf())
}

fn write_tmp<T: Serialize + ?Sized>(tmp: &Path, path: &Path, value: &T) -> Result<()> {
    let file = File::create(tmp).map_err(|e| ScrapeError::io(tmp, e))?;
    let mut out = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser).map_err(|e| ScrapeError::json(path, e))?;
    out.flush().map_err(|e| ScrapeError::io(tmp, e))
}

/// Load a collection written by [`write_json`].
pub fn read_records(path: &Path) -> Result<Vec<DetailRecord>> {
    let file = File::open(path).map_err(|e| ScrapeError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| ScrapeError::json(path, e))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
