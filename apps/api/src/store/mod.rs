//! Plan/Session Store: JSON file persistence with atomic writes.
//!
//! Both the interview plan and the interview session are whole-document JSON
//! files. Loads never create or mutate anything on disk; saves validate the
//! document before any file mutation and write via a tempfile-plus-rename so
//! a reader observes either the prior or the new complete content.

pub mod merge;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Loads a JSON document from disk.
/// A missing file is `StoreError::NotFound`; invalid content is `Malformed`.
pub fn load_json(path: &Path) -> Result<Value, StoreError> {
    load(path)
}

/// Typed variant of [`load_json`].
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Saves raw JSON text to disk. The text is parsed first; malformed input is
/// rejected before the target file is touched.
pub fn save_json(raw: &str, path: &Path) -> Result<(), StoreError> {
    let value: Value = serde_json::from_str(raw)?;
    save_value(&value, path)
}

/// Serializes `value` as pretty JSON and writes it atomically: the document
/// goes to a temp file in the target directory, then is renamed over `path`.
pub fn save_value<T: Serialize>(value: &T, path: &Path) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)?;
    serde_json::to_writer_pretty(&mut tmp, value)?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    debug!("Saved {}", path.display());
    Ok(())
}
