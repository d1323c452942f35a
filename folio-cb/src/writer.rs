//! Atomic document writer
//!
//! Serializes each assembled document to pretty-printed JSON with a
//! trailing newline and replaces the previous file atomically: the
//! bytes go to a uniquely-named temporary file in the destination
//! directory first, then a rename swaps it in. A reader (or a
//! concurrent invocation) never observes a half-written document, and
//! concurrent invocations cannot clobber each other's in-flight temp
//! files. Write failure is the one fatal error of the pipeline.

use folio_common::config::ensure_directory_exists;
use folio_common::{Error, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Serialize `value` and atomically (re)place `dir/name`
pub fn write_document<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<()> {
    ensure_directory_exists(dir)?;

    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Document(format!("{name}: {e}")))?;
    let mut bytes = json.into_bytes();
    bytes.push(b'\n');

    // Unique temp file in the same directory: the rename stays on one
    // filesystem and concurrent invocations never share a temp path
    let final_path = dir.join(name);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::Write {
        output: name.to_string(),
        source: e,
    })?;
    tmp.write_all(&bytes).map_err(|e| Error::Write {
        output: name.to_string(),
        source: e,
    })?;
    tmp.persist(&final_path).map_err(|e| Error::Write {
        output: name.to_string(),
        source: e.error,
    })?;

    info!("Wrote {} ({} bytes)", final_path.display(), bytes.len());
    Ok(())
}
