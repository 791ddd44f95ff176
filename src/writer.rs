//! JSON output for extracted locations
//!
//! The document is serialized in full before anything touches the
//! destination, then written to a temporary file beside it and persisted
//! with a rename. A failed run never leaves a partial document behind.

use crate::error::{ExtractError, Result};
use crate::models::LocationRecord;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Serialize records as a single JSON array
pub fn to_json(records: &[LocationRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Write records to `path`, replacing any existing file
pub fn write_locations(path: &Path, records: &[LocationRecord], pretty: bool) -> Result<()> {
    let json = to_json(records, pretty)?;

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| ExtractError::output_failed(path, e))?;

    let mut temp =
        NamedTempFile::new_in(parent).map_err(|e| ExtractError::output_failed(path, e))?;
    temp.write_all(json.as_bytes())
        .and_then(|_| temp.flush())
        .map_err(|e| ExtractError::output_failed(path, e))?;
    temp.persist(path)
        .map_err(|e| ExtractError::output_failed(path, e.error))?;

    debug!(
        "Wrote {} records ({} bytes) to {}",
        records.len(),
        json.len(),
        path.display()
    );
    Ok(())
}
