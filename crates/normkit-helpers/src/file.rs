//! Whole-file text I/O.
//!
//! Writes go through a temporary file in the destination directory and are
//! renamed into place, so readers never observe a partial file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::trace;

use crate::error::{HelperError, Result};

pub fn write_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| HelperError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    trace!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Reads a text file and joins its lines with `\n`.
///
/// Line terminators (`\n` or `\r\n`) are normalized, and a trailing
/// terminator is dropped.
pub fn read_from_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| HelperError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    trace!(path = %path.display(), bytes = content.len(), "read file");
    Ok(content.lines().collect::<Vec<_>>().join("\n"))
}
