//! Per-file read with error classification

use crate::core::error::FileReadError;
use std::fs;
use std::path::Path;

/// Read a whole file as UTF-8 text.
///
/// The handle is closed before this returns, on success or failure.
pub fn read_text(path: &Path) -> Result<String, FileReadError> {
    let bytes = fs::read(path).map_err(|e| FileReadError::from_io(e, path))?;
    String::from_utf8(bytes).map_err(|_| FileReadError::Decode)
}
