//! File I/O utilities.
//!
//! The detectors never touch the filesystem. These helpers load a file under a size cap
//! and hand the bytes to [`detect_bytes`].

use crate::core::config::SniffConfig;
use crate::detection::{Detection, Family, detect_bytes};
use crate::{Result, SniffError};
use std::path::Path;

/// Validate that a file exists.
///
/// # Errors
///
/// Returns `SniffError::Validation` if the file doesn't exist.
pub fn validate_file_exists(path: impl AsRef<Path>) -> Result<()> {
    if !path.as_ref().exists() {
        return Err(SniffError::validation(format!(
            "File does not exist: {}",
            path.as_ref().display()
        )));
    }
    Ok(())
}

/// Read a file, refusing anything larger than `max_size` bytes.
///
/// The size is checked from metadata before any content is read.
///
/// # Errors
///
/// - `SniffError::Validation` if the file is missing, not a regular file, or too large
/// - `SniffError::Io` for I/O errors (these always bubble up)
pub fn read_file_capped(path: impl AsRef<Path>, max_size: u64) -> Result<Vec<u8>> {
    let path = path.as_ref();
    validate_file_exists(path)?;

    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(SniffError::validation(format!("Not a regular file: {}", path.display())));
    }

    if metadata.len() > max_size {
        return Err(SniffError::validation(format!(
            "File {} is {} bytes, exceeding the {} byte limit",
            path.display(),
            metadata.len(),
            max_size
        )));
    }

    tracing::debug!("Reading {} ({} bytes)", path.display(), metadata.len());
    std::fs::read(path).map_err(SniffError::Io)
}

/// Read a file under `config.max_input_size` and classify it with `family`.
pub fn detect_file(path: impl AsRef<Path>, family: Family, config: &SniffConfig) -> Result<Detection> {
    let content = read_file_capped(path, config.max_input_size)?;
    Ok(detect_bytes(&content, family))
}
