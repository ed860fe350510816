//! Shared file target access for the codecs.

use bookshelf_core::{StorageError, StorageResult};
use std::fs;
use std::io;
use std::path::Path;

/// Reads the whole target into memory.
///
/// A missing file maps to [`StorageError::TargetMissing`]; every other
/// failure stays an I/O error.
pub(crate) fn read_bytes(path: &Path) -> StorageResult<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(StorageError::target_missing(path))
        }
        Err(e) => Err(StorageError::Io(e)),
    }
}

/// Replaces the target's contents with `bytes` (truncate-then-write).
pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    fs::write(path, bytes)?;
    Ok(())
}
