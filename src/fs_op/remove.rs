use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors returned from filesystem remove operations in this module.
#[derive(Debug, Error)]
#[error("filesystem remove error: {0}")]
pub struct RemoveError(#[from] pub io::Error);

/// Unlink the file at `path`.
///
/// Unlike a recursive remove helper this deliberately mirrors `unlink`:
/// a missing path or a directory is an error, never a silent no-op.
pub fn remove_file(path: impl AsRef<Path>) -> Result<(), RemoveError> {
    fs::remove_file(path.as_ref())?;
    Ok(())
}

/// Remove the empty directory at `path` (`rmdir` semantics).
pub fn remove_dir(path: impl AsRef<Path>) -> Result<(), RemoveError> {
    fs::remove_dir(path.as_ref())?;
    Ok(())
}
