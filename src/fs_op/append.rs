use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::fs_op::FsOpError;

/// Append `text` to the file at `path`.
///
/// The file must already exist: append-mode open without create matches the
/// underlying OS call and fails with `NotFound` otherwise.
pub fn append_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), FsOpError> {
    let mut file = OpenOptions::new().append(true).open(path.as_ref())?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
