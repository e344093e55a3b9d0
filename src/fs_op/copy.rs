use std::io;
use std::path::Path;

use fs_extra::file::{copy as file_copy, CopyOptions};
use tracing::warn;

use crate::fs_op::FsOpError;

/// Byte-stream copy of the regular file `src` to `dst`, returning the number
/// of bytes copied.
///
/// An existing destination is overwritten (truncate semantics). After the
/// bytes land, the source's permissions and timestamps are applied to the
/// destination on a best-effort basis.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64, FsOpError> {
    let s = src.as_ref();
    let d = dst.as_ref();

    let mut options = CopyOptions::new();
    options.overwrite = true;
    // 64 KiB buffer balances throughput and memory for a single-pass copy.
    options.buffer_size = 64 * 1024;

    let copied =
        file_copy(s, d, &options).map_err(|e| FsOpError::Io(io::Error::other(e)))?;

    if let Err(err) = crate::fs_op::metadata::preserve_file_metadata(s, d) {
        warn!("copied {} but could not preserve its metadata: {err}", s.display());
    }
    Ok(copied)
}
