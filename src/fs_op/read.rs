use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use crate::fs_op::FsOpError;

/// Stream the contents of `path` into `out` in buffered chunks, returning
/// the number of bytes written. The file is never materialized in memory as
/// a whole.
pub fn print_file<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<u64, FsOpError> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let written = io::copy(&mut reader, out)?;
    Ok(written)
}
