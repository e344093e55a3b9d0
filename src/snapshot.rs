//! Point-in-time directory snapshots ordered by a named policy.
//!
//! A snapshot enumerates a single directory (non-recursively), collects its
//! regular files into `FileRecord`s and sorts them in place. Entries that
//! vanish between enumeration and stat are skipped, so a directory being
//! modified by another process never aborts the scan.

use std::collections::TryReserveError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::debug;

/// Ordering policies for a snapshot listing.
///
/// The set is closed on purpose: callers select a policy by name rather than
/// passing raw comparator functions, so every ordering the program supports
/// is visible here and can be tested exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest file first.
    SizeAscending,
    /// Most recently modified file first.
    ModifiedDescending,
}

/// One regular file captured at scan time.
///
/// A record is a snapshot, not a live handle: the underlying file may change
/// or disappear after the scan without affecting already-collected data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// File name. Non-UTF-8 names are converted lossily.
    pub name: String,
    /// Size in bytes at scan time.
    pub size: u64,
    /// Last-modification time at scan time.
    pub modified: DateTime<Local>,
}

impl FileRecord {
    /// Render a single listing line, using `timestamp_format` (a chrono
    /// format string) for the modification time.
    pub fn render(&self, timestamp_format: &str) -> String {
        format!(
            "{} (Size: {} bytes, Modified: {})",
            self.name,
            self.size,
            self.modified.format(timestamp_format)
        )
    }
}

/// Errors that abort a directory scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory could not be opened for enumeration: missing, not a
    /// directory, or permission denied.
    #[error("cannot open directory {}: {source}", .path.display())]
    DirectoryAccess { path: PathBuf, source: io::Error },

    /// Growing the record list failed. Everything collected so far is
    /// released before this is returned.
    #[error("out of memory while collecting directory entries: {0}")]
    ResourceExhausted(#[from] TryReserveError),
}

/// Scan `dir` and collect one record per regular file, in enumeration order.
///
/// Directories, symlinks and special files are excluded. A per-entry
/// metadata failure (for example the file was deleted between enumeration
/// and stat) skips that entry and continues: the scan is best-effort and
/// does not promise to capture every file present when it started. The
/// directory handle is released on every exit path when the `ReadDir`
/// iterator drops.
pub fn scan(dir: &Path) -> Result<Vec<FileRecord>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut records: Vec<FileRecord> = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("skipping unreadable directory entry: {err}");
                continue;
            }
        };
        // `DirEntry::file_type` does not follow symlinks, so a symlink to a
        // regular file is excluded just like any other non-regular entry.
        match entry.file_type() {
            Ok(ft) if ft.is_file() => {}
            Ok(_) => continue,
            Err(err) => {
                debug!("skipping {:?}: cannot read entry type: {err}", entry.file_name());
                continue;
            }
        }
        let meta = match entry.metadata() {
            Ok(m) => m,
            Err(err) => {
                debug!("skipping {:?}: stat failed: {err}", entry.file_name());
                continue;
            }
        };
        let modified = match meta.modified() {
            Ok(t) => DateTime::<Local>::from(t),
            Err(err) => {
                debug!("skipping {:?}: no modification time: {err}", entry.file_name());
                continue;
            }
        };
        records.try_reserve(1)?;
        records.push(FileRecord {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: meta.len(),
            modified,
        });
    }
    Ok(records)
}

/// Sort `records` in place under `order`.
///
/// Both comparators operate on the full-width field values (64-bit sizes,
/// full-precision timestamps) so large files and distant timestamps order
/// correctly. The sort is stable: records that compare equal keep their
/// enumeration order.
pub fn sort(records: &mut [FileRecord], order: SortOrder) {
    match order {
        SortOrder::SizeAscending => records.sort_by_key(|r| r.size),
        SortOrder::ModifiedDescending => records.sort_by(|a, b| b.modified.cmp(&a.modified)),
    }
}

/// Scan `dir` and return its regular files sorted under `order`.
pub fn sorted_snapshot(dir: &Path, order: SortOrder) -> Result<Vec<FileRecord>, ScanError> {
    let mut records = scan(dir)?;
    sort(&mut records, order);
    Ok(records)
}

/// Render the `Sorted files:` block for a snapshot, or the `No files found`
/// line for an empty one. An empty snapshot is a normal outcome, not an
/// error.
pub fn render_listing(records: &[FileRecord], timestamp_format: &str) -> String {
    if records.is_empty() {
        return "No files found in the directory.\n".to_string();
    }
    let mut out = String::from("Sorted files:\n");
    for record in records {
        out.push_str(&record.render(timestamp_format));
        out.push('\n');
    }
    out
}
