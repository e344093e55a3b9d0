use std::io;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::fs_op::permissions::{format_unix_mode, inspect_permissions, PermissionInfo};

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (for example: socket, FIFO, block device, symlink without target, etc.).
    Other,
}

impl PathType {
    /// Classify `path` and return its `PathType`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        if !p.exists() {
            PathType::NotFound
        } else if p.is_dir() {
            PathType::Directory
        } else if p.is_file() {
            PathType::File
        } else {
            PathType::Other
        }
    }
}

/// Return `true` if the provided `path` exists.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    !matches!(PathType::of(path), PathType::NotFound)
}

/// Return `true` if the provided `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// Return `true` if the provided `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}

/// Metadata snapshot for a single path, as shown by the `stat` operation.
#[derive(Debug, Clone)]
pub struct FileAttributes {
    /// Size in bytes.
    pub size: u64,
    /// Last-modification time, if the platform reports one.
    pub modified: Option<DateTime<Local>>,
    /// Permission state.
    pub permissions: PermissionInfo,
    /// Kind of the path.
    pub kind: PathType,
}

impl FileAttributes {
    /// Stat `path` and capture its attributes.
    pub fn read<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let p = path.as_ref();
        let meta = std::fs::metadata(p)?;
        let permissions = inspect_permissions(p).map_err(|e| match e {
            crate::fs_op::FsOpError::Io(ioe) => ioe,
            other => io::Error::other(other.to_string()),
        })?;
        Ok(FileAttributes {
            size: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Local>::from),
            permissions,
            kind: PathType::of(p),
        })
    }

    /// Render the attributes as the multi-line block printed by the `stat`
    /// operation. `timestamp_format` is a chrono format string.
    pub fn render(&self, name: &str, timestamp_format: &str) -> String {
        let mut out = format!("File: {name}\nSize: {} bytes\n", self.size);
        match &self.modified {
            Some(t) => out.push_str(&format!("Last modified: {}\n", t.format(timestamp_format))),
            None => out.push_str("Last modified: unknown\n"),
        }
        out.push_str(&format!(
            "Permissions: {} ({:o})\n",
            format_unix_mode(self.permissions.mode),
            self.permissions.mode & 0o7777
        ));
        out
    }
}
