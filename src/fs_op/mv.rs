use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors returned by move/rename helpers.
#[derive(Debug)]
pub enum MvError {
    Io(std::io::Error),
    MissingFilename,
}

impl fmt::Display for MvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MvError::Io(e) => write!(f, "IO error: {}", e),
            MvError::MissingFilename => write!(f, "path has no filename"),
        }
    }
}

impl std::error::Error for MvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MvError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MvError {
    fn from(e: std::io::Error) -> Self {
        MvError::Io(e)
    }
}

/// Rename a path within the same parent directory (keeps parent).
pub fn rename_path<P: AsRef<Path>>(path: P, new_name: &str) -> Result<PathBuf, MvError> {
    let p = path.as_ref();
    let parent = p.parent().ok_or(MvError::MissingFilename)?;
    let dest = parent.join(new_name);
    fs::rename(p, &dest)?;
    Ok(dest)
}

/// Move the file at `src` to `dst`, returning the final destination path.
///
/// If `dst` is an existing directory the file is moved into it under its
/// own name. A plain `rename` is attempted first; when that fails (for
/// example a cross-device move) the file is copied and the source removed.
pub fn move_path<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<PathBuf, MvError> {
    let s = src.as_ref();
    let d = dst.as_ref();
    let final_dest: PathBuf = if d.is_dir() {
        d.join(s.file_name().ok_or(MvError::MissingFilename)?)
    } else {
        d.to_path_buf()
    };

    match fs::rename(s, &final_dest) {
        Ok(()) => Ok(final_dest),
        Err(_) if s.is_file() => {
            // cross-device fallback: copy the bytes, then drop the source
            crate::fs_op::copy::copy_file(s, &final_dest).map_err(|e| match e {
                crate::fs_op::FsOpError::Io(ioe) => MvError::Io(ioe),
                other => MvError::Io(std::io::Error::other(other.to_string())),
            })?;
            fs::remove_file(s)?;
            Ok(final_dest)
        }
        Err(e) => Err(MvError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rename_keeps_parent_directory() {
        let td = tempdir().unwrap();
        let f = td.path().join("old.txt");
        fs::write(&f, b"x").unwrap();

        let dest = rename_path(&f, "new.txt").unwrap();
        assert_eq!(dest, td.path().join("new.txt"));
        assert!(!f.exists());
        assert!(dest.exists());
    }

    #[test]
    fn move_into_existing_directory_keeps_name() {
        let td = tempdir().unwrap();
        let f = td.path().join("f.txt");
        fs::write(&f, b"payload").unwrap();
        let sub = td.path().join("moved");
        fs::create_dir(&sub).unwrap();

        let dest = move_path(&f, &sub).unwrap();
        assert_eq!(dest, sub.join("f.txt"));
        assert!(!f.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"payload");
    }

    #[test]
    fn move_to_explicit_path_renames() {
        let td = tempdir().unwrap();
        let f = td.path().join("f.txt");
        fs::write(&f, b"x").unwrap();
        let target = td.path().join("target.txt");

        let dest = move_path(&f, &target).unwrap();
        assert_eq!(dest, target);
        assert!(target.exists());
    }

    #[test]
    fn move_missing_source_errors() {
        let td = tempdir().unwrap();
        let res = move_path(td.path().join("gone.txt"), td.path().join("dst.txt"));
        assert!(res.is_err());
    }
}
