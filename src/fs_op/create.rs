use std::fs::OpenOptions;
use std::path::Path;

use crate::fs_op::FsOpError;

/// Create `path` as an empty file, or open it for writing if it already
/// exists. Existing content is left intact (no truncation); the handle is
/// closed immediately.
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let _file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path.as_ref())?;
    Ok(())
}

/// Create directory `path`. An already-existing directory is not an error.
pub fn create_dir<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    match std::fs::create_dir(path.as_ref()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(FsOpError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn create_file_makes_an_empty_file() {
        let td = tempdir().unwrap();
        let file = td.path().join("f.txt");
        create_file(&file).unwrap();
        assert!(file.exists());
        assert_eq!(fs::metadata(&file).unwrap().len(), 0);
    }

    #[test]
    fn create_file_on_existing_file_keeps_content() {
        let td = tempdir().unwrap();
        let file = td.path().join("f.txt");
        fs::write(&file, b"keep me").unwrap();
        create_file(&file).unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"keep me");
    }

    #[test]
    fn create_dir_tolerates_existing_directory() {
        let td = tempdir().unwrap();
        let dir = td.path().join("moved");
        create_dir(&dir).unwrap();
        create_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
