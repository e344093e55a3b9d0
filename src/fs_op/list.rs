use std::fs;
use std::io;
use std::path::Path;

/// Enumerate `dir` non-recursively and return the entry names in whatever
/// order the OS yields them. The order is unspecified and must not be
/// relied upon; directories and special files are included.
pub fn list_directory<P: AsRef<Path>>(dir: P) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn list_directory_returns_all_entries() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.txt").write_str("a").unwrap();
        temp.child("subdir").create_dir_all().unwrap();

        let mut names = list_directory(temp.path()).unwrap();
        names.sort();
        assert_eq!(names, ["a.txt", "subdir"]);
    }

    #[test]
    fn list_missing_directory_errors() {
        let temp = assert_fs::TempDir::new().unwrap();
        assert!(list_directory(temp.path().join("gone")).is_err());
    }
}
