//! Helpers to preserve file metadata (permissions and timestamps).
//!
//! Used after a byte-stream copy so the destination keeps the source's mode
//! and times. Failures here are propagated; callers that prefer best-effort
//! behavior can ignore the result.

use std::fs::{self, Permissions};
use std::io;
use std::path::Path;

use filetime::{set_file_times, FileTime};

/// Copy permission bits from `src` to `dst`.
pub(crate) fn copy_permissions(src: &Path, dst: &Path) -> io::Result<()> {
    let perms: Permissions = fs::metadata(src)?.permissions();
    fs::set_permissions(dst, perms)
}

/// Apply `src`'s permissions and access/modification times to `dst`.
pub fn preserve_file_metadata(src: &Path, dst: &Path) -> io::Result<()> {
    copy_permissions(src, dst)?;

    let meta = fs::metadata(src)?;
    let m = meta.modified()?;
    let a = meta.accessed()?;
    set_file_times(dst, FileTime::from_system_time(a), FileTime::from_system_time(m))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn preserves_permissions_and_timestamps() -> io::Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");

        {
            let mut f = fs::File::create(&src)?;
            writeln!(f, "hello")?;
        }
        {
            let mut f = fs::File::create(&dst)?;
            writeln!(f, "world")?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&src, fs::Permissions::from_mode(0o640))?;
        }

        // push src's timestamps into the past so the copy is observable
        let past = SystemTime::now() - Duration::from_secs(24 * 3600);
        let ft = FileTime::from_system_time(past);
        set_file_times(&src, ft, ft)?;

        preserve_file_metadata(&src, &dst)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode_src = fs::metadata(&src)?.permissions().mode();
            let mode_dst = fs::metadata(&dst)?.permissions().mode();
            assert_eq!(mode_src & 0o777, mode_dst & 0o777);
        }

        let dst_m = fs::metadata(&dst)?.modified()?;
        let src_m = fs::metadata(&src)?.modified()?;
        let diff = dst_m.duration_since(src_m).unwrap_or_else(|e| e.duration());
        assert!(diff.as_secs() < 2, "timestamps differ too much");

        Ok(())
    }
}
