//! Permission inspection, parsing and formatting.
//!
//! Mode changes are Unix-only; other targets report the operation as
//! unsupported instead of pretending it happened. Inspection works
//! everywhere (the read-only bit is portable).

use std::fs;
use std::path::Path;

use crate::fs_op::FsOpError;

/// Snapshot of a path's permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionInfo {
    /// Raw Unix mode bits (zero on non-Unix targets).
    pub mode: u32,
    /// Whether the path is read-only for the current user.
    pub readonly: bool,
}

/// Read the permission state of `path`.
pub fn inspect_permissions<P: AsRef<Path>>(path: P) -> Result<PermissionInfo, FsOpError> {
    let perms = fs::metadata(path.as_ref())?.permissions();
    #[cfg(unix)]
    let mode = {
        use std::os::unix::fs::PermissionsExt;
        perms.mode()
    };
    #[cfg(not(unix))]
    let mode = 0;
    Ok(PermissionInfo {
        mode,
        readonly: perms.readonly(),
    })
}

/// Change the permission bits of `path` to `mode`.
#[cfg(unix)]
pub fn change_permissions<P: AsRef<Path>>(path: P, mode: u32) -> Result<(), FsOpError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path.as_ref(), fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
pub fn change_permissions<P: AsRef<Path>>(_path: P, _mode: u32) -> Result<(), FsOpError> {
    Err(FsOpError::Message(
        "changing permission bits is only supported on Unix".to_string(),
    ))
}

/// Parse an octal mode string such as `644` or `0755`.
pub fn parse_mode(text: &str) -> Result<u32, FsOpError> {
    let mode = u32::from_str_radix(text, 8)
        .map_err(|_| FsOpError::Message(format!("invalid octal mode: `{text}`")))?;
    if mode > 0o7777 {
        return Err(FsOpError::Message(format!("mode out of range: `{text}`")));
    }
    Ok(mode)
}

/// Render the low nine permission bits as `rwxr-xr-x` text.
pub fn format_unix_mode(mode: u32) -> String {
    let mut out = String::with_capacity(9);
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_mode_accepts_octal() {
        assert_eq!(parse_mode("644").unwrap(), 0o644);
        assert_eq!(parse_mode("0755").unwrap(), 0o755);
        assert!(parse_mode("abc").is_err());
        assert!(parse_mode("17777").is_err());
    }

    #[test]
    fn format_unix_mode_renders_rwx_triples() {
        insta::assert_snapshot!(format_unix_mode(0o644), @"rw-r--r--");
        insta::assert_snapshot!(format_unix_mode(0o755), @"rwxr-xr-x");
        insta::assert_snapshot!(format_unix_mode(0o000), @"---------");
    }

    #[cfg(unix)]
    #[test]
    fn change_permissions_round_trips_through_inspect() {
        let td = tempdir().unwrap();
        let f = td.path().join("f.txt");
        std::fs::write(&f, b"x").unwrap();

        change_permissions(&f, 0o600).unwrap();
        let info = inspect_permissions(&f).unwrap();
        assert_eq!(info.mode & 0o777, 0o600);
        assert!(!info.readonly);

        change_permissions(&f, 0o444).unwrap();
        let info = inspect_permissions(&f).unwrap();
        assert_eq!(info.mode & 0o777, 0o444);
        assert!(info.readonly);

        // restore so the tempdir can clean up
        change_permissions(&f, 0o644).unwrap();
    }
}
