use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Largest mode accepted from the user: permission bits plus
/// setuid/setgid/sticky.
pub const MAX_MODE: u32 = 0o7777;

/// Permission bits of an entry as reported by `stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionInfo {
    pub mode: u32,
}

impl PermissionInfo {
    pub fn from_mode(mode: u32) -> Self {
        PermissionInfo { mode }
    }

    pub fn owner(&self) -> String {
        triplet(self.mode >> 6)
    }

    pub fn group(&self) -> String {
        triplet(self.mode >> 3)
    }

    pub fn other(&self) -> String {
        triplet(self.mode)
    }

    /// The three labelled lines shown to the user, owner first.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Owner: {}", self.owner()),
            format!("Group: {}", self.group()),
            format!("Others: {}", self.other()),
        ]
    }
}

fn triplet(bits: u32) -> String {
    let mut s = String::with_capacity(3);
    s.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    s.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    s.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    s
}

/// Parse a base-8 mode such as `0755` or `644`.
///
/// Surrounding whitespace is ignored; anything else that is not an octal
/// digit, an empty string, or a value above `MAX_MODE` is rejected.
pub fn parse_octal_mode(text: &str) -> Result<u32, FsOpError> {
    let invalid = || FsOpError::InvalidMode {
        input: text.to_string(),
    };
    let t = text.trim();
    if t.is_empty() || !t.chars().all(|c| ('0'..='7').contains(&c)) {
        return Err(invalid());
    }
    let mode = u32::from_str_radix(t, 8).map_err(|_| invalid())?;
    if mode > MAX_MODE {
        return Err(invalid());
    }
    Ok(mode)
}

/// Stat `path` (following symlinks) and return its permission bits.
#[cfg(unix)]
pub fn inspect_permissions<P: AsRef<Path>>(path: P) -> Result<PermissionInfo, FsOpError> {
    use std::os::unix::fs::PermissionsExt;
    let p = path.as_ref();
    let md = fs::metadata(p).map_err(|source| FsOpError::Stat {
        path: p.to_path_buf(),
        source,
    })?;
    Ok(PermissionInfo::from_mode(md.permissions().mode() & MAX_MODE))
}

/// Approximation for platforms without mode bits: a read-only entry is
/// `r--` everywhere, anything else `rw-`.
#[cfg(not(unix))]
pub fn inspect_permissions<P: AsRef<Path>>(path: P) -> Result<PermissionInfo, FsOpError> {
    let p = path.as_ref();
    let md = fs::metadata(p).map_err(|source| FsOpError::Stat {
        path: p.to_path_buf(),
        source,
    })?;
    let mode = if md.permissions().readonly() { 0o444 } else { 0o666 };
    Ok(PermissionInfo::from_mode(mode))
}

/// Apply `mode` to `path` as-is (special bits included).
#[cfg(unix)]
pub fn change_permissions<P: AsRef<Path>>(path: P, mode: u32) -> Result<(), FsOpError> {
    use std::os::unix::fs::PermissionsExt;
    let p = path.as_ref();
    fs::set_permissions(p, fs::Permissions::from_mode(mode)).map_err(|source| FsOpError::Chmod {
        path: p.to_path_buf(),
        source,
    })
}

/// Only the owner write bit can be expressed; it toggles the read-only flag.
#[cfg(not(unix))]
pub fn change_permissions<P: AsRef<Path>>(path: P, mode: u32) -> Result<(), FsOpError> {
    let p = path.as_ref();
    let chmod_err = |source| FsOpError::Chmod {
        path: p.to_path_buf(),
        source,
    };
    let mut perms = fs::metadata(p).map_err(chmod_err)?.permissions();
    perms.set_readonly(mode & 0o200 == 0);
    fs::set_permissions(p, perms).map_err(chmod_err)
}
