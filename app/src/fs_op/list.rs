use std::fs;
use std::path::Path;

use crate::fs_op::error::{not_a_directory, FsOpError};

/// Whether a listed entry is a directory. Everything else (regular files,
/// sockets, devices, dangling links) shares the "other" tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Other,
}

impl EntryKind {
    /// Two-character tag plus separator printed before the entry name.
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Directory => "[D] ",
            EntryKind::Other => "[F] ",
        }
    }
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Base name, lossily converted for display.
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn directory(name: impl Into<String>) -> Self {
        DirEntry { name: name.into(), kind: EntryKind::Directory }
    }

    pub fn other(name: impl Into<String>) -> Self {
        DirEntry { name: name.into(), kind: EntryKind::Other }
    }
}

/// Enumerate the immediate children of `path` in the order the platform
/// yields them. Symlinks to directories are tagged as directories.
pub fn list_dir<P: AsRef<Path>>(path: P) -> Result<Vec<DirEntry>, FsOpError> {
    let p = path.as_ref();
    let wrap = |source| FsOpError::List { path: p.to_path_buf(), source };

    let md = fs::metadata(p).map_err(wrap)?;
    if !md.is_dir() {
        return Err(wrap(not_a_directory()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(p).map_err(wrap)? {
        let e = entry.map_err(wrap)?;
        let name = e.file_name().to_string_lossy().into_owned();
        if e.path().is_dir() {
            entries.push(DirEntry::directory(name));
        } else {
            entries.push(DirEntry::other(name));
        }
    }
    Ok(entries)
}
