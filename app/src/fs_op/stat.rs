use std::fs;
use std::path::Path;

/// Lightweight classification of a filesystem entry's kind.
///
/// Symlinks are classified by the link itself, not by its target, so an
/// operation acting on "exactly one entry" never reaches through a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing exists at the path (not even a dangling symlink).
    NotFound,
    Directory,
    File,
    /// Symlinks, sockets, FIFOs, devices.
    Other,
}

impl PathType {
    /// Classify `path` with a single `lstat`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match fs::symlink_metadata(path.as_ref()) {
            Err(_) => PathType::NotFound,
            Ok(md) => {
                let ft = md.file_type();
                if ft.is_dir() {
                    PathType::Directory
                } else if ft.is_file() {
                    PathType::File
                } else {
                    PathType::Other
                }
            }
        }
    }
}
