use std::fs;
use std::io;
use std::path::Path;

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};

use crate::fs_op::error::{is_a_directory, FsOpError};

/// Copy the regular file `src` to `dst`, byte for byte.
///
/// An existing `dst` is overwritten. The parent of `dst` must already exist.
/// Directories are refused, and so is copying a file onto itself, including
/// through a hard link or symlink (which would otherwise truncate it).
/// Returns the number of bytes copied.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64, FsOpError> {
    let s = src.as_ref();
    let d = dst.as_ref();
    let wrap = |source| FsOpError::Copy {
        src: s.to_path_buf(),
        dst: d.to_path_buf(),
        source,
    };

    if fs::metadata(s).map(|m| m.is_dir()).unwrap_or(false) {
        return Err(wrap(is_a_directory()));
    }
    if same_file(s, d) {
        return Err(wrap(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        )));
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;

    fs_extra_copy(s, d, &options).map_err(|e| wrap(into_io_error(e)))
}

/// Whether `a` and `b` name the same inode. A missing `b` is never the same.
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

// fs_extra returns its own error type; map it onto io::Error so the error
// taxonomy only has one source type to classify.
fn into_io_error(e: fs_extra::error::Error) -> io::Error {
    use fs_extra::error::ErrorKind as X;
    let msg = e.to_string();
    match e.kind {
        X::Io(err) => err,
        X::NotFound => io::Error::new(io::ErrorKind::NotFound, msg),
        X::PermissionDenied => io::Error::new(io::ErrorKind::PermissionDenied, msg),
        X::AlreadyExists => io::Error::new(io::ErrorKind::AlreadyExists, msg),
        X::InvalidFile | X::InvalidFileName | X::InvalidFolder | X::InvalidPath => {
            io::Error::new(io::ErrorKind::InvalidInput, msg)
        }
        _ => io::Error::other(msg),
    }
}
