use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_op::path::PathError;

/// Coarse classification of why an operation failed.
///
/// Every `FsOpError` maps onto exactly one of these so callers (and tests)
/// can branch on the failure class without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    /// The platform refused to resolve a destination clash (existing or
    /// non-empty target).
    Conflict,
    PermissionDenied,
    InvalidInput,
    NotADirectory,
    NotAFile,
    Other,
}

impl ErrorKind {
    /// Classify an `io::Error`, preferring the raw OS code when one exists
    /// because `io::ErrorKind` folds several of the cases we care about into
    /// `Other`/`Uncategorized`.
    pub fn from_io(e: &io::Error) -> Self {
        #[cfg(unix)]
        if let Some(code) = e.raw_os_error() {
            match code {
                libc::ENOTDIR => return ErrorKind::NotADirectory,
                libc::EISDIR => return ErrorKind::NotAFile,
                libc::EEXIST | libc::ENOTEMPTY => return ErrorKind::Conflict,
                _ => {}
            }
        }
        match e.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::AlreadyExists => ErrorKind::Conflict,
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => ErrorKind::InvalidInput,
            _ => ErrorKind::Other,
        }
    }
}

/// Errors produced by the explorer's filesystem operations.
///
/// The `Display` output of each variant is the line shown to the user, so it
/// names the failed action and carries the platform reason.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// The operand could not be turned into a path.
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Error listing directory: {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Change directory error: {path}: {source}")]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Copy error: `{src}` -> `{dst}`: {source}")]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Rename error: `{src}` -> `{dst}`: {source}")]
    Rename {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open file for writing: {path} ({source})")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {path} ({source})")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Missing entries and entries the platform refused to remove are
    /// reported the same way.
    #[error("File not found or could not remove: {path} ({source})")]
    RemovalFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Search error: {path}: {source}")]
    Search {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Stat error: {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Chmod error: {path}: {source}")]
    Chmod {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid octal mode.")]
    InvalidMode { input: String },
}

impl FsOpError {
    /// Return the taxonomy class for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FsOpError::Path(_) | FsOpError::InvalidMode { .. } => ErrorKind::InvalidInput,
            FsOpError::List { source, .. }
            | FsOpError::ChangeDir { source, .. }
            | FsOpError::Copy { source, .. }
            | FsOpError::Rename { source, .. }
            | FsOpError::Open { source, .. }
            | FsOpError::Write { source, .. }
            | FsOpError::RemovalFailed { source, .. }
            | FsOpError::Search { source, .. }
            | FsOpError::Stat { source, .. }
            | FsOpError::Chmod { source, .. } => ErrorKind::from_io(source),
        }
    }
}

/// Build the platform's "not a directory" error for checks we perform
/// ourselves before calling into the OS.
pub(crate) fn not_a_directory() -> io::Error {
    #[cfg(unix)]
    {
        io::Error::from_raw_os_error(libc::ENOTDIR)
    }
    #[cfg(not(unix))]
    {
        io::Error::new(io::ErrorKind::InvalidInput, "not a directory")
    }
}

/// Build the platform's "is a directory" error.
pub(crate) fn is_a_directory() -> io::Error {
    #[cfg(unix)]
    {
        io::Error::from_raw_os_error(libc::EISDIR)
    }
    #[cfg(not(unix))]
    {
        io::Error::new(io::ErrorKind::InvalidInput, "is a directory")
    }
}
