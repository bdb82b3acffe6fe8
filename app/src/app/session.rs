use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs_op::error::{not_a_directory, FsOpError};
use crate::fs_op::path::{resolve_path, PathError};

/// The explorer's notion of "where we are".
///
/// The directory is tracked here rather than through the process working
/// directory: every relative operand is resolved against `cwd`, and only a
/// successful `change_dir` replaces it, so the menu header always shows the
/// directory operations will actually use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    cwd: PathBuf,
}

impl SessionState {
    pub fn new(cwd: PathBuf) -> Self {
        SessionState { cwd }
    }

    /// Start from the process working directory, or `.` when it cannot be
    /// determined (for example because it was deleted).
    pub fn from_process() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        SessionState { cwd }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a non-empty operand against the session directory.
    pub fn resolve<S: AsRef<OsStr>>(&self, input: S) -> Result<PathBuf, PathError> {
        resolve_path(input, &self.cwd)
    }

    /// Like `resolve`, but an empty operand means the session directory.
    pub fn resolve_or_current<S: AsRef<OsStr>>(&self, input: S) -> Result<PathBuf, PathError> {
        let input = input.as_ref();
        if input.is_empty() {
            Ok(self.cwd.clone())
        } else {
            self.resolve(input)
        }
    }

    /// Move the session to `input` (empty means stay put).
    ///
    /// Returns the new absolute directory. On failure the session directory
    /// is unchanged.
    pub fn change_dir<S: AsRef<OsStr>>(&mut self, input: S) -> Result<&Path, FsOpError> {
        let target = self.resolve_or_current(input)?;
        self.enter(&target)
    }

    /// Move the session to `target`, joined onto the current directory when
    /// relative.
    ///
    /// The target must exist, be a directory (after following symlinks) and
    /// be searchable by the current user.
    pub fn enter(&mut self, target: &Path) -> Result<&Path, FsOpError> {
        let target = self.cwd.join(target);
        let wrap = |source| FsOpError::ChangeDir {
            path: target.clone(),
            source,
        };

        let canonical = fs::canonicalize(&target).map_err(wrap)?;
        let md = fs::metadata(&canonical).map_err(wrap)?;
        if !md.is_dir() {
            return Err(wrap(not_a_directory()));
        }
        #[cfg(unix)]
        {
            use nix::unistd::{access, AccessFlags};
            access(&canonical, AccessFlags::X_OK).map_err(|errno| wrap(std::io::Error::from(errno)))?;
        }

        tracing::info!("session directory changed to {}", canonical.display());
        self.cwd = canonical;
        Ok(&self.cwd)
    }
}
