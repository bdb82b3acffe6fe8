use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when turning a user-supplied operand into a path.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("could not determine home directory")]
    HomeNotFound,
}

/// Resolve a user-supplied operand against `base`.
///
/// Behaviour:
/// - The operand is used exactly as typed, surrounding spaces included; an
///   empty operand is an error.
/// - `~` and `~/...` expand to the user's home directory (`HOME`, then
///   `USERPROFILE`).
/// - Absolute paths are returned as-is.
/// - Relative paths are joined onto `base`.
///
/// Existence is not checked here; each operation reports its own failure.
pub fn resolve_path<S: AsRef<OsStr>>(input: S, base: &Path) -> Result<PathBuf, PathError> {
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
    resolve_with_home(input.as_ref(), base, home)
}

pub(crate) fn resolve_with_home(
    input: &OsStr,
    base: &Path,
    home: Option<OsString>,
) -> Result<PathBuf, PathError> {
    if input.is_empty() {
        return Err(PathError::Empty);
    }

    let p = Path::new(input);
    // Component-wise, so `~backup` is left alone.
    if let Ok(rest) = p.strip_prefix("~") {
        let mut expanded = PathBuf::from(home.ok_or(PathError::HomeNotFound)?);
        if !rest.as_os_str().is_empty() {
            expanded.push(rest);
        }
        return Ok(expanded);
    }

    if p.is_absolute() {
        Ok(p.to_path_buf())
    } else {
        Ok(base.join(p))
    }
}
