use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Rename (move) `src` to `dest` with a single `rename(2)`.
///
/// Atomic within one volume. Cross-volume moves fail with whatever the
/// platform reports; there is no copy+remove fallback.
pub fn rename_path<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<(), FsOpError> {
    let s = src.as_ref();
    let d = dest.as_ref();
    fs::rename(s, d).map_err(|source| FsOpError::Rename {
        src: s.to_path_buf(),
        dst: d.to_path_buf(),
        source,
    })
}
