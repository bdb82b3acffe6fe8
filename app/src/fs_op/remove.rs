use std::fs;
use std::io;
use std::path::Path;

use crate::fs_op::error::FsOpError;
use crate::fs_op::stat::PathType;

/// Remove exactly one filesystem entry at `path`.
///
/// Files, symlinks and other non-directories are unlinked; directories are
/// removed only when empty. Nothing is removed recursively. A missing path
/// and a refused removal both surface as `FsOpError::RemovalFailed`.
///
/// # Examples
///
/// ```no_run
/// use fileScout::fs_op::remove::remove_entry;
/// remove_entry("/tmp/some_file.txt").expect("remove failed");
/// ```
pub fn remove_entry(path: impl AsRef<Path>) -> Result<(), FsOpError> {
    let p = path.as_ref();
    let failed = |source| FsOpError::RemovalFailed {
        path: p.to_path_buf(),
        source,
    };

    match PathType::of(p) {
        PathType::NotFound => Err(failed(io::Error::new(
            io::ErrorKind::NotFound,
            "no such file or directory",
        ))),
        PathType::Directory => fs::remove_dir(p).map_err(failed),
        PathType::File | PathType::Other => fs::remove_file(p).map_err(failed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn remove_file_then_gone() {
        let td = tempdir().expect("create temp dir");
        let f = td.path().join("f.txt");
        std::fs::write(&f, b"x").expect("write file");

        remove_entry(&f).expect("remove file");
        assert!(!f.exists(), "file should be removed");
    }

    #[test]
    fn remove_empty_dir_ok() {
        let td = tempdir().expect("tempdir");
        let dir = td.path().join("empty");
        std::fs::create_dir(&dir).unwrap();
        remove_entry(&dir).expect("remove empty dir");
        assert!(!dir.exists());
    }

    #[test]
    fn remove_nonexistent_reports_failure() {
        let td = tempdir().expect("tempdir");
        let p = td.path().join("does_not_exist");
        let err = remove_entry(&p).unwrap_err();
        assert!(matches!(err, FsOpError::RemovalFailed { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("File not found or could not remove:"));
    }

    #[test]
    fn non_empty_dir_is_left_alone() {
        let td = tempdir().expect("tempdir");
        let dir = td.path().join("full");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("inner.txt"), "i").unwrap();

        let err = remove_entry(&dir).unwrap_err();
        assert!(matches!(err, FsOpError::RemovalFailed { .. }));
        assert!(dir.join("inner.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_removed_not_its_target() {
        let td = tempdir().expect("tempdir");
        let target = td.path().join("target");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "k").unwrap();
        let link = td.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        remove_entry(&link).unwrap();
        assert!(std::fs::symlink_metadata(&link).is_err());
        assert!(target.join("keep.txt").exists());
    }
}
