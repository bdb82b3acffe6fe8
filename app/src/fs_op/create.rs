use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Create `path` (or truncate it if it exists) and write `content` followed
/// by exactly one newline.
///
/// `content` is written byte for byte. The parent directory must exist.
/// Returns the number of bytes written. The handle is closed when it goes
/// out of scope, on every path.
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> Result<usize, FsOpError> {
    let p = path.as_ref();
    let content = content.as_ref();

    let mut file = File::create(p).map_err(|source| FsOpError::Open {
        path: p.to_path_buf(),
        source,
    })?;

    let write_err = |source| FsOpError::Write {
        path: p.to_path_buf(),
        source,
    };
    file.write_all(content).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;
    file.flush().map_err(write_err)?;

    Ok(content.len() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn write_appends_single_newline() {
        let td = tempdir().unwrap();
        let f = td.path().join("note.txt");
        let n = write_file(&f, "hello").unwrap();
        assert_eq!(n, 6);
        assert_eq!(std::fs::read(&f).unwrap(), b"hello\n");
    }

    #[test]
    fn write_truncates_existing_content() {
        let td = tempdir().unwrap();
        let f = td.path().join("note.txt");
        std::fs::write(&f, "line one\nline two\nline three\n").unwrap();
        write_file(&f, "x").unwrap();
        assert_eq!(std::fs::read_to_string(&f).unwrap(), "x\n");
    }

    #[test]
    fn empty_content_writes_only_newline() {
        let td = tempdir().unwrap();
        let f = td.path().join("blank.txt");
        write_file(&f, "").unwrap();
        assert_eq!(std::fs::read(&f).unwrap(), b"\n");
    }

    #[test]
    fn non_utf8_content_is_written_verbatim() {
        let td = tempdir().unwrap();
        let f = td.path().join("latin1.txt");
        let n = write_file(&f, b"\xe9t\xe9").unwrap();
        assert_eq!(n, 4);
        assert_eq!(std::fs::read(&f).unwrap(), b"\xe9t\xe9\n");
    }

    #[test]
    fn missing_parent_fails_to_open() {
        let td = tempdir().unwrap();
        let f = td.path().join("missing/dir/note.txt");
        let err = write_file(&f, "x").unwrap_err();
        assert!(matches!(err, FsOpError::Open { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("Failed to open file for writing:"));
    }
}
