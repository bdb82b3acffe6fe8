use std::fs;

use tempfile::tempdir;

use fileScout::fs_op::copy::copy_file;
use fileScout::fs_op::mv::rename_path;
use fileScout::ErrorKind;

// Renaming onto an existing file replaces it; the old name disappears.
#[test]
fn rename_replaces_existing_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let a = tmp.path().join("a.txt");
    let b = tmp.path().join("b.txt");
    fs::write(&a, "new")?;
    fs::write(&b, "old")?;

    rename_path(&a, &b)?;
    assert!(!a.exists());
    assert_eq!(fs::read_to_string(&b)?, "new");
    Ok(())
}

// A file cannot replace a directory; both stay where they were.
#[cfg(unix)]
#[test]
fn rename_file_onto_directory_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let f = tmp.path().join("f.txt");
    let d = tmp.path().join("dir");
    fs::write(&f, "x")?;
    fs::create_dir(&d)?;

    let err = rename_path(&f, &d).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAFile);
    assert!(f.exists());
    assert!(d.is_dir());
    Ok(())
}

// Copying through a symlink copies the target's bytes into a regular file.
#[cfg(unix)]
#[test]
fn copy_through_symlink_copies_target_bytes() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let target = tmp.path().join("target.txt");
    fs::write(&target, b"hello")?;
    let link = tmp.path().join("link.txt");
    std::os::unix::fs::symlink(&target, &link)?;

    let out = tmp.path().join("out.txt");
    copy_file(&link, &out)?;
    assert_eq!(fs::read(&out)?, b"hello");
    assert!(!fs::symlink_metadata(&out)?.file_type().is_symlink());
    Ok(())
}
