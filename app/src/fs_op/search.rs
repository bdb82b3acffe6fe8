//! Recursive exact-name search.
//!
//! The walk is delegated to `walkdir`, which keeps its own stack of open
//! directories, so arbitrarily deep trees do not grow the call stack.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::fs_op::error::{not_a_directory, FsOpError};

/// Outcome of a completed walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Entries whose base name matched.
    pub matches: usize,
    /// Entries the walk could not read (permission denied mid-walk, symlink
    /// loops when following links, entries vanishing during the walk).
    pub skipped: usize,
}

impl SearchSummary {
    pub fn found_any(&self) -> bool {
        self.matches > 0
    }
}

/// Walk every entry below `start` and call `on_match` with the path of each
/// one whose base name equals `name` exactly (case-sensitive, byte for byte).
///
/// Matches are reported in walk order as they are found. `start` itself is
/// not a candidate. `start` must be a readable directory; entries that fail
/// later in the walk are skipped and counted in the summary.
pub fn find_by_name<P, N, F>(
    start: P,
    name: N,
    follow_links: bool,
    mut on_match: F,
) -> Result<SearchSummary, FsOpError>
where
    P: AsRef<Path>,
    N: AsRef<OsStr>,
    F: FnMut(&Path),
{
    let root = start.as_ref();
    let wrap = |source| FsOpError::Search {
        path: root.to_path_buf(),
        source,
    };

    let md = fs::metadata(root).map_err(wrap)?;
    if !md.is_dir() {
        return Err(wrap(not_a_directory()));
    }
    // Surface an unreadable start directory as an error rather than a
    // silently empty walk.
    fs::read_dir(root).map_err(wrap)?;

    let target = name.as_ref();
    let mut summary = SearchSummary::default();

    for entry in WalkDir::new(root).min_depth(1).follow_links(follow_links) {
        match entry {
            Ok(e) => {
                if e.file_name() == target {
                    summary.matches += 1;
                    on_match(e.path());
                }
            }
            Err(err) => {
                summary.skipped += 1;
                tracing::debug!(
                    "skipping unreadable entry under {}: {}",
                    root.display(),
                    err
                );
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::error::ErrorKind;
    use assert_fs::prelude::*;
    use std::path::PathBuf;

    fn collect(start: &Path, name: &str) -> (Vec<PathBuf>, SearchSummary) {
        let mut hits = Vec::new();
        let summary = find_by_name(start, name, false, |p| hits.push(p.to_path_buf())).unwrap();
        hits.sort();
        (hits, summary)
    }

    #[test]
    fn finds_matches_at_every_depth() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("target.txt").write_str("0").unwrap();
        temp.child("a/target.txt").write_str("1").unwrap();
        temp.child("a/b/c/d/target.txt").write_str("4").unwrap();
        temp.child("a/b/other.txt").write_str("x").unwrap();

        let (hits, summary) = collect(temp.path(), "target.txt");
        assert_eq!(summary.matches, 3);
        assert_eq!(
            hits,
            vec![
                temp.path().join("a/b/c/d/target.txt"),
                temp.path().join("a/target.txt"),
                temp.path().join("target.txt"),
            ]
        );
    }

    #[test]
    fn directories_match_by_name_too() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("x/build").create_dir_all().unwrap();
        let (hits, _) = collect(temp.path(), "build");
        assert_eq!(hits, vec![temp.path().join("x/build")]);
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("Readme.md").write_str("r").unwrap();
        temp.child("README.md.bak").write_str("r").unwrap();
        temp.child("sub/readme.md").write_str("r").unwrap();

        let (hits, summary) = collect(temp.path(), "README.md");
        assert!(hits.is_empty());
        assert!(!summary.found_any());

        let (hits, _) = collect(temp.path(), "*.md");
        assert!(hits.is_empty(), "no glob expansion");
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_name() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("needle").write_str("n").unwrap();
        temp.child("sub/needle ").write_str("n").unwrap();

        let (hits, _) = collect(temp.path(), "needle ");
        assert_eq!(hits, vec![temp.path().join("sub/needle ")]);
        let (hits, _) = collect(temp.path(), "needle");
        assert_eq!(hits, vec![temp.path().join("needle")]);
    }

    #[test]
    fn start_is_not_a_candidate() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("needle").create_dir_all().unwrap();
        let start = temp.path().join("needle");
        let (hits, summary) = collect(&start, "needle");
        assert!(hits.is_empty());
        assert_eq!(summary.matches, 0);
    }

    #[test]
    fn file_start_is_not_a_directory() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("f.txt");
        f.write_str("x").unwrap();
        let err = find_by_name(f.path(), "f.txt", false, |_| {}).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotADirectory);
        assert!(err.to_string().starts_with("Search error:"));
    }

    #[test]
    fn missing_start_is_not_found() {
        let temp = assert_fs::TempDir::new().unwrap();
        let err = find_by_name(temp.path().join("nope"), "x", false, |_| {}).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_terminates_when_following_links() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a/hit").write_str("h").unwrap();
        std::os::unix::fs::symlink(temp.path(), temp.path().join("a/loop")).unwrap();

        let mut hits = 0;
        let summary = find_by_name(temp.path(), "hit", true, |_| hits += 1).unwrap();
        assert_eq!(hits, 1);
        assert_eq!(summary.matches, 1);
        assert!(summary.skipped >= 1, "loop should be reported and skipped");
    }
}
