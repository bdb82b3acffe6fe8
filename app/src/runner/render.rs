//! Text shown for successful operations. Failures render through
//! `FsOpError`'s `Display`.

use std::ffi::OsStr;
use std::path::Path;

use crate::fs_op::list::DirEntry;

/// How an operand is echoed back: as typed, with empty meaning `.`.
pub fn display_operand(raw: &OsStr) -> String {
    if raw.is_empty() {
        ".".to_string()
    } else {
        raw.to_string_lossy().into_owned()
    }
}

pub fn listing_lines(shown: &str, entries: &[DirEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("Contents of {}:", shown));
    lines.extend(entries.iter().map(|e| format!("{}{}", e.kind.tag(), e.name)));
    lines
}

/// A search hit, shown under the start directory as the user typed it.
pub fn found_line(shown: &str, root: &Path, hit: &Path) -> String {
    let rel = hit.strip_prefix(root).unwrap_or(hit);
    format!("Found: {}", Path::new(shown).join(rel).display())
}

pub fn no_matches_line(shown: &str) -> String {
    format!("No matches found under {}", shown)
}
