//! Content directory scanning
//!
//! A content item is an immediate subdirectory of a content root that holds
//! the marker file. Scans always hit the filesystem; nothing is cached.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::logger;

/// File whose presence qualifies a directory as a content item
pub const MARKER_FILE: &str = "data.json";

/// Directories starting with this are never listed
pub const HIDDEN_PREFIX: char = '.';

/// List content items under `root_dir` as `"{prefix}/{name}/data.json"`.
///
/// Entries are sorted by name (byte order). Names that are not valid UTF-8
/// are listed lossily. A root that cannot be read yields an empty list and a
/// warning in the error log.
pub fn scan(root_dir: &Path, prefix: &str) -> Vec<String> {
    let entries = match fs::read_dir(root_dir) {
        Ok(entries) => entries,
        Err(e) => {
            logger::log_warning(&format!(
                "Error scanning content directory '{}': {e}",
                root_dir.display()
            ));
            return Vec::new();
        }
    };

    let mut names: Vec<OsString> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                logger::log_warning(&format!(
                    "Skipping unreadable entry in '{}': {e}",
                    root_dir.display()
                ));
                None
            }
        })
        .map(|entry| entry.file_name())
        .collect();
    names.sort_unstable();

    names
        .into_iter()
        .filter(|name| !name.to_string_lossy().starts_with(HIDDEN_PREFIX))
        .filter(|name| {
            let dir = root_dir.join(name);
            dir.is_dir() && dir.join(MARKER_FILE).exists()
        })
        .map(|name| format!("{prefix}/{}/{MARKER_FILE}", name.to_string_lossy()))
        .collect()
}
