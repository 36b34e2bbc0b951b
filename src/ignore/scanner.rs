//! Directory walk with .prlistignore filtering

use crate::core::types::FileEntry;
use crate::ignore::checker::{IgnoreChecker, IgnoreResult};
use crate::ignore::parser::IgnorePatterns;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Result of a scan
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Survivors, sorted ascending by relative path with no duplicates
    pub files: Vec<FileEntry>,
    /// Entries dropped by a pattern, with the pattern that matched
    pub ignored: Vec<(FileEntry, String)>,
}

/// Walks a root directory and filters what it finds
pub struct FilteredFileScanner {
    checker: IgnoreChecker,
}

impl FilteredFileScanner {
    pub fn new(checker: IgnoreChecker) -> Self {
        Self { checker }
    }

    /// Enumerate every candidate file under `root` and apply the ignore rules.
    ///
    /// Unreadable subdirectories are skipped. Symbolic links are not followed;
    /// a link is a candidate unless it resolves to a directory.
    pub fn scan(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::default();

        for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry");
                    continue;
                },
            };

            if !is_candidate(&entry) {
                continue;
            }

            let relative = match entry.path().strip_prefix(root) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            let file = FileEntry::from_relative(relative);

            match self.checker.check(&file) {
                IgnoreResult::Included => result.files.push(file),
                IgnoreResult::Ignored(pattern) => {
                    debug!(path = %file, pattern = %pattern, "Ignored");
                    result.ignored.push((file, pattern));
                },
            }
        }

        result.files.sort();
        result.files.dedup();
        result
    }
}

/// Whether a walk entry should be emitted as a file
fn is_candidate(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();

    if file_type.is_file() {
        return true;
    }

    if file_type.is_symlink() {
        return match fs::metadata(entry.path()) {
            Ok(target) => target.is_file(),
            // Dangling link: still listed, reported as missing when read
            Err(_) => true,
        };
    }

    if !file_type.is_dir() {
        debug!(path = %entry.path().display(), "Skipping special file");
    }
    false
}

/// Collect the sorted survivors under `root`
pub fn collect_files(root: &Path, patterns: &IgnorePatterns) -> Vec<FileEntry> {
    FilteredFileScanner::new(IgnoreChecker::new(patterns.clone()))
        .scan(root)
        .files
}
