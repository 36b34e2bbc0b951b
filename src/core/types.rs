//! Core data types for prlist

use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Name of the ignore file looked up directly inside the root directory
pub const IGNORE_FILE_NAME: &str = ".prlistignore";

/// Directory argument that suppresses the `./<root-name>/` banner prefix
pub const CURRENT_DIR_TOKEN: &str = ".";

/// A file discovered under the root.
///
/// `display` is the root-relative path with `/` separators, used for
/// matching, ordering and output. `path` keeps the on-disk name so files
/// whose names are not valid UTF-8 can still be read.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileEntry {
    display: String,
    path: PathBuf,
}

impl FileEntry {
    /// Build an entry from a path relative to the root
    pub fn from_relative(path: &Path) -> Self {
        let parts: Vec<&OsStr> = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part),
                _ => None,
            })
            .collect();

        let display = parts
            .iter()
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        FileEntry {
            display,
            path: parts.iter().collect(),
        }
    }

    /// The relative path as used for matching and output
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The relative path as found on disk
    pub fn relative_path(&self) -> &Path {
        &self.path
    }

    /// Individual path segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.display.split('/')
    }

    /// Location of this entry under `root`
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl fmt::Debug for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileEntry({})", self.display)
    }
}

impl From<&str> for FileEntry {
    fn from(s: &str) -> Self {
        FileEntry::from_relative(Path::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_uses_forward_slashes() {
        let rel: PathBuf = ["src", "cli", "mod.rs"].iter().collect();
        let entry = FileEntry::from_relative(&rel);

        assert_eq!(entry.as_str(), "src/cli/mod.rs");
        assert_eq!(entry.segments().collect::<Vec<_>>(), vec!["src", "cli", "mod.rs"]);
    }

    #[test]
    fn test_resolve_joins_root() {
        let entry = FileEntry::from("a/b.txt");
        assert_eq!(entry.resolve(Path::new("root")), Path::new("root").join("a").join("b.txt"));
    }

    #[test]
    fn test_ordering_is_by_string() {
        let mut entries = vec![
            FileEntry::from("b.txt"),
            FileEntry::from("a/z.txt"),
            FileEntry::from("a.txt"),
        ];
        entries.sort();

        let names: Vec<_> = entries.iter().map(FileEntry::as_str).collect();
        assert_eq!(names, vec!["a.txt", "a/z.txt", "b.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_keeps_real_path() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.txt");
        let entry = FileEntry::from_relative(&Path::new("docs").join(name));

        assert_eq!(entry.as_str(), "docs/caf\u{FFFD}.txt");
        assert_eq!(entry.resolve(Path::new("root")), Path::new("root").join("docs").join(name));
    }
}
