//! Error types for prlist

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal errors that stop a run before any document is produced
#[derive(Error, Debug)]
pub enum PrlistError {
    /// The directory argument does not name an existing directory
    #[error("'{directory}' is not a valid directory")]
    InvalidDirectory { directory: PathBuf },

    /// The ignore file exists but could not be read as UTF-8 text
    #[error("Failed to read ignore file {path}")]
    IgnoreFileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PrlistError {
    /// Create a new invalid directory error
    pub fn invalid_directory(directory: impl Into<PathBuf>) -> Self {
        Self::InvalidDirectory {
            directory: directory.into(),
        }
    }

    /// Create a new ignore file read error
    pub fn ignore_file_unreadable(path: PathBuf, source: io::Error) -> Self {
        Self::IgnoreFileUnreadable { path, source }
    }
}

/// Why a single survivor could not be emitted with its content.
///
/// The `Display` output is the second line of the fallback block written in
/// place of the banner, so the wording here is part of the output format.
#[derive(Error, Debug)]
pub enum FileReadError {
    #[error("Error: File not found")]
    NotFound,

    #[error("Error: Permission denied")]
    PermissionDenied,

    #[error("Error: Is a directory")]
    IsDirectory,

    #[error("Error: Cannot decode file (binary file?)")]
    Decode,

    #[error("Error reading file: {0}")]
    Io(#[source] io::Error),
}

impl FileReadError {
    /// Classify an I/O failure raised while reading `path`
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::InvalidData => Self::Decode,
            // No stable ErrorKind for EISDIR on the supported toolchain
            _ if path.is_dir() => Self::IsDirectory,
            _ => Self::Io(err),
        }
    }
}

/// Result type alias for prlist operations
pub type Result<T> = std::result::Result<T, PrlistError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_directory_message() {
        let err = PrlistError::invalid_directory("missing");
        assert_eq!(err.to_string(), "'missing' is not a valid directory");
    }

    #[test]
    fn test_classify_by_kind() {
        let path = Path::new("does/not/matter");

        let err = FileReadError::from_io(io::Error::from(io::ErrorKind::NotFound), path);
        assert!(matches!(err, FileReadError::NotFound));

        let err = FileReadError::from_io(io::Error::from(io::ErrorKind::PermissionDenied), path);
        assert!(matches!(err, FileReadError::PermissionDenied));

        let err = FileReadError::from_io(io::Error::from(io::ErrorKind::InvalidData), path);
        assert!(matches!(err, FileReadError::Decode));
    }

    #[test]
    fn test_classify_directory_and_other() {
        let temp_dir = TempDir::new().unwrap();

        let err = FileReadError::from_io(io::Error::new(io::ErrorKind::Other, "boom"), temp_dir.path());
        assert!(matches!(err, FileReadError::IsDirectory));

        let err = FileReadError::from_io(
            io::Error::new(io::ErrorKind::Other, "boom"),
            &temp_dir.path().join("plain.txt"),
        );
        assert_eq!(err.to_string(), "Error reading file: boom");
    }
}
