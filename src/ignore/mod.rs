//! File ignore system with .prlistignore support
//!
//! Patterns come from a single `.prlistignore` file at the root of the scanned
//! tree. Each pattern is a shell-style glob tested against every segment of a
//! relative path and against the whole relative path.

pub mod checker;
pub mod parser;
pub mod scanner;

// Re-export commonly used items
pub use checker::{IgnoreChecker, IgnoreResult};
pub use parser::{IgnorePattern, IgnorePatterns};
pub use scanner::{collect_files, FilteredFileScanner, ScanResult};
