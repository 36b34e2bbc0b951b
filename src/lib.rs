//! prlist - Concatenate a directory tree into a single text document
//!
//! Every file under a root directory is printed behind a banner naming its
//! relative path. Files and directories matched by patterns in the root's
//! `.prlistignore` are left out.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use prlist::{collect_files, combine_files, IgnorePatterns};
//! use std::path::Path;
//!
//! let root = Path::new("my-project");
//! let patterns = IgnorePatterns::load(root)?;
//! let files = collect_files(root, &patterns);
//! print!("{}", combine_files(root, &files));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod combine;
pub mod config;
pub mod core;
pub mod ignore;

// Re-export commonly used types
pub use crate::core::{
    error::{FileReadError, PrlistError, Result},
    types::{FileEntry, CURRENT_DIR_TOKEN, IGNORE_FILE_NAME},
};

pub use ignore::{collect_files, IgnoreChecker, IgnorePattern, IgnorePatterns};

pub use combine::{combine_files, Combiner};

pub use config::RunOptions;

/// Current version of prlist
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
