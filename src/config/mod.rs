//! Run configuration for prlist
//!
//! Options are resolved once from the command line and passed down to the
//! orchestration. `RUST_LOG` takes precedence over the verbosity flag.

use std::path::{Path, PathBuf};

/// Log level used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log level used with `--verbose` when `RUST_LOG` is unset
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// Options for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Root directory exactly as given on the command line
    pub directory: PathBuf,
    /// Emit debug logging to stderr
    pub verbose: bool,
}

impl RunOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Root directory as a path
    pub fn root(&self) -> &Path {
        &self.directory
    }

    /// Filter directive for the log subscriber
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_LEVEL
        } else {
            DEFAULT_LOG_LEVEL
        }
    }
}
