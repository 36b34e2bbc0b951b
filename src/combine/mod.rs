//! Combining survivors into a single bannered document
//!
//! Every survivor contributes exactly one block: its banner and content, or a
//! two-line error block when the file could not be read as UTF-8 text. A read
//! failure never stops the remaining files from being processed.

pub mod banner;
pub mod reader;

use crate::core::types::FileEntry;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Builds the combined document for one root directory
#[derive(Debug, Clone)]
pub struct Combiner {
    /// Directory the relative paths are resolved against
    root: PathBuf,
    /// Root name shown in banners (`None` for the current directory token)
    label: Option<String>,
}

impl Combiner {
    /// Create a combiner for the directory argument as the user typed it
    pub fn new(directory: &Path) -> Self {
        Self {
            root: directory.to_path_buf(),
            label: banner::root_label(directory),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render the block for a single entry
    pub fn render(&self, entry: &FileEntry) -> String {
        match reader::read_text(&entry.resolve(&self.root)) {
            Ok(content) => {
                debug!(path = %entry, bytes = content.len(), "Read file");
                banner::content_block(self.label.as_deref(), entry, &content)
            },
            Err(e) => {
                warn!(path = %entry, error = %e, "Could not read file");
                banner::error_block(entry, &e)
            },
        }
    }

    /// Concatenate the blocks for all entries, in the order given
    pub fn combine(&self, files: &[FileEntry]) -> String {
        files.iter().map(|entry| self.render(entry)).collect()
    }
}

/// Combine `files` found under `directory` into one document
pub fn combine_files(directory: &Path, files: &[FileEntry]) -> String {
    Combiner::new(directory).combine(files)
}
