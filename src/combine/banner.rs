//! Banner and fallback block formatting

use crate::core::error::FileReadError;
use crate::core::types::{FileEntry, CURRENT_DIR_TOKEN};
use std::path::{is_separator, Path};

const TOP_RULE: &str = "//#########################################################";
const BOTTOM_RULE: &str = "//*********************************************************";

/// Name shown before each relative path in banners, or `None` when the root
/// was given as the current-directory token.
///
/// The name is the text after the last separator, so an argument ending in a
/// separator yields an empty name (`proj/` gives `.//<path>`).
pub fn root_label(directory: &Path) -> Option<String> {
    if directory.as_os_str() == CURRENT_DIR_TOKEN {
        return None;
    }

    let text = directory.to_string_lossy();
    let base = text.rsplit(is_separator).next().unwrap_or_default();
    Some(base.to_string())
}

/// The path line inside a banner
pub fn path_line(label: Option<&str>, entry: &FileEntry) -> String {
    match label {
        Some(label) => format!("./{}/{}", label, entry),
        None => entry.to_string(),
    }
}

/// Full block for a file that was read successfully
pub fn content_block(label: Option<&str>, entry: &FileEntry, content: &str) -> String {
    format!(
        "{}\n//\n// {}\n//\n{}\n{}\n\n",
        TOP_RULE,
        path_line(label, entry),
        BOTTOM_RULE,
        content
    )
}

/// Two-line block written in place of a banner when the read failed
pub fn error_block(entry: &FileEntry, err: &FileReadError) -> String {
    format!("// {}\n// {}\n\n", entry, err)
}
