//! Core types and error handling for prlist

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{FileReadError, PrlistError, Result};
pub use types::{FileEntry, CURRENT_DIR_TOKEN, IGNORE_FILE_NAME};
