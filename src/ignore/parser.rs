//! .prlistignore loader

use crate::core::error::{PrlistError, Result};
use crate::core::types::IGNORE_FILE_NAME;
use glob::{Pattern, PatternError};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A compiled pattern from the .prlistignore file
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    /// The pattern text as written (trimmed)
    pub original: String,
    /// The compiled glob pattern
    pub pattern: Pattern,
}

impl IgnorePattern {
    /// Compile a shell-style pattern.
    ///
    /// `*` never acts as a recursive wildcard and an unclosed `[` matches
    /// itself, so every line of an ignore file compiles.
    pub fn new(original: &str) -> std::result::Result<Self, PatternError> {
        let pattern = Pattern::new(&translate(original))?;

        Ok(Self {
            original: original.to_string(),
            pattern,
        })
    }

    /// Whether the pattern matches the whole of `text`
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.matches(text)
    }
}

/// Rewrite shell wildcard text into `glob::Pattern` syntax.
///
/// Runs of `*` collapse into one, and a `[` with no closing `]` is escaped
/// as `[[]` while the rest of the text stays a pattern.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            },
            '[' => match bracket_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                },
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// Index of the `]` closing the set opened at `start`.
///
/// A `]` directly after `[` or `[!` belongs to the set.
fn bracket_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }

    chars
        .get(j..)?
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

/// Ordered ignore patterns loaded for one run
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    patterns: Vec<IgnorePattern>,
}

impl IgnorePatterns {
    /// Load patterns from the ignore file directly inside `root`.
    ///
    /// A missing file yields an empty list; a file that exists but cannot be
    /// read as UTF-8 text is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let ignore_path = root.join(IGNORE_FILE_NAME);

        if !ignore_path.exists() {
            debug!(path = %ignore_path.display(), "No ignore file");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&ignore_path)
            .map_err(|e| PrlistError::ignore_file_unreadable(ignore_path.clone(), e))?;

        let patterns = Self::from_content(&content);
        debug!(
            path = %ignore_path.display(),
            count = patterns.len(),
            "Loaded ignore patterns"
        );

        Ok(patterns)
    }

    /// Parse ignore file content
    pub fn from_content(content: &str) -> Self {
        let patterns = content.lines().filter_map(parse_line).collect();
        Self { patterns }
    }

    /// All patterns in file order
    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IgnorePattern> {
        self.patterns.iter()
    }
}

/// Parse a single line from the ignore file
fn parse_line(line: &str) -> Option<IgnorePattern> {
    let line = line.trim();

    // Skip empty lines and comments
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    match IgnorePattern::new(line) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            warn!(pattern = line, error = %e, "Skipping invalid ignore pattern");
            None
        },
    }
}
