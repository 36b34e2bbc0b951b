//! Ignore decision for a single relative path

use crate::core::types::FileEntry;
use crate::ignore::parser::{IgnorePattern, IgnorePatterns};

/// Result of ignore checking
#[derive(Debug, Clone, PartialEq)]
pub enum IgnoreResult {
    /// File should be ignored
    Ignored(String), // Pattern that matched
    /// File should be included
    Included,
}

impl IgnoreResult {
    pub fn is_ignored(&self) -> bool {
        matches!(self, IgnoreResult::Ignored(_))
    }
}

/// Applies loaded patterns to root-relative paths
#[derive(Debug, Clone, Default)]
pub struct IgnoreChecker {
    patterns: IgnorePatterns,
}

impl IgnoreChecker {
    pub fn new(patterns: IgnorePatterns) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &IgnorePatterns {
        &self.patterns
    }

    /// Check an entry against every pattern.
    ///
    /// A pattern excludes the entry when it matches any single path segment
    /// or the whole relative path. Whole-path matching uses plain string
    /// semantics, so `*` may span `/`.
    pub fn check(&self, entry: &FileEntry) -> IgnoreResult {
        self.patterns
            .iter()
            .find(|pattern| pattern_matches(pattern, entry))
            .map(|pattern| IgnoreResult::Ignored(pattern.original.clone()))
            .unwrap_or(IgnoreResult::Included)
    }

    pub fn is_ignored(&self, entry: &FileEntry) -> bool {
        self.check(entry).is_ignored()
    }
}

fn pattern_matches(pattern: &IgnorePattern, entry: &FileEntry) -> bool {
    entry.segments().any(|segment| pattern.matches(segment)) || pattern.matches(entry.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn checker(content: &str) -> IgnoreChecker {
        IgnoreChecker::new(IgnorePatterns::from_content(content))
    }

    #[rstest]
    #[case("*.log", "app.log", true)]
    #[case("*.log", "sub/app.log", true)]
    #[case("*.log", "applog.txt", false)]
    #[case("target", "target/debug/app", true)]
    #[case("target", "src/target", true)]
    #[case("target", "targets/file", false)]
    #[case("src/*.rs", "src/main.rs", true)]
    #[case("src/*.rs", "src/cli/mod.rs", true)]
    #[case("src/*.rs", "lib/src/main.rs", false)]
    #[case("?.txt", "a.txt", true)]
    #[case("?.txt", "ab.txt", false)]
    #[case("[ab].md", "b.md", true)]
    #[case("[ab].md", "c.md", false)]
    #[case("[!ab].md", "c.md", true)]
    #[case("README", "readme", false)]
    #[case(".prlistignore", ".prlistignore", true)]
    #[case("**/*.log", "app.log", false)]
    #[case("**/*.log", "sub/app.log", true)]
    #[case("**/*.log", "a/b/app.log", true)]
    #[case("**.log", "app.log", true)]
    #[case("a**", "abc", true)]
    #[case("*", "deep/nested/file", true)]
    #[case("[abc*", "[abcdef", true)]
    #[case("[abc*", "abcdef", false)]
    #[case("[", "[", true)]
    #[case("[]", "[]", true)]
    #[case("[]].txt", "].txt", true)]
    #[case("[]].txt", "a.txt", false)]
    #[case("[!]]x", "ax", true)]
    #[case("[!]]x", "]x", false)]
    #[case("[!]", "[!]", true)]
    fn test_single_pattern(#[case] pattern: &str, #[case] path: &str, #[case] ignored: bool) {
        assert_eq!(checker(pattern).is_ignored(&FileEntry::from(path)), ignored);
    }

    #[test]
    fn test_no_patterns_includes_everything() {
        let checker = IgnoreChecker::default();
        assert_eq!(checker.check(&FileEntry::from("any/file")), IgnoreResult::Included);
    }

    #[test]
    fn test_reports_first_matching_pattern() {
        let checker = checker("*.tmp\nbuild\n*.o\n");

        assert_eq!(
            checker.check(&FileEntry::from("build/main.o")),
            IgnoreResult::Ignored("build".to_string())
        );
        assert_eq!(
            checker.check(&FileEntry::from("obj/main.o")),
            IgnoreResult::Ignored("*.o".to_string())
        );
    }
}
