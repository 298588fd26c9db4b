//! Exclusion patterns for the project copy.
//!
//! A pattern is matched against a single entry name, never a full path:
//!
//! - `*suffix` matches names ending in `suffix` (for example `*.log`);
//! - `prefix*` matches names starting with `prefix`
//!   (for example `database.sqlite*`);
//! - anything else matches the exact name (for example `node_modules`).
//!
//! A directory whose name matches is skipped together with its subtree.

use std::fmt;

/// Patterns excluded from every package.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "node_modules",
    ".git",
    "packages",
    "attached_assets",
    "__pycache__",
    "*.pyc",
    ".DS_Store",
    "Thumbs.db",
    "*.log",
    ".env",
    "database.sqlite*",
    "dist",
    ".replit",
];

/// A single exclusion rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionPattern {
    /// Matches the name exactly.
    Exact(String),
    /// Matches names ending with the stored suffix.
    Suffix(String),
    /// Matches names starting with the stored prefix.
    Prefix(String),
}

impl ExclusionPattern {
    /// Parse a glob-like pattern string.
    ///
    /// # Examples
    ///
    /// ```
    /// use pageforge_packager::filter::ExclusionPattern;
    ///
    /// assert_eq!(
    ///     ExclusionPattern::parse("*.log"),
    ///     ExclusionPattern::Suffix(".log".to_owned())
    /// );
    /// assert_eq!(
    ///     ExclusionPattern::parse("database.sqlite*"),
    ///     ExclusionPattern::Prefix("database.sqlite".to_owned())
    /// );
    /// ```
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        if let Some(suffix) = pattern.strip_prefix('*') {
            Self::Suffix(suffix.to_owned())
        } else if let Some(prefix) = pattern.strip_suffix('*') {
            Self::Prefix(prefix.to_owned())
        } else {
            Self::Exact(pattern.to_owned())
        }
    }

    /// Return whether `name` is excluded by this pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(exact) => name == exact,
            Self::Suffix(suffix) => name.ends_with(suffix.as_str()),
            Self::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

impl fmt::Display for ExclusionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(exact) => f.write_str(exact),
            Self::Suffix(suffix) => write!(f, "*{suffix}"),
            Self::Prefix(prefix) => write!(f, "{prefix}*"),
        }
    }
}

/// An ordered set of exclusion patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionList {
    patterns: Vec<ExclusionPattern>,
}

impl ExclusionList {
    /// Build a list from pattern strings.
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|pattern| ExclusionPattern::parse(pattern.as_ref()))
                .collect(),
        }
    }

    /// Append further patterns, keeping the existing ones.
    #[must_use]
    pub fn with_extra<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns.extend(
            patterns
                .into_iter()
                .map(|pattern| ExclusionPattern::parse(pattern.as_ref())),
        );
        self
    }

    /// Return whether any pattern excludes `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(name))
    }

    /// Return the patterns in order.
    #[must_use]
    pub fn patterns(&self) -> &[ExclusionPattern] {
        &self.patterns
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::node_modules("node_modules")]
    #[case::git(".git")]
    #[case::log_file("server.log")]
    #[case::pyc("cache.pyc")]
    #[case::sqlite("database.sqlite")]
    #[case::sqlite_journal("database.sqlite-journal")]
    #[case::env(".env")]
    #[case::dist("dist")]
    fn default_list_excludes_build_noise(#[case] name: &str) {
        assert!(ExclusionList::default().matches(name));
    }

    #[rstest]
    #[case::env_example(".env.example")]
    #[case::distribution("distribution.ts")]
    #[case::gitignore(".gitignore")]
    #[case::source("index.tsx")]
    #[case::log_dir_lookalike("logger.ts")]
    fn default_list_keeps_project_files(#[case] name: &str) {
        assert!(!ExclusionList::default().matches(name));
    }

    #[test]
    fn extra_patterns_extend_defaults() {
        let list = ExclusionList::default().with_extra(["*.bak"]);
        assert!(list.matches("notes.bak"));
        assert!(list.matches("node_modules"));
        assert_eq!(list.patterns().len(), DEFAULT_EXCLUSIONS.len() + 1);
    }

    #[rstest]
    #[case("*.log")]
    #[case("database.sqlite*")]
    #[case("node_modules")]
    fn display_reproduces_the_pattern(#[case] pattern: &str) {
        assert_eq!(ExclusionPattern::parse(pattern).to_string(), pattern);
    }
}
