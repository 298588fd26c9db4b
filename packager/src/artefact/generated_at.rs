//! Generation timestamp stamped into package documents.

use chrono::Local;
use std::fmt;

/// Timestamp layout used in `PACKAGE-INFO.md` and the distribution guide.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The moment a generation run started, pre-formatted for documents.
///
/// # Examples
///
/// ```
/// use pageforge_packager::artefact::generated_at::GeneratedAt;
///
/// let ts = GeneratedAt::new("2026-02-03 10:00:00");
/// assert_eq!(ts.as_str(), "2026-02-03 10:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAt(String);

impl GeneratedAt {
    /// Wrap an already formatted timestamp.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Capture the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// Return the timestamp as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
