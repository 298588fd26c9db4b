//! Release version newtype.
//!
//! Versions are dotted numeric strings such as `2.0.0`; an optional
//! pre-release suffix after a hyphen (`2.1.0-rc1`) is accepted.

use super::error::{NamingError, Result};
use serde::Deserialize;
use std::fmt;

/// Version used when nothing else is configured.
pub const DEFAULT_VERSION: &str = "2.0.0";

/// A validated release version.
///
/// # Examples
///
/// ```
/// use pageforge_packager::artefact::version::ReleaseVersion;
///
/// let version = ReleaseVersion::try_from("2.0.0").expect("valid version");
/// assert_eq!(version.to_string(), "2.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ReleaseVersion {
    fn default() -> Self {
        Self(DEFAULT_VERSION.to_owned())
    }
}

impl TryFrom<&str> for ReleaseVersion {
    type Error = NamingError;

    fn try_from(value: &str) -> Result<Self> {
        validate_version(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for ReleaseVersion {
    type Error = NamingError;

    fn try_from(value: String) -> Result<Self> {
        validate_version(&value)?;
        Ok(Self(value))
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_version(value: &str) -> Result<()> {
    let reject = |reason: String| NamingError::InvalidVersion {
        value: value.to_owned(),
        reason,
    };
    let (core, pre_release) = match value.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (value, None),
    };
    if core.is_empty() {
        return Err(reject("version must not be empty".to_owned()));
    }
    for (index, part) in core.split('.').enumerate() {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(reject(format!(
                "component {} (\"{part}\") is not a number",
                index + 1
            )));
        }
    }
    if let Some(pre) = pre_release
        && (pre.is_empty() || !pre.chars().all(|c| c.is_ascii_alphanumeric() || c == '.'))
    {
        return Err(reject(format!("invalid pre-release suffix \"{pre}\"")));
    }
    Ok(())
}
