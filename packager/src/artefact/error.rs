//! Error types for package naming.
//!
//! Each variant identifies the rejected value and the constraint it broke.

use thiserror::Error;

/// Errors arising from invalid naming components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// A product name is empty or contains characters unsafe in file names.
    #[error("invalid product name \"{value}\": {reason}")]
    InvalidProduct {
        /// The rejected product name.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// A release version is empty or not dotted numeric.
    #[error("invalid release version \"{value}\": {reason}")]
    InvalidVersion {
        /// The rejected version string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },
}

/// Result type alias using [`NamingError`].
pub type Result<T> = std::result::Result<T, NamingError>;
