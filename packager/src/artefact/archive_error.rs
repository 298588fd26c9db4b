//! Error types for archive creation and inspection.
//!
//! Covers I/O failures, zip container errors, directory traversal errors,
//! and mismatches between a staging tree and the archive built from it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors arising from archive operations.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// An I/O operation failed (reading staged files, writing the archive).
    #[error("I/O error during archiving: {0}")]
    Io(#[from] std::io::Error),

    /// The zip container could not be written or read.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The staging tree could not be traversed.
    #[error("failed to walk staging tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// A staged path cannot be represented as an archive entry name.
    #[error("path cannot be stored in an archive: {}", path.display())]
    InvalidEntryPath {
        /// The offending path.
        path: PathBuf,
    },

    /// The archive does not list exactly the files that were staged.
    #[error("archive {} does not match its staging tree: {detail}", archive.display())]
    ContentMismatch {
        /// Path of the archive that failed verification.
        archive: PathBuf,
        /// Description of the first difference found.
        detail: String,
    },
}
