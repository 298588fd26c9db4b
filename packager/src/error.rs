//! Error types for the PageForge packager.
//!
//! Every failure during a generation run is fatal: the orchestrator stops at
//! the first error and the binary reports it and exits with status 1. The
//! variants below carry the path involved so the message says what broke.

use crate::artefact::archive_error::ArchiveError;
use crate::artefact::error::NamingError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating packages.
#[derive(Debug, Error)]
pub enum PackagerError {
    /// A directory could not be created.
    #[error("failed to create directory {}", path.display())]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output directory exists but is not writable.
    #[error("output directory {} is not writable: {reason}", path.display())]
    OutputNotWritable {
        /// Path to the output directory.
        path: PathBuf,
        /// Description of the underlying I/O error.
        reason: String,
    },

    /// A project file could not be copied into a staging directory.
    #[error("failed to copy {} to {}", from.display(), to.display())]
    Copy {
        /// Source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The project tree could not be traversed during a copy.
    #[error("failed to read project tree under {}", root.display())]
    Walk {
        /// Root of the traversal.
        root: PathBuf,
        /// The underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write {}", path.display())]
    WriteFile {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An artefact from a previous run could not be removed.
    #[error("failed to remove previous output {}", path.display())]
    Cleanup {
        /// The path that could not be removed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An archive could not be created or verified.
    #[error("failed to build archive {}: {source}", path.display())]
    Archive {
        /// The archive being produced.
        path: PathBuf,
        /// The underlying archive error.
        #[source]
        source: ArchiveError,
    },

    /// An editor configuration file could not be serialised.
    #[error("failed to serialise {name}: {source}")]
    Serialization {
        /// Name of the document being serialised.
        name: &'static str,
        /// The underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("invalid configuration {}: {reason}", path.display())]
    Config {
        /// Path to the configuration file.
        path: PathBuf,
        /// Description of the problem.
        reason: String,
    },

    /// A path given to the packager is not valid UTF-8.
    #[error("path {} is not valid UTF-8", path.display())]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },

    /// A product name or version was rejected.
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// An I/O operation without more specific context failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write user-facing output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`PackagerError`].
pub type Result<T> = std::result::Result<T, PackagerError>;
