//! SHA-256 checksums for produced archives.
//!
//! Digests are written to `SHA256SUMS` in the `sha256sum` text format so the
//! published archives can be checked with `sha256sum -c`.

use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// File name of the checksum listing written next to the archives.
pub const CHECKSUMS_FILENAME: &str = "SHA256SUMS";

/// A lowercase hex-encoded SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sha256Digest(String);

impl Sha256Digest {
    /// Return the digest as a hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the SHA-256 digest of a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn compute_sha256(path: &Path) -> io::Result<Sha256Digest> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(Sha256Digest(format!("{:x}", hasher.finalize())))
}

/// Render a `sha256sum`-compatible listing.
///
/// Each line is `<hex>  <file name>`; the order of `entries` is kept.
#[must_use]
pub fn render_checksums(entries: &[(String, Sha256Digest)]) -> String {
    entries
        .iter()
        .map(|(name, digest)| format!("{digest}  {name}\n"))
        .collect()
}
