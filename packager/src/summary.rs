//! Listing of the archives in the output directory.

use crate::artefact::naming::ArchiveFormat;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count for humans, 1024-based with one decimal.
///
/// # Examples
///
/// ```
/// use pageforge_packager::summary::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(512), "512.0 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "sizes are displayed to one decimal place"
)]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_owned();
    }
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}

/// One archive found in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    /// Archive file name.
    pub name: String,
    /// Full path.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
}

/// The archives present after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSummary {
    archives: Vec<ArchiveFile>,
}

impl PackageSummary {
    /// Collect every `.zip` and `.tar.gz` file directly inside `output_dir`,
    /// sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a file's metadata cannot be read.
    pub fn collect(output_dir: &Path) -> io::Result<Self> {
        let mut archives = Vec::new();
        for entry in fs::read_dir(output_dir)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if metadata.is_file() && ArchiveFormat::from_file_name(&name).is_some() {
                archives.push(ArchiveFile {
                    name,
                    path: entry.path(),
                    size: metadata.len(),
                });
            }
        }
        archives.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { archives })
    }

    /// Return the archives in name order.
    #[must_use]
    pub fn archives(&self) -> &[ArchiveFile] {
        &self.archives
    }

    /// Return the combined size in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.archives.iter().map(|archive| archive.size).sum()
    }

    /// Render the summary table, one line per archive then the total.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        let rule = "-".repeat(48);
        let mut lines = vec!["Package summary".to_owned(), rule.clone()];
        lines.extend(
            self.archives
                .iter()
                .map(|archive| format!("{:<37} {:>10}", archive.name, format_size(archive.size))),
        );
        lines.push(rule);
        lines.push(format!("Total size: {}", format_size(self.total_size())));
        lines
    }
}
