//! Package naming policy for staging directories and archives.
//!
//! Every package is identified by the stem
//! `<product>-<platform>-v<version>`. The staging directory carries the bare
//! stem and the archive appends the format's extension.

use super::product::ProductName;
use super::version::ReleaseVersion;
use crate::platform::Platform;
use std::fmt;

/// Container format of a package archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    /// Deflate-compressed zip archive.
    Zip,
    /// Gzip-compressed tar archive.
    TarGz,
}

impl ArchiveFormat {
    /// Every supported format.
    pub const ALL: [Self; 2] = [Self::Zip, Self::TarGz];

    /// Return the file extension, without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }

    /// Detect the format from an archive file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pageforge_packager::artefact::naming::ArchiveFormat;
    ///
    /// assert_eq!(
    ///     ArchiveFormat::from_file_name("pageforge-linux-v2.0.0.tar.gz"),
    ///     Some(ArchiveFormat::TarGz)
    /// );
    /// assert_eq!(ArchiveFormat::from_file_name("notes.txt"), None);
    /// ```
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| name.ends_with(&format!(".{}", format.extension())))
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A fully-qualified package name.
///
/// # Examples
///
/// ```
/// use pageforge_packager::artefact::naming::PackageName;
/// use pageforge_packager::artefact::product::ProductName;
/// use pageforge_packager::artefact::version::ReleaseVersion;
/// use pageforge_packager::platform::Platform;
///
/// let name = PackageName::new(
///     ProductName::default(),
///     Platform::Linux,
///     ReleaseVersion::try_from("2.0.0").expect("valid version"),
/// );
/// assert_eq!(name.to_string(), "pageforge-linux-v2.0.0");
/// assert_eq!(name.archive_filename(), "pageforge-linux-v2.0.0.tar.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName {
    product: ProductName,
    platform: Platform,
    version: ReleaseVersion,
}

impl PackageName {
    /// Create a package name from validated components.
    #[must_use]
    pub const fn new(product: ProductName, platform: Platform, version: ReleaseVersion) -> Self {
        Self {
            product,
            platform,
            version,
        }
    }

    /// Return the product component.
    #[must_use]
    pub const fn product(&self) -> &ProductName {
        &self.product
    }

    /// Return the platform component.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Return the version component.
    #[must_use]
    pub const fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    /// Return the archive format used for this platform.
    #[must_use]
    pub const fn format(&self) -> ArchiveFormat {
        self.platform.archive_format()
    }

    /// Return the staging directory name (the bare stem).
    #[must_use]
    pub fn staging_dirname(&self) -> String {
        self.to_string()
    }

    /// Return the archive file name, stem plus extension.
    #[must_use]
    pub fn archive_filename(&self) -> String {
        format!("{self}.{}", self.format().extension())
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-v{}",
            self.product,
            self.platform.slug(),
            self.version
        )
    }
}
