//! Deployment targets and their fixed package properties.
//!
//! Each [`Platform`] decides its archive format, the [`Tier`] of project
//! files it ships, where its PHP installer is taken from, and the metadata
//! rendered into `PACKAGE-INFO.md`.

use crate::artefact::naming::ArchiveFormat;
use std::fmt;

/// How much of the project a package carries.
///
/// Tiers are cumulative: every tier ships everything the previous one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Runtime sources and configuration only.
    Production,
    /// Production plus the project README.
    Local,
    /// Local plus docs and VCS ignore rules.
    Development,
}

impl Tier {
    /// Return whether this tier ships everything `other` ships.
    #[must_use]
    pub fn includes(self, other: Self) -> bool {
        self >= other
    }

    /// Return the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Local => "local",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One place a package's PHP installer may be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallerCandidate {
    /// Path relative to the project root.
    pub source: &'static str,
    /// File name inside the package.
    pub destination: &'static str,
}

const fn candidate(source: &'static str, destination: &'static str) -> InstallerCandidate {
    InstallerCandidate {
        source,
        destination,
    }
}

const CPANEL_INSTALLERS: [InstallerCandidate; 3] = [
    candidate("build-scripts/install-cpanel.php", "install-cpanel.php"),
    candidate("install-cpanel.php", "install-cpanel.php"),
    candidate("install-interactive.php", "install.php"),
];

const LOCAL_INSTALLERS: [InstallerCandidate; 2] = [
    candidate("build-scripts/install-local.php", "install.php"),
    candidate("install-local.php", "install.php"),
];

const VSCODE_INSTALLERS: [InstallerCandidate; 2] = [
    candidate("build-scripts/install-vscode.php", "setup.php"),
    candidate("install-vscode.php", "setup.php"),
];

/// Where a package's PHP installer comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallerSource {
    /// Candidates tried in order; the first existing one wins.
    pub candidates: &'static [InstallerCandidate],
}

impl InstallerSource {
    /// Return the entry-point name used when no candidate is found.
    #[must_use]
    pub const fn default_destination(&self) -> &'static str {
        match self.candidates.first() {
            Some(first) => first.destination,
            None => "install.php",
        }
    }
}

/// Descriptive metadata for `PACKAGE-INFO.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Kind of deployment the package targets.
    pub kind: &'static str,
    /// Software the target machine must provide.
    pub requirements: &'static str,
    /// How the package is installed.
    pub installation: &'static str,
    /// Intended use, shown in the distribution guide.
    pub usage: &'static str,
    /// Feature bullet points.
    pub features: &'static [&'static str],
}

/// A deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Shared hosting managed through cPanel.
    Cpanel,
    /// Local install on Windows.
    Windows,
    /// Local install on Linux or macOS.
    Linux,
    /// Development checkout for VS Code.
    Vscode,
}

impl Platform {
    /// Every platform, in build order.
    pub const ALL: [Self; 4] = [Self::Cpanel, Self::Windows, Self::Linux, Self::Vscode];

    /// Return the identifier used in package names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Cpanel => "cpanel",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Vscode => "vscode",
        }
    }

    /// Return the human-readable label used in status output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpanel => "cPanel",
            Self::Windows => "Windows",
            Self::Linux => "Linux/macOS",
            Self::Vscode => "VS Code",
        }
    }

    /// Return the archive format; only Linux/macOS uses tar.gz.
    #[must_use]
    pub const fn archive_format(self) -> ArchiveFormat {
        match self {
            Self::Linux => ArchiveFormat::TarGz,
            Self::Cpanel | Self::Windows | Self::Vscode => ArchiveFormat::Zip,
        }
    }

    /// Return the tier of project files shipped.
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Cpanel => Tier::Production,
            Self::Windows | Self::Linux => Tier::Local,
            Self::Vscode => Tier::Development,
        }
    }

    /// Return where the PHP installer is copied from.
    #[must_use]
    pub const fn installer(self) -> InstallerSource {
        match self {
            Self::Cpanel => InstallerSource {
                candidates: &CPANEL_INSTALLERS,
            },
            Self::Windows | Self::Linux => InstallerSource {
                candidates: &LOCAL_INSTALLERS,
            },
            Self::Vscode => InstallerSource {
                candidates: &VSCODE_INSTALLERS,
            },
        }
    }

    /// Return the `PACKAGE-INFO.md` metadata.
    #[must_use]
    pub const fn metadata(self) -> PackageMetadata {
        match self {
            Self::Cpanel => PackageMetadata {
                kind: "cPanel web hosting with Node.js Selector",
                requirements: "PHP 7.4+, MySQL/PostgreSQL, Node.js Selector (optional)",
                installation: "Interactive web installer with Node.js support",
                usage: "Production on shared hosting",
                features: &[
                    "Installation without a command line",
                    "cPanel Node.js Selector support",
                    "Automatic database configuration",
                    "Responsive installer interface",
                    "Shared hosting optimisations",
                    "Automatic post-install cleanup",
                ],
            },
            Self::Windows => PackageMetadata {
                kind: "Local installation on Windows",
                requirements: "PHP 7.4+, Node.js 16+ recommended",
                installation: "PHP web interface or CLI",
                usage: "Local development and use on Windows",
                features: &[
                    "Automatic Windows detection",
                    "Guided Node.js installation",
                    "Automatic SQLite configuration",
                    "Start-up scripts included",
                    "Web installation interface",
                    "Built-in development mode",
                ],
            },
            Self::Linux => PackageMetadata {
                kind: "Local installation on Linux/macOS",
                requirements: "PHP 7.4+, Node.js 16+ recommended",
                installation: "PHP web interface or CLI",
                usage: "Local development and use on Unix systems",
                features: &[
                    "Works on all major Linux distributions",
                    "Native macOS support",
                    "Automatic Node.js installation",
                    "Shell start-up scripts",
                    "Automatic SQLite configuration",
                    "Built-in development mode",
                ],
            },
            Self::Vscode => PackageMetadata {
                kind: "VS Code development environment",
                requirements: "PHP 7.4+, Node.js 16+, VS Code, Git",
                installation: "Automatic development setup",
                usage: "Professional development with VS Code",
                features: &[
                    "Complete VS Code configuration",
                    "Integrated client and server debugging",
                    "Recommended extensions",
                    "Professional project structure",
                    "Hot reload during development",
                    "ESLint and Prettier configured",
                ],
            },
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
