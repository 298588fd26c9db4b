//! Bundled document and script templates.
//!
//! Templates are compiled into the binary and carry these placeholders:
//! `{{product}}` (display name), `{{version}}`, `{{package}}` (the staging
//! directory name), and `{{installer}}` (the installer's file name inside
//! the package). Substitution is plain text replacement.

use crate::artefact::naming::PackageName;
use crate::platform::Platform;

/// How a generated file is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// UTF-8 text with LF line endings.
    Text,
    /// Windows batch file with CRLF line endings.
    BatchScript,
    /// Shell script, executable on Unix.
    ShellScript,
}

/// A file generated from a bundled template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplatedFile {
    /// Path relative to the staging directory.
    pub path: &'static str,
    /// Raw template text.
    pub template: &'static str,
    /// Write mode.
    pub kind: FileKind,
}

const fn text(path: &'static str, template: &'static str) -> TemplatedFile {
    TemplatedFile {
        path,
        template,
        kind: FileKind::Text,
    }
}

/// Template for the generated `.env.example`.
pub const ENV_EXAMPLE: &str = include_str!("../templates/env.example");

/// Template for the bundled VS Code configurator.
pub const VSCODE_SETUP: &str = include_str!("../templates/setup.php");

const CPANEL_FILES: &[TemplatedFile] = &[
    text("README.md", include_str!("../templates/cpanel-readme.md")),
    text(
        "INSTALLATION-GUIDE.txt",
        include_str!("../templates/cpanel-install.txt"),
    ),
];

const WINDOWS_FILES: &[TemplatedFile] = &[
    text("README.md", include_str!("../templates/windows-readme.md")),
    text(
        "WINDOWS-INSTALL.txt",
        include_str!("../templates/windows-install.txt"),
    ),
    TemplatedFile {
        path: "start-installer.bat",
        template: include_str!("../templates/start-installer.bat"),
        kind: FileKind::BatchScript,
    },
    TemplatedFile {
        path: "install-cli.bat",
        template: include_str!("../templates/install-cli.bat"),
        kind: FileKind::BatchScript,
    },
];

const LINUX_FILES: &[TemplatedFile] = &[
    text("README.md", include_str!("../templates/linux-readme.md")),
    text(
        "LINUX-INSTALL.txt",
        include_str!("../templates/linux-install.txt"),
    ),
    TemplatedFile {
        path: "start-installer.sh",
        template: include_str!("../templates/start-installer.sh"),
        kind: FileKind::ShellScript,
    },
    TemplatedFile {
        path: "install-cli.sh",
        template: include_str!("../templates/install-cli.sh"),
        kind: FileKind::ShellScript,
    },
];

const VSCODE_FILES: &[TemplatedFile] = &[
    text("README.md", include_str!("../templates/vscode-readme.md")),
    text(
        "DEVELOPMENT.txt",
        include_str!("../templates/vscode-development.txt"),
    ),
];

/// Return the templated documents and scripts shipped with `platform`.
#[must_use]
pub const fn platform_files(platform: Platform) -> &'static [TemplatedFile] {
    match platform {
        Platform::Cpanel => CPANEL_FILES,
        Platform::Windows => WINDOWS_FILES,
        Platform::Linux => LINUX_FILES,
        Platform::Vscode => VSCODE_FILES,
    }
}

/// Values substituted into templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    product: String,
    version: String,
    package: String,
    installer: &'static str,
}

impl TemplateContext {
    /// Build the context for one package.
    #[must_use]
    pub fn for_package(name: &PackageName) -> Self {
        Self {
            product: name.product().display_name(),
            version: name.version().to_string(),
            package: name.staging_dirname(),
            installer: name.platform().installer().default_destination(),
        }
    }

    /// Point `{{installer}}` at the file name the installer was staged as.
    #[must_use]
    pub fn with_installer(mut self, installer: &'static str) -> Self {
        self.installer = installer;
        self
    }

    /// Substitute every placeholder in `template`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pageforge_packager::artefact::naming::PackageName;
    /// use pageforge_packager::artefact::product::ProductName;
    /// use pageforge_packager::artefact::version::ReleaseVersion;
    /// use pageforge_packager::platform::Platform;
    /// use pageforge_packager::templates::TemplateContext;
    ///
    /// let name = PackageName::new(
    ///     ProductName::default(),
    ///     Platform::Linux,
    ///     ReleaseVersion::default(),
    /// );
    /// let context = TemplateContext::for_package(&name);
    /// assert_eq!(
    ///     context.render("tar -xzf {{package}}.tar.gz # {{product}} {{version}}"),
    ///     "tar -xzf pageforge-linux-v2.0.0.tar.gz # PageForge 2.0.0"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{{product}}", &self.product)
            .replace("{{version}}", &self.version)
            .replace("{{package}}", &self.package)
            .replace("{{installer}}", self.installer)
    }
}
