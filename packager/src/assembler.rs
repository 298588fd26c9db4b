//! Assembly of one package's staging directory.
//!
//! A build always starts from an empty staging directory and adds, in
//! order: the directory skeleton, the tier's project files, the generated
//! `.env.example`, the PHP installer, the platform documents and scripts,
//! the editor configuration (VS Code only), and `PACKAGE-INFO.md`.

use crate::artefact::generated_at::GeneratedAt;
use crate::artefact::naming::PackageName;
use crate::copier::{CopyStats, copy_file, create_dir};
use crate::editor::write_editor_config;
use crate::error::{PackagerError, Result};
use crate::files::{write_generated, write_text};
use crate::filter::ExclusionList;
use crate::layout::{copy_tier_files, create_skeleton};
use crate::metadata::{PACKAGE_INFO_FILENAME, render_package_info};
use crate::platform::Platform;
use crate::templates::{ENV_EXAMPLE, TemplateContext, VSCODE_SETUP, platform_files};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a package's installer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallerOrigin {
    /// Copied from this project file.
    Project(PathBuf),
    /// Generated from the bundled template.
    Bundled,
    /// No candidate was found; the package ships without an installer.
    Missing,
}

/// A fully assembled staging directory.
#[derive(Debug, Clone)]
pub struct StagedPackage {
    /// The package identity.
    pub name: PackageName,
    /// Absolute path of the staging directory.
    pub staging_dir: PathBuf,
    /// Counters for the project files copied in.
    pub copied: CopyStats,
    /// Source of the PHP installer.
    pub installer: InstallerOrigin,
}

/// Builds staging directories for a project.
#[derive(Debug)]
pub struct PackageAssembler<'a> {
    project_root: &'a Path,
    output_dir: &'a Path,
    exclusions: &'a ExclusionList,
    generated_at: &'a GeneratedAt,
}

impl<'a> PackageAssembler<'a> {
    /// Create an assembler reading from `project_root` and staging under
    /// `output_dir`.
    #[must_use]
    pub const fn new(
        project_root: &'a Path,
        output_dir: &'a Path,
        exclusions: &'a ExclusionList,
        generated_at: &'a GeneratedAt,
    ) -> Self {
        Self {
            project_root,
            output_dir,
            exclusions,
            generated_at,
        }
    }

    /// Return the staging directory path for `name`.
    #[must_use]
    pub fn staging_dir(&self, name: &PackageName) -> PathBuf {
        self.output_dir.join(name.staging_dirname())
    }

    /// Assemble the staging directory for `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the staging directory cannot be reset or any
    /// present input cannot be copied or written.
    pub fn assemble(&self, name: &PackageName) -> Result<StagedPackage> {
        let platform = name.platform();
        let staging_dir = self.staging_dir(name);
        let context = TemplateContext::for_package(name);

        reset_dir(&staging_dir)?;
        create_skeleton(&staging_dir)?;
        let copied = copy_tier_files(
            self.project_root,
            &staging_dir,
            platform.tier(),
            self.exclusions,
        )?;
        write_text(&staging_dir.join(".env.example"), &context.render(ENV_EXAMPLE))?;

        let (installer, entry_point) = self.place_installer(platform, &staging_dir, &context)?;
        let context = context.with_installer(entry_point);

        for file in platform_files(platform) {
            write_generated(
                &staging_dir.join(file.path),
                &context.render(file.template),
                file.kind,
            )?;
        }
        if platform == Platform::Vscode {
            write_editor_config(&staging_dir, &name.product().display_name())?;
        }
        write_text(
            &staging_dir.join(PACKAGE_INFO_FILENAME),
            &render_package_info(name, self.generated_at),
        )?;

        info!(
            "staged {name} ({} project files) in {}",
            copied.files,
            staging_dir.display()
        );
        Ok(StagedPackage {
            name: name.clone(),
            staging_dir,
            copied,
            installer,
        })
    }

    /// Stage the installer and return where it came from together with
    /// its file name inside the package.
    fn place_installer(
        &self,
        platform: Platform,
        staging_dir: &Path,
        context: &TemplateContext,
    ) -> Result<(InstallerOrigin, &'static str)> {
        let source = platform.installer();

        let found = source
            .candidates
            .iter()
            .map(|candidate| (candidate, self.project_root.join(candidate.source)))
            .find(|(_, path)| path.is_file());

        match found {
            Some((candidate, path)) => {
                debug!("using installer {} as {}", path.display(), candidate.destination);
                copy_file(&path, &staging_dir.join(candidate.destination))?;
                Ok((InstallerOrigin::Project(path), candidate.destination))
            }
            None if platform == Platform::Vscode => {
                let destination = source.default_destination();
                write_text(&staging_dir.join(destination), &context.render(VSCODE_SETUP))?;
                Ok((InstallerOrigin::Bundled, destination))
            }
            None => {
                let tried: Vec<_> = source.candidates.iter().map(|c| c.source).collect();
                warn!(
                    "no installer found for {} (tried {}); packaging without one",
                    platform.label(),
                    tried.join(", ")
                );
                Ok((InstallerOrigin::Missing, source.default_destination()))
            }
        }
    }
}

fn reset_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|source| PackagerError::Cleanup {
            path: path.to_path_buf(),
            source,
        })?;
    }
    create_dir(path)
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;
