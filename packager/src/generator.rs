//! Run orchestration.
//!
//! [`Generator::run`] prepares the output directory, builds the four
//! packages in order, writes the distribution guide and checksum listing,
//! and prints a summary. The first error aborts the run; nothing is rolled
//! back.

use crate::artefact::archive::{create_archive, verify_archive};
use crate::artefact::archive_error::ArchiveError;
use crate::artefact::checksum::{
    CHECKSUMS_FILENAME, Sha256Digest, compute_sha256, render_checksums,
};
use crate::artefact::naming::{ArchiveFormat, PackageName};
use crate::assembler::{PackageAssembler, StagedPackage};
use crate::config::PackagerConfig;
use crate::copier::create_dir;
use crate::error::{PackagerError, Result};
use crate::files::write_text;
use crate::guide::{GUIDE_FILENAME, GuideInput, render_distribution_guide};
use crate::platform::Platform;
use crate::summary::{PackageSummary, format_size};
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File written and removed to check the output directory is writable.
const WRITE_PROBE: &str = ".pageforge-packager-probe";

/// A package whose archive has been written and verified.
#[derive(Debug, Clone)]
pub struct BuiltPackage {
    /// The staged tree the archive was made from.
    pub staged: StagedPackage,
    /// Path of the archive.
    pub archive_path: PathBuf,
    /// Archive size in bytes.
    pub archive_size: u64,
    /// Regular files inside the archive.
    pub entries: Vec<String>,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Packages in build order.
    pub packages: Vec<BuiltPackage>,
    /// Path of `DISTRIBUTION-GUIDE.md`.
    pub guide_path: PathBuf,
    /// Path of `SHA256SUMS`.
    pub checksums_path: PathBuf,
    /// Archives found in the output directory after the run.
    pub summary: PackageSummary,
}

/// Generates every distribution package for a project.
#[derive(Debug, Clone)]
pub struct Generator {
    config: PackagerConfig,
    quiet: bool,
}

impl Generator {
    /// Create a generator for `config`.
    #[must_use]
    pub const fn new(config: PackagerConfig) -> Self {
        Self {
            config,
            quiet: false,
        }
    }

    /// Suppress status output when `quiet` is true.
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Return the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PackagerConfig {
        &self.config
    }

    /// Return the package names built by a run, in build order.
    #[must_use]
    pub fn package_names(&self) -> Vec<PackageName> {
        Platform::ALL
            .into_iter()
            .map(|platform| {
                PackageName::new(
                    self.config.product.clone(),
                    platform,
                    self.config.version.clone(),
                )
            })
            .collect()
    }

    /// Run the full generation sequence, writing status lines to `out`.
    ///
    /// # Errors
    ///
    /// Returns the first error met. Packages built before the failure stay
    /// on disk.
    pub fn run(&self, out: &mut dyn Write) -> Result<RunReport> {
        let output_dir = self.config.output_dir.as_std_path();
        let project_root = self.config.project_root.as_std_path();

        self.status(
            out,
            format!(
                "{} package generator v{}",
                self.config.product.display_name(),
                self.config.version
            ),
        )?;
        prepare_output_dir(output_dir)?;
        let removed = self.remove_previous_outputs(output_dir)?;
        debug!("removed {removed} outputs from previous runs");

        let assembler = PackageAssembler::new(
            project_root,
            output_dir,
            &self.config.exclusions,
            &self.config.generated_at,
        );
        let names = self.package_names();
        let mut packages = Vec::with_capacity(names.len());
        for name in &names {
            packages.push(self.build_package(&assembler, name, out)?);
        }

        let checksums = checksum_archives(&packages)?;
        let guide_path = output_dir.join(GUIDE_FILENAME);
        write_text(
            &guide_path,
            &render_distribution_guide(&GuideInput {
                packages: &names,
                checksums: &checksums,
                generated_at: &self.config.generated_at,
            }),
        )?;
        let checksums_path = output_dir.join(CHECKSUMS_FILENAME);
        write_text(&checksums_path, &render_checksums(&checksums))?;

        let summary = PackageSummary::collect(output_dir)?;

        self.status(out, "")?;
        self.status(out, "All packages generated.")?;
        self.status(out, format!("Output directory: {}", output_dir.display()))?;
        self.status(out, format!("Distribution guide: {}", guide_path.display()))?;
        self.status(out, "")?;
        for line in summary.render_lines() {
            self.status(out, line)?;
        }
        self.status(out, "")?;
        self.status(
            out,
            format!("Ready for distribution. See {GUIDE_FILENAME} for details."),
        )?;

        info!("generated {} packages in {}", packages.len(), output_dir.display());
        Ok(RunReport {
            packages,
            guide_path,
            checksums_path,
            summary,
        })
    }

    fn build_package(
        &self,
        assembler: &PackageAssembler<'_>,
        name: &PackageName,
        out: &mut dyn Write,
    ) -> Result<BuiltPackage> {
        let label = name.platform().label();
        self.status(out, format!("Building {label} package..."))?;

        let staged = assembler.assemble(name)?;
        let archive_path = self
            .config
            .output_dir
            .as_std_path()
            .join(name.archive_filename());
        let archive_error = |source: ArchiveError| PackagerError::Archive {
            path: archive_path.clone(),
            source,
        };
        let entries = create_archive(name.format(), &staged.staging_dir, &archive_path)
            .map_err(archive_error)?;
        verify_archive(name.format(), &archive_path, &entries).map_err(archive_error)?;

        let archive_size = fs::metadata(&archive_path)
            .map_err(|source| PackagerError::WriteFile {
                path: archive_path.clone(),
                source,
            })?
            .len();
        self.status(
            out,
            format!(
                "  Archive created: {} ({})",
                name.archive_filename(),
                format_size(archive_size)
            ),
        )?;
        self.status(out, format!("{label} package created"))?;

        Ok(BuiltPackage {
            staged,
            archive_path,
            archive_size,
            entries,
        })
    }

    /// Remove staging directories and archives left by earlier runs.
    ///
    /// Only entries named `<product>-*` are touched, and among files only
    /// archives.
    fn remove_previous_outputs(&self, output_dir: &Path) -> Result<usize> {
        let prefix = format!("{}-", self.config.product);
        let mut removed = 0;
        for entry in fs::read_dir(output_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(&prefix) {
                continue;
            }
            let path = entry.path();
            let outcome = if entry.file_type()?.is_dir() {
                fs::remove_dir_all(&path)
            } else if ArchiveFormat::from_file_name(&name).is_some() {
                fs::remove_file(&path)
            } else {
                continue;
            };
            outcome.map_err(|source| PackagerError::Cleanup { path, source })?;
            removed += 1;
        }
        Ok(removed)
    }

    fn status(&self, out: &mut dyn Write, message: impl std::fmt::Display) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(out, "{message}").map_err(|source| PackagerError::WriteFailed { source })
    }
}

/// Create the output directory and check it accepts new files.
fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    create_dir(output_dir)?;
    let probe = output_dir.join(WRITE_PROBE);
    match fs::write(&probe, b"probe") {
        Ok(()) => {
            if let Err(err) = fs::remove_file(&probe) {
                warn!("could not remove write check file {}: {err}", probe.display());
            }
            Ok(())
        }
        Err(err) => Err(PackagerError::OutputNotWritable {
            path: output_dir.to_path_buf(),
            reason: err.to_string(),
        }),
    }
}

fn checksum_archives(packages: &[BuiltPackage]) -> Result<Vec<(String, Sha256Digest)>> {
    packages
        .iter()
        .map(|package| {
            let digest = compute_sha256(&package.archive_path).map_err(|source| {
                PackagerError::Archive {
                    path: package.archive_path.clone(),
                    source: source.into(),
                }
            })?;
            Ok((package.staged.name.archive_filename(), digest))
        })
        .collect()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
