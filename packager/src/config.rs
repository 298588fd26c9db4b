//! Run configuration.
//!
//! Settings are layered. Built-in defaults come first, then an optional
//! `packager.toml` in the project root (or the file named with `--config`),
//! then command-line flags. Relative paths in the TOML file are resolved
//! against the project root.

use crate::artefact::generated_at::GeneratedAt;
use crate::artefact::product::ProductName;
use crate::artefact::version::ReleaseVersion;
use crate::error::{PackagerError, Result};
use crate::filter::ExclusionList;
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::Deserialize;
use std::fs;

/// Name of the optional configuration file in the project root.
pub const CONFIG_FILENAME: &str = "packager.toml";

/// Default output folder, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "packages";

/// Settings read from `packager.toml`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Product name used in package names.
    pub product: Option<ProductName>,
    /// Release version used in package names.
    pub version: Option<ReleaseVersion>,
    /// Output directory, relative to the project root when not absolute.
    pub output_dir: Option<Utf8PathBuf>,
    /// Exclusion patterns added to the built-in list.
    pub exclude: Vec<String>,
}

impl FileConfig {
    /// Parse TOML text; `path` is used in error messages only.
    ///
    /// # Errors
    ///
    /// Returns [`PackagerError::Config`] when the text is not valid
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use pageforge_packager::config::FileConfig;
    ///
    /// let config = FileConfig::parse(
    ///     "version = \"2.1.0\"\nexclude = [\"*.bak\"]\n",
    ///     Utf8Path::new("packager.toml"),
    /// )?;
    /// assert_eq!(config.version.map(|v| v.to_string()), Some("2.1.0".to_owned()));
    /// assert_eq!(config.exclude, ["*.bak"]);
    /// # Ok::<(), pageforge_packager::error::PackagerError>(())
    /// ```
    pub fn parse(source: &str, path: &Utf8Path) -> Result<Self> {
        toml::from_str(source).map_err(|err| PackagerError::Config {
            path: path.as_std_path().to_path_buf(),
            reason: err.message().to_owned(),
        })
    }

    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PackagerError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|err| PackagerError::Config {
            path: path.as_std_path().to_path_buf(),
            reason: err.to_string(),
        })?;
        Self::parse(&source, path)
    }

    /// Load `explicit` when given, else `packager.toml` in `project_root`
    /// when present, else the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PackagerError::Config`] if an explicit file is missing or any
    /// file that is read does not parse.
    pub fn discover(project_root: &Utf8Path, explicit: Option<&Utf8Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("loading configuration from {path}");
            return Self::load(path);
        }
        let implicit = project_root.join(CONFIG_FILENAME);
        if implicit.is_file() {
            debug!("loading configuration from {implicit}");
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConfigOverrides {
    /// Project root; the working directory when absent.
    pub project_root: Option<Utf8PathBuf>,
    /// Output directory.
    pub output_dir: Option<Utf8PathBuf>,
    /// Explicit configuration file.
    pub config_file: Option<Utf8PathBuf>,
}

/// Fully resolved settings for one run.
#[derive(Clone, Debug)]
pub struct PackagerConfig {
    /// Project whose files are packaged.
    pub project_root: Utf8PathBuf,
    /// Where staging directories and archives are written.
    pub output_dir: Utf8PathBuf,
    /// Product name used in package names.
    pub product: ProductName,
    /// Release version used in package names.
    pub version: ReleaseVersion,
    /// Names skipped while copying project folders.
    pub exclusions: ExclusionList,
    /// Timestamp written into generated documents.
    pub generated_at: GeneratedAt,
}

impl PackagerConfig {
    /// Defaults for `project_root`: product `pageforge`, version `2.0.0`,
    /// output `<project_root>/packages`, and the built-in exclusions.
    #[must_use]
    pub fn for_project(project_root: impl Into<Utf8PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            output_dir: project_root.join(DEFAULT_OUTPUT_DIR),
            project_root,
            product: ProductName::default(),
            version: ReleaseVersion::default(),
            exclusions: ExclusionList::default(),
            generated_at: GeneratedAt::now(),
        }
    }

    /// Layer the configuration file and `overrides` over the defaults.
    ///
    /// `cwd` is the project root when `overrides` names none.
    ///
    /// # Errors
    ///
    /// Returns [`PackagerError::Config`] when a configuration file cannot be
    /// loaded.
    pub fn resolve(overrides: &ConfigOverrides, cwd: &Utf8Path) -> Result<Self> {
        let project_root = overrides
            .project_root
            .clone()
            .unwrap_or_else(|| cwd.to_path_buf());
        let file = FileConfig::discover(&project_root, overrides.config_file.as_deref())?;
        let mut config = Self::for_project(project_root);
        config.apply_file(file);
        if let Some(output_dir) = &overrides.output_dir {
            config.output_dir.clone_from(output_dir);
        }
        debug!(
            "resolved configuration: root {}, output {}, {} exclusion patterns",
            config.project_root,
            config.output_dir,
            config.exclusions.patterns().len()
        );
        Ok(config)
    }

    /// Apply the values present in `file`.
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(product) = file.product {
            self.product = product;
        }
        if let Some(version) = file.version {
            self.version = version;
        }
        if let Some(output_dir) = file.output_dir {
            self.output_dir = self.project_root.join(output_dir);
        }
        if !file.exclude.is_empty() {
            self.exclusions = self.exclusions.clone().with_extra(file.exclude);
        }
    }

    /// Pin the generation timestamp.
    #[must_use]
    pub fn with_generated_at(mut self, generated_at: GeneratedAt) -> Self {
        self.generated_at = generated_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir")
    }

    #[rstest]
    fn defaults_reproduce_the_fixed_layout() {
        let config = PackagerConfig::for_project("/srv/pageforge");
        assert_eq!(config.output_dir, Utf8PathBuf::from("/srv/pageforge/packages"));
        assert_eq!(config.product.as_str(), "pageforge");
        assert_eq!(config.version.as_str(), "2.0.0");
        assert!(config.exclusions.matches("node_modules"));
    }

    #[rstest]
    fn rejects_unknown_fields() {
        let outcome = FileConfig::parse("colour = \"blue\"\n", Utf8Path::new("packager.toml"));
        assert!(matches!(outcome, Err(PackagerError::Config { .. })));
    }

    #[rstest]
    fn rejects_invalid_version() {
        let outcome = FileConfig::parse("version = \"two\"\n", Utf8Path::new("packager.toml"));
        assert!(outcome.is_err());
    }

    #[rstest]
    fn file_values_are_applied_relative_to_root() {
        let dir = TempDir::new().expect("temp dir");
        let root = utf8_root(&dir);
        fs::write(
            root.join(CONFIG_FILENAME),
            "product = \"sitebuilder\"\noutput_dir = \"dist-out\"\nexclude = [\"*.bak\"]\n",
        )
        .expect("write");

        let config = PackagerConfig::resolve(
            &ConfigOverrides {
                project_root: Some(root.clone()),
                ..ConfigOverrides::default()
            },
            Utf8Path::new("/elsewhere"),
        )
        .expect("resolve");

        assert_eq!(config.product.as_str(), "sitebuilder");
        assert_eq!(config.output_dir, root.join("dist-out"));
        assert!(config.exclusions.matches("old.bak"));
        assert!(config.exclusions.matches(".git"));
    }

    #[rstest]
    fn cli_output_dir_wins_over_file() {
        let dir = TempDir::new().expect("temp dir");
        let root = utf8_root(&dir);
        fs::write(root.join(CONFIG_FILENAME), "output_dir = \"from-file\"\n").expect("write");

        let config = PackagerConfig::resolve(
            &ConfigOverrides {
                output_dir: Some(Utf8PathBuf::from("/tmp/from-cli")),
                ..ConfigOverrides::default()
            },
            &root,
        )
        .expect("resolve");

        assert_eq!(config.project_root, root);
        assert_eq!(config.output_dir, Utf8PathBuf::from("/tmp/from-cli"));
    }

    #[rstest]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().expect("temp dir");
        let root = utf8_root(&dir);
        let outcome = PackagerConfig::resolve(
            &ConfigOverrides {
                config_file: Some(root.join("missing.toml")),
                ..ConfigOverrides::default()
            },
            &root,
        );
        assert!(matches!(outcome, Err(PackagerError::Config { .. })));
    }

    #[rstest]
    fn absent_implicit_config_uses_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let root = utf8_root(&dir);
        let config = PackagerConfig::resolve(&ConfigOverrides::default(), &root).expect("resolve");
        assert_eq!(config.output_dir, root.join(DEFAULT_OUTPUT_DIR));
    }
}
