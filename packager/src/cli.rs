//! CLI argument definitions for the PageForge packager.
//!
//! Every flag is optional; running with none builds all four packages for
//! the current directory into `./packages`.

use crate::config::ConfigOverrides;
use camino::Utf8PathBuf;
use clap::Parser;
use log::LevelFilter;

/// Build the PageForge distribution packages.
#[derive(Parser, Debug, Default)]
#[command(name = "pageforge-packager")]
#[command(version, about)]
#[command(long_about = concat!(
    "Build the PageForge distribution packages.\n\n",
    "Produces one archive per deployment target (cPanel, Windows, Linux/macOS ",
    "and VS Code) from the project sources, together with a distribution guide ",
    "and a SHA256SUMS listing.",
))]
#[command(after_help = concat!(
    "PACKAGES:\n",
    "  cpanel    Shared hosting, production files only (.zip)\n",
    "  windows   Local install with batch scripts (.zip)\n",
    "  linux     Local install with shell scripts (.tar.gz)\n",
    "  vscode    Development checkout with editor configuration (.zip)\n\n",
    "CONFIGURATION:\n",
    "  packager.toml in the project root may set product, version, output_dir\n",
    "  and extra exclude patterns. Flags override the file.\n\n",
    "EXAMPLES:\n",
    "  Build every package from the current directory:\n",
    "    $ pageforge-packager\n\n",
    "  Build from another checkout into a separate folder:\n",
    "    $ pageforge-packager --project-root ../pageforge --output-dir /tmp/release\n",
))]
pub struct Cli {
    /// Project to package [default: current directory].
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<Utf8PathBuf>,

    /// Directory for staging trees and archives [default: <project>/packages].
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Configuration file [default: <project>/packager.toml when present].
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Suppress progress output (errors still shown).
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

impl Cli {
    /// Return the configuration overrides carried by the flags.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            project_root: self.project_root.clone(),
            output_dir: self.output_dir.clone(),
            config_file: self.config.clone(),
        }
    }

    /// Return the default log level implied by `-v` and `-q`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clap::Parser;
    /// use log::LevelFilter;
    /// use pageforge_packager::cli::Cli;
    ///
    /// assert_eq!(Cli::parse_from(["pageforge-packager"]).log_level(), LevelFilter::Warn);
    /// assert_eq!(Cli::parse_from(["pageforge-packager", "-vv"]).log_level(), LevelFilter::Debug);
    /// ```
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
