//! Tests for packager CLI parsing.

use super::*;
use rstest::rstest;

#[test]
fn cli_parses_defaults() {
    let cli = Cli::parse_from(["pageforge-packager"]);
    assert!(cli.project_root.is_none());
    assert!(cli.output_dir.is_none());
    assert!(cli.config.is_none());
    assert_eq!(cli.verbosity, 0);
    assert!(!cli.quiet);
    assert_eq!(cli.overrides(), ConfigOverrides::default());
}

#[test]
fn cli_parses_paths() {
    let cli = Cli::parse_from([
        "pageforge-packager",
        "--project-root",
        "/srv/pageforge",
        "-o",
        "/tmp/release",
        "--config",
        "/etc/packager.toml",
    ]);
    let overrides = cli.overrides();
    assert_eq!(
        overrides.project_root,
        Some(Utf8PathBuf::from("/srv/pageforge"))
    );
    assert_eq!(overrides.output_dir, Some(Utf8PathBuf::from("/tmp/release")));
    assert_eq!(
        overrides.config_file,
        Some(Utf8PathBuf::from("/etc/packager.toml"))
    );
}

#[rstest]
#[case::none(&["pageforge-packager"], LevelFilter::Warn)]
#[case::one(&["pageforge-packager", "-v"], LevelFilter::Info)]
#[case::two(&["pageforge-packager", "-vv"], LevelFilter::Debug)]
#[case::three(&["pageforge-packager", "-vvv"], LevelFilter::Trace)]
#[case::many(&["pageforge-packager", "-vvvvv"], LevelFilter::Trace)]
#[case::quiet(&["pageforge-packager", "--quiet"], LevelFilter::Error)]
fn verbosity_maps_to_log_level(#[case] args: &[&str], #[case] expected: LevelFilter) {
    assert_eq!(Cli::parse_from(args).log_level(), expected);
}

#[test]
fn quiet_conflicts_with_verbose() {
    let result = Cli::try_parse_from(["pageforge-packager", "-q", "-v"]);
    assert!(result.is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
