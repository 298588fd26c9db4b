//! PageForge packager CLI entrypoint.
//!
//! Builds every distribution package for the project and prints a summary.
//! Errors are reported on stderr and the process exits with status 1.

use camino::Utf8PathBuf;
use clap::Parser;
use pageforge_packager::cli::Cli;
use pageforge_packager::config::PackagerConfig;
use pageforge_packager::error::{PackagerError, Result};
use pageforge_packager::generator::Generator;
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Install the log subscriber; `RUST_LOG` overrides the level chosen by flags.
///
/// Library code logs through the `log` facade, which the subscriber picks up.
fn init_logging(cli: &Cli) {
    let default_level = cli.log_level().as_str().to_ascii_lowercase();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let cwd = Utf8PathBuf::try_from(cwd)
        .map_err(|err| PackagerError::NonUtf8Path { path: err.into_path_buf() })?;
    let config = PackagerConfig::resolve(&cli.overrides(), &cwd)?;
    Generator::new(config).quiet(cli.quiet).run(out)?;
    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, format!("error: {}", error_chain(&err)));
            1
        }
    }
}

/// Render an error followed by its sources, separated by `: `.
fn error_chain(err: &PackagerError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}
