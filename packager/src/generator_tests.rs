//! Unit tests for the run orchestrator.

use super::*;
use crate::artefact::archive::list_archive_entries;
use crate::artefact::generated_at::GeneratedAt;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct Project {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Project {
    fn generator(&self) -> Generator {
        Generator::new(
            PackagerConfig::for_project(self.root.clone())
                .with_generated_at(GeneratedAt::new("2025-01-31 12:00:00")),
        )
    }

    fn output(&self) -> PathBuf {
        self.root.join("packages").into_std_path_buf()
    }
}

#[fixture]
fn project() -> Project {
    let dir = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir");
    fs::create_dir_all(root.join("client/src")).expect("mkdir");
    fs::create_dir_all(root.join("server")).expect("mkdir");
    fs::write(root.join("package.json"), b"{}").expect("write");
    fs::write(root.join("client/src/App.tsx"), b"app").expect("write");
    fs::write(root.join("server/index.ts"), b"server").expect("write");
    Project { _dir: dir, root }
}

#[rstest]
fn run_produces_one_archive_per_platform(project: Project) {
    let mut out = Vec::new();
    let report = project.generator().run(&mut out).expect("run");

    let names: Vec<_> = report.summary.archives().iter().map(|a| a.name.clone()).collect();
    assert_eq!(
        names,
        [
            "pageforge-cpanel-v2.0.0.zip",
            "pageforge-linux-v2.0.0.tar.gz",
            "pageforge-vscode-v2.0.0.zip",
            "pageforge-windows-v2.0.0.zip",
        ]
    );
    assert_eq!(report.packages.len(), 4);
    assert!(report.guide_path.is_file());
    assert!(report.checksums_path.is_file());
}

#[rstest]
fn status_lines_follow_build_order(project: Project) {
    let mut out = Vec::new();
    project.generator().run(&mut out).expect("run");
    let text = String::from_utf8(out).expect("utf-8");

    let positions: Vec<_> = ["cPanel", "Windows", "Linux/macOS", "VS Code"]
        .iter()
        .map(|label| {
            text.find(&format!("Building {label} package..."))
                .unwrap_or_else(|| panic!("no build line for {label}"))
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair.first() < pair.last()));
    assert!(text.contains("Archive created: pageforge-linux-v2.0.0.tar.gz ("));
    assert!(text.contains("VS Code package created"));
    assert!(text.contains("Total size: "));
}

#[rstest]
fn quiet_run_writes_nothing(project: Project) {
    let mut out = Vec::new();
    project.generator().quiet(true).run(&mut out).expect("run");
    assert!(out.is_empty());
}

#[rstest]
fn checksums_cover_every_archive(project: Project) {
    let report = project.generator().run(&mut Vec::new()).expect("run");
    let listing = fs::read_to_string(&report.checksums_path).expect("read");
    assert_eq!(listing.lines().count(), 4);
    for package in &report.packages {
        let digest = compute_sha256(&package.archive_path).expect("digest");
        let file_name = package.staged.name.archive_filename();
        assert!(listing.contains(&format!("{digest}  {file_name}")));
    }
}

#[rstest]
fn previous_outputs_are_removed_but_unrelated_files_kept(project: Project) {
    let output = project.output();
    fs::create_dir_all(output.join("pageforge-old-v1.0.0")).expect("mkdir");
    fs::write(output.join("pageforge-old-v1.0.0.zip"), b"old").expect("write");
    fs::write(output.join("pageforge-old-v1.0.0.tar.gz"), b"old").expect("write");
    fs::write(output.join("pageforge-notes.txt"), b"keep").expect("write");
    fs::write(output.join("other.zip"), b"keep").expect("write");

    project.generator().run(&mut Vec::new()).expect("run");

    assert!(!output.join("pageforge-old-v1.0.0").exists());
    assert!(!output.join("pageforge-old-v1.0.0.zip").exists());
    assert!(!output.join("pageforge-old-v1.0.0.tar.gz").exists());
    assert!(output.join("pageforge-notes.txt").is_file());
    assert!(output.join("other.zip").is_file());
}

#[rstest]
fn repeated_runs_list_identical_entries(project: Project) {
    let first = project.generator().run(&mut Vec::new()).expect("first run");
    let first_entries: Vec<_> = first
        .packages
        .iter()
        .map(|p| list_archive_entries(p.staged.name.format(), &p.archive_path).expect("list"))
        .collect();

    let second = project.generator().run(&mut Vec::new()).expect("second run");
    let second_entries: Vec<_> = second
        .packages
        .iter()
        .map(|p| list_archive_entries(p.staged.name.format(), &p.archive_path).expect("list"))
        .collect();

    assert_eq!(first_entries, second_entries);
}

#[rstest]
fn output_path_blocked_by_a_file_fails(project: Project) {
    let blocker = project.root.join("blocked");
    fs::write(&blocker, b"not a directory").expect("write");
    let mut config = PackagerConfig::for_project(project.root.clone());
    config.output_dir = blocker.join("packages");

    let result = Generator::new(config).run(&mut Vec::new());

    assert!(matches!(result, Err(PackagerError::CreateDirectory { .. })));
    assert!(!blocker.join("packages").exists());
}

#[rstest]
fn write_check_file_does_not_survive_the_run(project: Project) {
    project.generator().run(&mut Vec::new()).expect("run");
    assert!(!project.output().join(WRITE_PROBE).exists());
}

#[cfg(unix)]
#[rstest]
fn read_only_output_dir_fails_before_building(project: Project) {
    use std::os::unix::fs::PermissionsExt;

    let output = project.output();
    fs::create_dir_all(&output).expect("mkdir");
    fs::set_permissions(&output, fs::Permissions::from_mode(0o555)).expect("chmod");
    // Root and some filesystems ignore directory modes.
    let check = output.join("write-check");
    let permissions_ignored = fs::write(&check, b"x").is_ok();

    let result = project.generator().run(&mut Vec::new());
    let archive_written = output.join("pageforge-cpanel-v2.0.0.zip").exists();
    fs::set_permissions(&output, fs::Permissions::from_mode(0o755)).expect("chmod");

    if permissions_ignored {
        return;
    }
    assert!(
        matches!(result, Err(PackagerError::OutputNotWritable { .. })),
        "expected OutputNotWritable, got {result:?}"
    );
    assert!(!archive_written);
}

#[test]
fn package_names_cover_every_platform() {
    let generator = Generator::new(PackagerConfig::for_project("/srv/site"));
    let names: Vec<_> = generator
        .package_names()
        .iter()
        .map(PackageName::archive_filename)
        .collect();
    assert_eq!(
        names,
        [
            "pageforge-cpanel-v2.0.0.zip",
            "pageforge-windows-v2.0.0.zip",
            "pageforge-linux-v2.0.0.tar.gz",
            "pageforge-vscode-v2.0.0.zip",
        ]
    );
}
