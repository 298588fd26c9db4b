//! Which project files each tier ships.

use crate::copier::{CopyStats, copy_optional_dir, copy_optional_file, create_dir};
use crate::error::Result;
use crate::filter::ExclusionList;
use crate::platform::Tier;
use log::debug;
use std::path::Path;

/// Directories created in every staging tree, whether or not the project
/// has them.
pub const SKELETON_DIRS: &[&str] = &[
    "client",
    "client/src",
    "client/src/components",
    "client/src/pages",
    "client/src/lib",
    "client/public",
    "server",
    "shared",
    "docs",
    "config",
];

/// Root configuration files copied when present.
pub const CONFIG_FILES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "vite.config.ts",
    "tailwind.config.ts",
    "postcss.config.js",
    "drizzle.config.ts",
    "components.json",
];

/// Source folders copied through the exclusion filter when present.
pub const SOURCE_DIRS: &[&str] = &["client", "server", "shared"];

/// Project README and the name it takes inside local packages.
pub const PROJECT_README: (&str, &str) = ("README.md", "README-PROJECT.md");

/// VCS ignore rules shipped with development packages.
pub const GITIGNORE: &str = ".gitignore";

/// Documentation folder shipped with development packages.
pub const DOCS_DIR: &str = "docs";

/// Create the fixed directory skeleton under `staging_dir`.
///
/// # Errors
///
/// Returns an error if any directory cannot be created.
pub fn create_skeleton(staging_dir: &Path) -> Result<()> {
    SKELETON_DIRS
        .iter()
        .try_for_each(|dir| create_dir(&staging_dir.join(dir)))
}

/// Copy the project files that `tier` ships from `project_root` into
/// `staging_dir`.
///
/// Absent optional inputs are skipped; any failure on a present input is
/// fatal.
///
/// # Errors
///
/// Returns an error if a present file or folder cannot be copied.
pub fn copy_tier_files(
    project_root: &Path,
    staging_dir: &Path,
    tier: Tier,
    exclusions: &ExclusionList,
) -> Result<CopyStats> {
    let mut stats = CopyStats::default();

    for file in CONFIG_FILES {
        if copy_optional_file(&project_root.join(file), &staging_dir.join(file))? {
            stats.files += 1;
        }
    }
    for dir in SOURCE_DIRS {
        if let Some(copied) =
            copy_optional_dir(&project_root.join(dir), &staging_dir.join(dir), exclusions)?
        {
            stats.absorb(copied);
        }
    }

    if tier.includes(Tier::Local) {
        let (readme, renamed) = PROJECT_README;
        if copy_optional_file(&project_root.join(readme), &staging_dir.join(renamed))? {
            stats.files += 1;
        }
    }

    if tier.includes(Tier::Development) {
        if copy_optional_file(&project_root.join(GITIGNORE), &staging_dir.join(GITIGNORE))? {
            stats.files += 1;
        }
        if let Some(copied) = copy_optional_dir(
            &project_root.join(DOCS_DIR),
            &staging_dir.join(DOCS_DIR),
            exclusions,
        )? {
            stats.absorb(copied);
        }
    }

    debug!(
        "{tier} tier copied {} files into {}",
        stats.files,
        staging_dir.display()
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        project: std::path::PathBuf,
        staging: std::path::PathBuf,
    }

    #[fixture]
    fn fixture() -> Fixture {
        let dir = TempDir::new().expect("temp dir");
        let project = dir.path().join("project");
        let staging = dir.path().join("stage");
        fs::create_dir_all(project.join("client/src")).expect("mkdir");
        fs::create_dir_all(project.join("server")).expect("mkdir");
        fs::create_dir_all(project.join("docs")).expect("mkdir");
        fs::write(project.join("package.json"), b"{}").expect("write");
        fs::write(project.join("README.md"), b"# readme").expect("write");
        fs::write(project.join(".gitignore"), b"node_modules\n").expect("write");
        fs::write(project.join("client/src/App.tsx"), b"app").expect("write");
        fs::write(project.join("server/index.ts"), b"server").expect("write");
        fs::write(project.join("docs/guide.md"), b"guide").expect("write");
        fs::create_dir_all(&staging).expect("mkdir");
        Fixture {
            _dir: dir,
            project,
            staging,
        }
    }

    #[rstest]
    fn skeleton_is_created_even_without_sources(fixture: Fixture) {
        create_skeleton(&fixture.staging).expect("skeleton");
        for dir in SKELETON_DIRS {
            assert!(fixture.staging.join(dir).is_dir(), "{dir} missing");
        }
    }

    #[rstest]
    #[case::production(Tier::Production, false, false)]
    #[case::local(Tier::Local, true, false)]
    #[case::development(Tier::Development, true, true)]
    fn tiers_ship_cumulative_files(
        fixture: Fixture,
        #[case] tier: Tier,
        #[case] has_readme: bool,
        #[case] has_dev_files: bool,
    ) {
        copy_tier_files(&fixture.project, &fixture.staging, tier, &ExclusionList::default())
            .expect("copy");

        assert!(fixture.staging.join("package.json").is_file());
        assert!(fixture.staging.join("client/src/App.tsx").is_file());
        assert!(fixture.staging.join("server/index.ts").is_file());
        assert!(!fixture.staging.join("tsconfig.json").exists());
        assert_eq!(fixture.staging.join("README-PROJECT.md").is_file(), has_readme);
        assert!(!fixture.staging.join("README.md").exists());
        assert_eq!(fixture.staging.join(".gitignore").is_file(), has_dev_files);
        assert_eq!(fixture.staging.join("docs/guide.md").is_file(), has_dev_files);
    }

    #[rstest]
    fn missing_docs_is_not_an_error(fixture: Fixture) {
        fs::remove_dir_all(fixture.project.join("docs")).expect("rm docs");
        let result = copy_tier_files(
            &fixture.project,
            &fixture.staging,
            Tier::Development,
            &ExclusionList::default(),
        );
        assert!(result.is_ok());
    }
}
