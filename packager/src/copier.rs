//! Filtered copy of project files into a staging directory.

use crate::error::{PackagerError, Result};
use crate::filter::ExclusionList;
use log::{debug, trace};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Counters describing one filtered copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Regular files copied.
    pub files: usize,
    /// Directories created.
    pub directories: usize,
    /// Bytes copied.
    pub bytes: u64,
}

impl CopyStats {
    /// Add the counters of `other` to these.
    pub fn absorb(&mut self, other: Self) {
        self.files += other.files;
        self.directories += other.directories;
        self.bytes += other.bytes;
    }
}

/// Copy the tree at `src` to `dst`, skipping excluded entries.
///
/// Each entry name is checked against `exclusions`; an excluded directory
/// is skipped with its whole subtree. Symbolic links are followed, so the
/// destination holds plain copies. `dst` is replaced if it already exists.
///
/// # Errors
///
/// Returns an error if `src` cannot be read or any entry cannot be copied.
///
/// # Examples
///
/// ```no_run
/// use pageforge_packager::copier::copy_filtered;
/// use pageforge_packager::filter::ExclusionList;
/// use std::path::Path;
///
/// let stats = copy_filtered(
///     Path::new("client"),
///     Path::new("packages/stage/client"),
///     &ExclusionList::default(),
/// )?;
/// println!("copied {} files", stats.files);
/// # Ok::<(), pageforge_packager::error::PackagerError>(())
/// ```
pub fn copy_filtered(src: &Path, dst: &Path, exclusions: &ExclusionList) -> Result<CopyStats> {
    if dst.exists() {
        fs::remove_dir_all(dst).map_err(|source| PackagerError::Cleanup {
            path: dst.to_path_buf(),
            source,
        })?;
    }

    let mut stats = CopyStats::default();
    let walker = WalkDir::new(src)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !exclusions.matches(&entry.file_name().to_string_lossy())
        });

    for entry in walker {
        let entry = entry.map_err(|source| PackagerError::Walk {
            root: src.to_path_buf(),
            source,
        })?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&target)?;
            stats.directories += 1;
        } else if entry.file_type().is_file() {
            stats.absorb(copy_file(entry.path(), &target)?);
        } else {
            trace!("skipping special file {}", entry.path().display());
        }
    }

    debug!(
        "copied {} files ({} bytes) from {} to {}",
        stats.files,
        stats.bytes,
        src.display(),
        dst.display()
    );
    Ok(stats)
}

/// Copy a single file, creating the destination's parent directory.
///
/// # Errors
///
/// Returns [`PackagerError::Copy`] if the copy fails.
pub fn copy_file(from: &Path, to: &Path) -> Result<CopyStats> {
    if let Some(parent) = to.parent() {
        create_dir(parent)?;
    }
    let bytes = fs::copy(from, to).map_err(|source| PackagerError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    Ok(CopyStats {
        files: 1,
        directories: 0,
        bytes,
    })
}

/// Copy `from` to `to` when `from` is a regular file; otherwise do nothing.
///
/// Returns whether a copy happened.
///
/// # Errors
///
/// Returns [`PackagerError::Copy`] if the file exists but cannot be copied.
pub fn copy_optional_file(from: &Path, to: &Path) -> Result<bool> {
    if !from.is_file() {
        debug!("optional input {} not present", from.display());
        return Ok(false);
    }
    copy_file(from, to)?;
    Ok(true)
}

/// Copy the tree at `from` through the filter when it is a directory.
///
/// Returns `None` when the directory is absent.
///
/// # Errors
///
/// Returns any error from [`copy_filtered`].
pub fn copy_optional_dir(
    from: &Path,
    to: &Path,
    exclusions: &ExclusionList,
) -> Result<Option<CopyStats>> {
    if !from.is_dir() {
        debug!("optional folder {} not present", from.display());
        return Ok(None);
    }
    copy_filtered(from, to, exclusions).map(Some)
}

/// Create `path` and its parents.
///
/// # Errors
///
/// Returns [`PackagerError::CreateDirectory`] on failure.
pub fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| PackagerError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn project() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path().join("client");
        fs::create_dir_all(root.join("src/components")).expect("mkdir");
        fs::create_dir_all(root.join("node_modules/react")).expect("mkdir");
        fs::write(root.join("src/main.tsx"), b"render(<App />)").expect("write");
        fs::write(root.join("src/components/button.tsx"), b"export {}").expect("write");
        fs::write(root.join("node_modules/react/index.js"), b"module").expect("write");
        fs::write(root.join("debug.log"), b"noise").expect("write");
        fs::write(root.join(".env"), b"SECRET=1").expect("write");
        fs::write(root.join(".env.example"), b"PORT=3000").expect("write");
        dir
    }

    #[rstest]
    fn excluded_entries_are_not_copied(project: TempDir) {
        let src = project.path().join("client");
        let dst = project.path().join("out/client");
        copy_filtered(&src, &dst, &ExclusionList::default()).expect("copy");

        assert!(!dst.join("node_modules").exists());
        assert!(!dst.join("debug.log").exists());
        assert!(!dst.join(".env").exists());
        assert!(dst.join(".env.example").is_file());
    }

    #[rstest]
    fn kept_files_are_byte_identical(project: TempDir) {
        let src = project.path().join("client");
        let dst = project.path().join("out/client");
        let stats = copy_filtered(&src, &dst, &ExclusionList::default()).expect("copy");

        for relative in ["src/main.tsx", "src/components/button.tsx", ".env.example"] {
            assert_eq!(
                fs::read(src.join(relative)).expect("read src"),
                fs::read(dst.join(relative)).expect("read dst"),
                "{relative} differs"
            );
        }
        assert_eq!(stats.files, 3);
        assert_eq!(stats.directories, 3);
    }

    #[rstest]
    fn existing_destination_is_replaced(project: TempDir) {
        let src = project.path().join("client");
        let dst = project.path().join("out/client");
        fs::create_dir_all(&dst).expect("mkdir");
        fs::write(dst.join("stale.txt"), b"old").expect("write");

        copy_filtered(&src, &dst, &ExclusionList::default()).expect("copy");
        assert!(!dst.join("stale.txt").exists());
    }

    #[rstest]
    fn missing_source_is_fatal(project: TempDir) {
        let result = copy_filtered(
            &project.path().join("absent"),
            &project.path().join("out"),
            &ExclusionList::default(),
        );
        assert!(matches!(result, Err(PackagerError::Walk { .. })));
    }

    #[rstest]
    fn optional_inputs_are_skipped_when_absent(project: TempDir) {
        let out = project.path().join("out");
        let missing_file = project.path().join("nope.json");
        assert!(!copy_optional_file(&missing_file, &out.join("x")).expect("ok"));
        assert!(
            copy_optional_dir(
                &project.path().join("docs"),
                &out.join("docs"),
                &ExclusionList::default()
            )
            .expect("ok")
            .is_none()
        );
        assert!(!out.exists());
    }
}
