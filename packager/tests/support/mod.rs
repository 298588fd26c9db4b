//! Shared fixtures for packager behaviour tests.

use camino::Utf8PathBuf;
use flate2::read::GzDecoder;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// A throwaway PageForge-shaped project.
pub struct SampleProject {
    dir: TempDir,
}

impl SampleProject {
    /// Create a project with sources, docs, installers, and build noise.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let project = Self { dir };
        project.write("package.json", "{\"name\":\"pageforge\"}");
        project.write("tsconfig.json", "{}");
        project.write("vite.config.ts", "export default {}");
        project.write("README.md", "# PageForge");
        project.write(".gitignore", "node_modules\n");
        project.write(".env", "SECRET=1");
        project.write("client/src/App.tsx", "export default App");
        project.write("client/src/components/Button.tsx", "export {}");
        project.write("client/public/favicon.svg", "<svg/>");
        project.write("client/node_modules/react/index.js", "module.exports = {}");
        project.write("client/debug.log", "noise");
        project.write("server/index.ts", "listen()");
        project.write("server/.git/HEAD", "ref: refs/heads/main");
        project.write("server/cache.pyc", "bytecode");
        project.write("shared/schema.ts", "export const schema = {}");
        project.write("shared/database.sqlite", "db");
        project.write("docs/guide.md", "# Guide");
        project.write("build-scripts/install-cpanel.php", "<?php // cpanel");
        project.write("build-scripts/install-local.php", "<?php // local");
        project
    }

    /// Return the project root.
    pub fn root(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().to_path_buf()).expect("utf-8 temp dir")
    }

    /// Return the default output directory.
    pub fn output(&self) -> PathBuf {
        self.dir.path().join("packages")
    }

    /// Write `content` to `relative`, creating parents.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(path, content).expect("write");
    }

    /// Remove a project folder.
    pub fn remove_dir(&self, relative: &str) {
        fs::remove_dir_all(self.dir.path().join(relative)).expect("remove dir");
    }
}

/// Map every file under `root` to its bytes, keyed by `/`-separated
/// relative path.
pub fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.expect("walk"))
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .expect("under root")
                .to_string_lossy()
                .replace('\\', "/");
            (relative, fs::read(entry.path()).expect("read"))
        })
        .collect()
}

/// Every entry name under `root`, files and directories.
pub fn entry_names(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.expect("walk").file_name().to_string_lossy().into_owned())
        .collect()
}

/// Extract a zip or tar.gz archive into `dest`.
pub fn extract(archive: &Path, dest: &Path) {
    fs::create_dir_all(dest).expect("mkdir");
    let file = fs::File::open(archive).expect("open archive");
    let name = archive.to_string_lossy();
    if name.ends_with(".zip") {
        zip::ZipArchive::new(file)
            .expect("read zip")
            .extract(dest)
            .expect("extract zip");
    } else {
        tar::Archive::new(GzDecoder::new(file))
            .unpack(dest)
            .expect("unpack tar.gz");
    }
}
