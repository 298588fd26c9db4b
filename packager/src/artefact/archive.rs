//! Archive creation for staged packages.
//!
//! Wraps a finished staging directory into a single compressed file. Entry
//! names are relative to the staging directory's parent, so extracting an
//! archive reproduces a top-level folder named after the package.

use super::archive_error::ArchiveError;
use super::naming::ArchiveFormat;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Kind of entry collected from a staging tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
}

/// A staged filesystem entry paired with its archive name.
#[derive(Debug)]
struct StagedEntry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
    mode: Option<u32>,
}

/// Create an archive of `source_dir` at `archive_path` in the given format.
///
/// Returns the names of the regular files written, in archive order.
///
/// # Errors
///
/// Returns [`ArchiveError`] if the staging tree cannot be read or the
/// archive cannot be written.
pub fn create_archive(
    format: ArchiveFormat,
    source_dir: &Path,
    archive_path: &Path,
) -> Result<Vec<String>, ArchiveError> {
    let entries = collect_entries(source_dir)?;
    debug!(
        "archiving {} entries from {} into {}",
        entries.len(),
        source_dir.display(),
        archive_path.display()
    );
    match format {
        ArchiveFormat::Zip => write_zip(&entries, archive_path)?,
        ArchiveFormat::TarGz => write_tar_gz(&entries, archive_path)?,
    }
    Ok(file_names(&entries))
}

/// List the regular-file entries of an archive, in archive order.
///
/// Directory entries are omitted. Names use `/` separators.
///
/// # Errors
///
/// Returns [`ArchiveError`] if the archive cannot be opened or decoded.
pub fn list_archive_entries(
    format: ArchiveFormat,
    archive_path: &Path,
) -> Result<Vec<String>, ArchiveError> {
    let file = fs::File::open(archive_path)?;
    match format {
        ArchiveFormat::Zip => {
            let mut archive = zip::ZipArchive::new(file)?;
            let mut names = Vec::with_capacity(archive.len());
            for index in 0..archive.len() {
                let entry = archive.by_index(index)?;
                if !entry.is_dir() {
                    names.push(entry.name().to_owned());
                }
            }
            Ok(names)
        }
        ArchiveFormat::TarGz => {
            let mut archive = tar::Archive::new(GzDecoder::new(file));
            let mut names = Vec::new();
            for entry in archive.entries()? {
                let entry = entry?;
                if entry.header().entry_type().is_file() {
                    names.push(entry.path()?.to_string_lossy().replace('\\', "/"));
                }
            }
            Ok(names)
        }
    }
}

/// Check that `archive_path` lists exactly `expected` files.
///
/// # Errors
///
/// Returns [`ArchiveError::ContentMismatch`] naming the first missing or
/// unexpected entry, or any error from [`list_archive_entries`].
pub fn verify_archive(
    format: ArchiveFormat,
    archive_path: &Path,
    expected: &[String],
) -> Result<(), ArchiveError> {
    let mut actual = list_archive_entries(format, archive_path)?;
    let mut wanted = expected.to_vec();
    actual.sort();
    wanted.sort();

    let mismatch = |detail: String| ArchiveError::ContentMismatch {
        archive: archive_path.to_path_buf(),
        detail,
    };
    if let Some(missing) = wanted.iter().find(|name| actual.binary_search(name).is_err()) {
        return Err(mismatch(format!("missing entry {missing}")));
    }
    if let Some(extra) = actual.iter().find(|name| wanted.binary_search(name).is_err()) {
        return Err(mismatch(format!("unexpected entry {extra}")));
    }
    if actual.len() != wanted.len() {
        return Err(mismatch(format!(
            "expected {} entries, found {}",
            wanted.len(),
            actual.len()
        )));
    }
    Ok(())
}

/// Walk `source_dir` in sorted order, pairing each entry with its name.
fn collect_entries(source_dir: &Path) -> Result<Vec<StagedEntry>, ArchiveError> {
    let root_name = source_dir
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ArchiveError::InvalidEntryPath {
            path: source_dir.to_path_buf(),
        })?;

    let mut entries = Vec::new();
    for entry in WalkDir::new(source_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            continue;
        };
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|_| ArchiveError::InvalidEntryPath {
                path: entry.path().to_path_buf(),
            })?;
        let name = entry_name(root_name, relative)?;
        entries.push(StagedEntry {
            path: entry.path().to_path_buf(),
            name,
            kind,
            mode: unix_mode(entry.path()),
        });
    }
    Ok(entries)
}

/// Join `root` and the components of `relative` with `/`.
fn entry_name(root: &str, relative: &Path) -> Result<String, ArchiveError> {
    let mut name = root.to_owned();
    for component in relative.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| ArchiveError::InvalidEntryPath {
                path: relative.to_path_buf(),
            })?;
        name.push('/');
        name.push_str(part);
    }
    Ok(name)
}

fn file_names(entries: &[StagedEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.kind == EntryKind::File)
        .map(|entry| entry.name.clone())
        .collect()
}

fn write_zip(entries: &[StagedEntry], archive_path: &Path) -> Result<(), ArchiveError> {
    let output = fs::File::create(archive_path)?;
    let mut writer = zip::ZipWriter::new(output);
    let base = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        let options = match entry.mode {
            Some(mode) => base.unix_permissions(mode),
            None => base,
        };
        match entry.kind {
            EntryKind::Directory => writer.add_directory(format!("{}/", entry.name), options)?,
            EntryKind::File => {
                writer.start_file(entry.name.as_str(), options)?;
                let mut source = fs::File::open(&entry.path)?;
                io::copy(&mut source, &mut writer)?;
            }
        }
    }

    writer.finish()?;
    Ok(())
}

fn write_tar_gz(entries: &[StagedEntry], archive_path: &Path) -> Result<(), ArchiveError> {
    let output = fs::File::create(archive_path)?;
    let encoder = GzEncoder::new(output, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for entry in entries {
        builder.append_path_with_name(&entry.path, &entry.name)?;
    }

    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(())
}

#[cfg(unix)]
fn unix_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .ok()
        .map(|metadata| metadata.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn unix_mode(_path: &Path) -> Option<u32> {
    None
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
