//! Writing generated files into a staging directory.

use crate::error::{PackagerError, Result};
use crate::templates::FileKind;
use std::fs;
use std::path::Path;

/// Write `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`PackagerError::CreateDirectory`] or [`PackagerError::WriteFile`]
/// when the file cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        crate::copier::create_dir(parent)?;
    }
    fs::write(path, content).map_err(|source| PackagerError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a generated file using the conventions of its kind.
///
/// Batch files get CRLF line endings. Shell scripts are made executable
/// on Unix.
///
/// # Errors
///
/// Returns an error when the file cannot be written or its permissions
/// cannot be set.
pub fn write_generated(path: &Path, content: &str, kind: FileKind) -> Result<()> {
    match kind {
        FileKind::Text => write_text(path, content),
        FileKind::BatchScript => write_text(path, &to_crlf(content)),
        FileKind::ShellScript => {
            write_text(path, content)?;
            make_executable(path)
        }
    }
}

/// Convert LF line endings to CRLF, leaving existing CRLF pairs intact.
#[must_use]
pub fn to_crlf(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\n', "\r\n")
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|source| PackagerError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?
        .permissions();
    // rwxr-xr-x
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).map_err(|source| PackagerError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
