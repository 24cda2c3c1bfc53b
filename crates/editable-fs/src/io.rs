//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::{Error, Result};

/// Read a file as UTF-8 text.
///
/// Decoding failures surface as [`Error::Io`] with kind `InvalidData`.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Path of the sibling temp file used while replacing `path`.
///
/// The pattern is `.{file_name}.{pid}.tmp` in the same directory, so the
/// final rename never crosses a filesystem boundary.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a concurrent reader sees either the old
/// or the new content. When `path` already exists its permissions are copied
/// onto the replacement. On failure the temp file is removed and the original
/// is left untouched.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path);

    let result = write_and_replace(path, &temp_path, content);
    if result.is_err() && temp_path.exists() {
        debug!(temp = %temp_path.display(), "Removing abandoned temp file");
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_replace(path: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(path, e)),
    };

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    FileExt::lock_exclusive(&temp_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    drop(temp_file);

    fs::rename(temp_path, path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "Atomic write committed");

    Ok(())
}
