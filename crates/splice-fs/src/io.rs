//! Atomic I/O operations with file locking

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
/// An advisory lock is held on the temp file while it is written. An existing
/// file's permissions carry over, and the temp file is removed on failure.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let replaced = fill_and_replace(&mut temp_file, &temp_path, path, content);
    if replaced.is_err() {
        drop(temp_file);
        let _ = fs::remove_file(&temp_path);
    }
    replaced
}

/// Write, flush and rename the locked temp file over `path`, keeping the
/// permissions of the file it replaces.
fn fill_and_replace(
    temp_file: &mut File,
    temp_path: &Path,
    path: &Path,
    content: &[u8],
) -> Result<()> {
    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    if let Some(existing) = fs::metadata(path).ok().filter(|m| m.is_file()) {
        temp_file
            .set_permissions(existing.permissions())
            .map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(temp_path, path).map_err(|e| Error::io(path, e))
}

/// Read a native file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write `content` only when `changed` is true.
///
/// Returns whether a write happened. Skipping unchanged files keeps their
/// modification time stable, so build tools watching them do not rerun.
pub fn write_if_changed(path: &Path, content: &str, changed: bool) -> Result<bool> {
    if !changed {
        tracing::debug!(path = %path.display(), "Unchanged, skipping write");
        return Ok(false);
    }
    tracing::debug!(path = %path.display(), bytes = content.len(), "Writing file");
    write_atomic(path, content.as_bytes())?;
    Ok(true)
}
