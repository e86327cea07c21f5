//! Text I/O with atomic writes and lossy reads

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe partial content.
/// Parent directories are created as needed.
pub fn write_atomic(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let native_path = path.as_ref();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory as the target keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })?;

    fs::rename(&temp_path, native_path).map_err(|e| Error::io(native_path, e))?;

    Ok(())
}

/// Read a file that must be valid UTF-8.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let native_path = path.as_ref();
    fs::read_to_string(native_path).map_err(|e| Error::io(native_path, e))
}

/// Read a file as text, replacing invalid UTF-8 sequences.
///
/// Binary content that happens to carry a text extension still decodes.
pub fn read_text_lossy(path: impl AsRef<Path>) -> Result<String> {
    let native_path = path.as_ref();
    let bytes = fs::read(native_path).map_err(|e| Error::io(native_path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Write text content to a file atomically.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Remove a single file.
pub fn remove_file(path: impl AsRef<Path>) -> Result<()> {
    let native_path = path.as_ref();
    fs::remove_file(native_path).map_err(|e| Error::io(native_path, e))
}

/// Create a directory and all of its parents.
pub fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let native_path = path.as_ref();
    fs::create_dir_all(native_path).map_err(|e| Error::io(native_path, e))
}
