//! Atomic file replacement

use assetfix_core::{AssetfixError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::Builder;

/// Replace `path` with `content` in one step.
///
/// The bytes go to a temp file in the same directory which is then renamed
/// over the target, so readers see either the old file or the new one. An
/// existing target keeps its permissions; a new file gets the same mode a
/// plain create would give it.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let existing = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(AssetfixError::io("stat", path, e)),
    };

    // Opened like `File::create` so the umask, not tempfile's 0600, sets the mode
    let mut tmp = Builder::new()
        .make_in(dir, |p| OpenOptions::new().write(true).create_new(true).open(p))
        .map_err(|e| AssetfixError::io("create temp file in", dir, e))?;

    tmp.write_all(content)
        .and_then(|_| tmp.flush())
        .map_err(|e| AssetfixError::io("write", tmp.path(), e))?;

    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| AssetfixError::io("set permissions on", tmp.path(), e))?;
    }
    tmp.persist(path)
        .map_err(|e| AssetfixError::io("replace", path, e.error))?;

    Ok(())
}
