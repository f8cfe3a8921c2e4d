use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Create every missing parent directory of `path`.
///
/// A bare file name has an empty parent and needs nothing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display())),
        _ => Ok(()),
    }
}

/// Write `contents` to `path`, truncating whatever was there.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
