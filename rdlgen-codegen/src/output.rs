//! Output unit resolution.
//!
//! Emitters build each unit in memory; this module is the only place
//! generated text touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

/// Returns the directory a namespace maps to under the output root,
/// one path segment per dotted component.
#[must_use]
pub fn package_dir(base: &Path, namespace: &str) -> PathBuf {
    if namespace.is_empty() {
        return base.to_path_buf();
    }
    namespace
        .split('.')
        .fold(base.to_path_buf(), |dir, seg| dir.join(seg))
}

/// Writes one output unit `dir/name.ext`, creating directories as
/// needed, and returns the written path.
///
/// # Errors
/// Returns an IO error if directory creation or the write fails.
pub fn write_unit(dir: &Path, name: &str, ext: &str, contents: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{name}{ext}"));
    fs::write(&path, contents)?;
    Ok(path)
}
