//! Directory traversal under the scan root.

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories that are never descended into: `node_modules` and dot-dirs.
pub fn is_pruned_dir(name: &str) -> bool {
    name == "node_modules" || name.starts_with('.')
}

fn should_descend(entry: &DirEntry) -> bool {
    // The root is always walked, whatever its name.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if is_pruned_dir(&name) {
        tracing::debug!(dir = %entry.path().display(), "pruned directory");
        return false;
    }
    true
}

/// Collect every regular file under `root`, depth-first, in the order the
/// filesystem returns directory entries.
///
/// Symlinks are neither followed nor collected. A directory that cannot be
/// read aborts the walk.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_entry(should_descend) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    tracing::trace!(root = %root.display(), count = files.len(), "collected files");
    Ok(files)
}
