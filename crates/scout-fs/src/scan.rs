//! Recursive descendant scan used by default inference

use std::fs;
use std::path::{Path, PathBuf};

/// Find all files under `root` whose name ends with `suffix`,
/// e.g. `find_files(repo, ".js")`.
///
/// Returns an empty vec when the root does not exist; detection callers
/// treat "nothing there" and "no such directory" the same way.
pub fn find_files(root: &Path, suffix: &str) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if !root.exists() {
        return results;
    }
    walk(root, suffix, &mut results);
    results
}

fn walk(dir: &Path, suffix: &str, results: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            // Unreadable directories are skipped, not fatal
            tracing::debug!("skipping unreadable directory {:?}: {}", dir, e);
            return;
        }
    };

    for entry in entries.flatten() {
        // file_type() does not follow symlinks, so link cycles are
        // never traversed
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            walk(&path, suffix, results);
        } else if file_type.is_file()
            && path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().ends_with(suffix))
        {
            results.push(path);
        }
    }
}
