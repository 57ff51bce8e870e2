// src/core/collector.rs
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::exclude::ExcludePatterns;

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: [&str; 3] = ["venv", "__pycache__", "node_modules"];

/// Collects the Python files under `root`.
///
/// # Arguments
///
/// * `root` - A Python file or a directory to search
/// * `recursive` - Whether to descend below the immediate children of `root`
/// * `exclude_patterns` - Glob patterns; matching files are dropped
///
/// # Returns
///
/// The matching files in ascending path order. A `root` that is a non-Python
/// file, or that does not exist, yields an empty list. Entries below `root`
/// inside [`EXCLUDED_DIRS`] or hidden (dot) directories are never returned.
#[inline]
pub fn collect_python_files<S: AsRef<str>>(
    root: &Path,
    recursive: bool,
    exclude_patterns: &[S],
) -> Vec<PathBuf> {
    if root.is_file() {
        return if is_python_file(root) {
            vec![normalize(root)]
        } else {
            Vec::new()
        };
    }

    if !root.is_dir() {
        return Vec::new();
    }

    let patterns = ExcludePatterns::new(exclude_patterns);
    let base = normalize(root);
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !should_skip(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("skipping unreadable entry under {}: {err}", root.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_python_file(entry.path()))
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|relative| base.join(relative))
        })
        .filter(|path| {
            let excluded = patterns.matches(path);
            if excluded {
                log::debug!("excluded by pattern: {}", path.display());
            }
            !excluded
        })
        .collect();

    files.sort();
    files
}

/// Determines whether a walked entry, file or directory, is pruned: its name
/// is on the denylist or starts with a dot.
fn should_skip(entry: &DirEntry) -> bool {
    let skip = entry.file_name().to_str().is_some_and(|name| {
        EXCLUDED_DIRS.contains(&name) || (name.starts_with('.') && name != ".")
    });
    if skip {
        log::debug!("pruning {}", entry.path().display());
    }
    skip
}

fn is_python_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "py")
}

/// Drops `.` components so `./pkg/a.py` is reported as `pkg/a.py`.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
