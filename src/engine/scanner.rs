use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::parser::Language;

pub(crate) fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Collects target files under `root`: supported-language extensions,
/// filtered by the include/ignore globs, sorted so discovery order
/// never affects report order.
pub fn scan(root: &Path, config: &Config) -> Vec<PathBuf> {
    let ignore_set = build_glob_set(&config.ignore);
    let ignore_files_set = build_glob_set(&config.ignore_files);
    let include_set = build_glob_set(&config.include);
    let mut files = Vec::new();
    walk_dir(
        root,
        root,
        &ignore_set,
        &ignore_files_set,
        &include_set,
        &mut files,
    );
    files.sort();
    debug!(count = files.len(), "scanned target files");
    files
}

pub(crate) fn matches_glob(path: &Path, root: &Path, set: &GlobSet) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| set.is_match(name))
        || path.strip_prefix(root).is_ok_and(|rel| set.is_match(rel))
}

fn walk_dir(
    dir: &Path,
    root: &Path,
    ignore: &GlobSet,
    ignore_files: &GlobSet,
    include: &GlobSet,
    files: &mut Vec<PathBuf>,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if matches_glob(&path, root, ignore) {
            continue;
        }

        if path.is_dir() {
            walk_dir(&path, root, ignore, ignore_files, include, files);
        } else if Language::from_path(&path).is_some()
            && !matches_glob(&path, root, ignore_files)
            && matches_glob(&path, root, include)
        {
            files.push(path);
        }
    }
}
