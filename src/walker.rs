//! Source tree discovery.
//!
//! [`walk`] enumerates a directory the way the export pipeline needs it:
//! every entry is reported before its own descendants, siblings come in the
//! order the operating system lists them, and dependency caches are never
//! entered. [`source_files`] narrows that listing to the script files that
//! may contain query literals.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Directory name that is never listed or descended into.
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Which entries [`walk`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkKind {
    /// Everything that is not a directory.
    #[default]
    File,
    /// Directories only.
    Folder,
    /// Every entry.
    Any,
}

impl WalkKind {
    fn accepts(self, is_dir: bool) -> bool {
        match self {
            WalkKind::File => !is_dir,
            WalkKind::Folder => is_dir,
            WalkKind::Any => true,
        }
    }
}

/// List the entries below `root`.
///
/// With `recursive` unset only the immediate children are considered. The
/// result is fully materialized; any I/O failure aborts the whole walk.
pub fn walk(root: &Path, recursive: bool, kind: WalkKind) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Cannot read directory: {}", root.display()))?;
    if !metadata.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut walker = WalkDir::new(root).min_depth(1).follow_links(true);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut paths = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|entry| !is_dependency_cache(entry))
    {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if kind.accepts(entry.file_type().is_dir()) {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

fn is_dependency_cache(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().contains(DEPENDENCY_CACHE_DIR)
}

/// Recursively list the files under `root` whose extension is one of
/// `extensions` and whose path matches none of `ignores`.
///
/// Extensions may be written with or without the leading dot.
pub fn source_files(
    root: &Path,
    extensions: &[String],
    ignores: &[Pattern],
) -> Result<Vec<PathBuf>> {
    let files = walk(root, true, WalkKind::File)?
        .into_iter()
        .filter(|path| has_extension(path, extensions))
        .filter(|path| {
            let path_str = path.to_string_lossy();
            !ignores.iter().any(|pattern| pattern.matches(&path_str))
        })
        .collect();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.') == ext)
}
