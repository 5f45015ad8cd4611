// File discovery: lists the `.html` files sitting next to the tool. Only
// the top level of the directory is scanned.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A regular `.html` file found in the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Return the regular files in `dir` whose name ends with `.html`
/// (any case), in directory-listing order.
pub fn find_html_files(dir: &Path) -> Result<Vec<FileEntry>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let Ok(name) = entry.file_name().into_string() else {
            log::debug!("skipping non-unicode file name {:?}", entry.file_name());
            continue;
        };
        if !is_html_name(&name) {
            continue;
        }
        // `metadata` follows symlinks, so a link to a regular file counts.
        let path = entry.path();
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => files.push(FileEntry { name, path }),
            Ok(_) => {}
            Err(e) => log::warn!("cannot stat {}: {}", path.display(), e),
        }
    }

    log::debug!("found {} .html file(s) in {}", files.len(), dir.display());
    Ok(files)
}

fn is_html_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".html")
}
