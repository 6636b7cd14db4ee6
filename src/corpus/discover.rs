// Document discovery: every regular file directly inside the input folder.
//
// Subdirectories are not descended into. The listing is sorted by file name so
// that repeated runs over the same folder walk documents in the same order,
// which the scorer's first-seen-wins policy depends on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// List the documents in `dir`, sorted by file name.
pub fn find_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read input folder {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to list input folder {}", dir.display()))?;
        let path = entry.path();
        // Follows symlinks, so a link to a regular file counts as a document.
        let metadata = fs::metadata(&path)
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        if metadata.is_file() {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "Skipping non-file entry");
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}
