// Reading one document as UTF-8 text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// A loaded document: its file name and full text.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
}

/// Read the file at `path`. The document is named after the final path
/// component. Invalid UTF-8 is an error, not a lossy conversion.
pub fn read_document(path: &Path) -> Result<Document> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("Document path has no file name: {}", path.display()))?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    Ok(Document { name, text })
}
