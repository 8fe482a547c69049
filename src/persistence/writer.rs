use super::files::{atomic_write, ensure_dir};
use crate::convert::MarkdownDocument;
use crate::domain::OutlineNode;
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default file name for the Roam import
pub const DEFAULT_OUTLINE_FILE: &str = "roam-import.json";

/// Default directory for markdown output
pub const DEFAULT_MARKDOWN_DIR: &str = "markdown";

/// Serialize pages as a compact JSON array. Non-ASCII text is written as-is.
pub fn serialize_outline(pages: &[OutlineNode]) -> Result<String> {
    Ok(serde_json::to_string(pages)?)
}

/// Write the Roam import file
pub fn write_outline<P: AsRef<Path>>(path: P, pages: &[OutlineNode]) -> Result<()> {
    let json = serialize_outline(pages)?;
    atomic_write(path, &json)
}

/// Write one `<date key>.md` per document; repeated keys get a `-1`, `-2`, ... suffix
pub fn write_markdown<P: AsRef<Path>>(dir: P, documents: &[MarkdownDocument]) -> Result<Vec<PathBuf>> {
    let dir = ensure_dir(dir)?;
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut written = Vec::with_capacity(documents.len());

    for (key, document) in documents {
        let count = seen.entry(key.as_str()).or_insert(0);
        let filename = if *count == 0 {
            format!("{}.md", key)
        } else {
            format!("{}-{}.md", key, count)
        };
        *count += 1;

        let path = dir.join(filename);
        atomic_write(&path, document)?;
        written.push(path);
    }

    Ok(written)
}
