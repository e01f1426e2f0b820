//! Best-effort platform side effects: opening links and exporting the
//! resume document.
//!
//! URLs are opaque here: they are handed unchanged to the platform opener,
//! never parsed, validated, or fetched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use folio_types::ResumeDoc;

/// Hand a URL to the platform opener. Detached, so a slow or missing
/// handler never blocks the UI event loop.
pub(crate) fn open_link(url: &str) -> Result<()> {
    open::that_detached(url).with_context(|| format!("failed to open {url}"))
}

/// Directory the resume is exported to: the platform download directory,
/// falling back to the working directory.
pub(crate) fn download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Write the resume document into `dir` and return the resulting path.
pub(crate) fn export_resume(dir: &Path, doc: &ResumeDoc) -> Result<PathBuf> {
    let path = dir.join(&doc.file_name);
    fs::write(&path, &doc.body)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
