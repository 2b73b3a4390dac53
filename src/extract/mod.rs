//! Endpoint extraction from documentation and client source trees.

pub mod client;
pub mod docs;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Files under `dir` matching `pattern` (a glob relative to `dir`), sorted
/// for deterministic output.
fn find_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let full = format!("{}/{}", escaped.trim_end_matches('/'), pattern);
    let mut files: Vec<PathBuf> = glob::glob(&full)
        .with_context(|| format!("invalid glob pattern: {}", full))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Read a file as text, replacing invalid UTF-8 rather than failing.
///
/// Returns `None` (after logging) when the file cannot be read at all.
fn read_text(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::warn!("skipping {}: {}", path.display(), e);
            None
        }
    }
}
