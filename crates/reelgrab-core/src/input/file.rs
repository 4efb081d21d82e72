//! URL list files: one URL per line, `#` comments and blank lines ignored.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::error::RunError;

/// Reads a URL list file. A missing file is reported as
/// [`RunError::InputFileNotFound`] so the CLI can treat it as fatal.
pub fn load_urls_from_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(RunError::InputFileNotFound(path.to_path_buf()).into());
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(parse_url_lines(&data))
}

pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
