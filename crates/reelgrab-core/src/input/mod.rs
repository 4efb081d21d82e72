//! URL collection from arguments, a URL file, or interactive paste.

mod file;
mod interactive;

pub use file::{load_urls_from_file, parse_url_lines};
pub use interactive::read_interactive;

use anyhow::Result;
use std::path::Path;

/// Positional URLs followed by the contents of `file` (if given).
///
/// Returns an empty list when neither source yields anything; the caller
/// decides whether to fall back to [`read_interactive`].
pub fn collect_urls(positional: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut urls = positional.to_vec();
    if let Some(path) = file {
        let from_file = load_urls_from_file(path)?;
        tracing::debug!(
            path = %path.display(),
            count = from_file.len(),
            "loaded urls from file"
        );
        urls.extend(from_file);
    }
    Ok(urls)
}
