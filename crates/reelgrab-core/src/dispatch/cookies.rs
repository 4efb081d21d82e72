//! Cookie source selection for the download utility.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Where the utility should get Instagram session cookies from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieSource {
    /// Netscape-format cookie file, passed as `--cookies <path>`.
    File(PathBuf),
    /// Browser profile to read cookies from, passed as `--cookies-from-browser <name>`.
    Browser(String),
}

impl CookieSource {
    /// Utility flags selecting this source.
    pub fn to_args(&self) -> [OsString; 2] {
        match self {
            CookieSource::File(path) => ["--cookies".into(), path.clone().into_os_string()],
            CookieSource::Browser(name) => ["--cookies-from-browser".into(), name.into()],
        }
    }
}

/// Outcome of cookie selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieResolution {
    Use(CookieSource),
    /// An explicit `--cookies` file does not exist; the run continues without cookies.
    MissingFile(PathBuf),
    None,
}

impl CookieResolution {
    pub fn into_source(self) -> Option<CookieSource> {
        match self {
            CookieResolution::Use(source) => Some(source),
            CookieResolution::MissingFile(_) | CookieResolution::None => None,
        }
    }
}

/// Picks a cookie source: an explicit file first, then a browser, then the
/// `fallback` file if it exists on disk.
pub fn resolve_cookies(
    explicit: Option<&Path>,
    browser: Option<&str>,
    fallback: Option<PathBuf>,
) -> CookieResolution {
    if let Some(path) = explicit {
        return if path.exists() {
            CookieResolution::Use(CookieSource::File(path.to_path_buf()))
        } else {
            tracing::warn!(path = %path.display(), "cookies file not found");
            CookieResolution::MissingFile(path.to_path_buf())
        };
    }
    if let Some(name) = browser {
        return CookieResolution::Use(CookieSource::Browser(name.to_string()));
    }
    match fallback {
        Some(path) if path.exists() => CookieResolution::Use(CookieSource::File(path)),
        _ => CookieResolution::None,
    }
}
