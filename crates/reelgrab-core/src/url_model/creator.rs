//! Best-effort creator name from profile-style post URLs.

use regex::Regex;
use std::sync::LazyLock;

static CREATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"instagram\.com/([^/]+)/").expect("creator regex is valid"));

/// Returns the first path segment after `instagram.com/`, e.g. `someone` for
/// `https://instagram.com/someone/reel/ABC/`.
///
/// Bare post links (`/reel/...`, `/p/...`) carry no creator, and neither do
/// URLs that don't match; both yield `""`.
pub fn creator_name(url: &str) -> &str {
    match CREATOR_REGEX.captures(url).and_then(|caps| caps.get(1)) {
        Some(m) if !matches!(m.as_str(), "reel" | "p") => m.as_str(),
        _ => "",
    }
}
