//! Content id extraction from `/reel/<id>` and `/p/<id>` path segments.

use regex::Regex;
use std::sync::LazyLock;

static CONTENT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:reel|p)/([^/?]+)").expect("content id regex is valid"));

/// Returns the post id of `url`, or `url` itself when no `/reel/` or `/p/`
/// segment is present.
///
/// No normalization happens first: a URL without a recognizable segment is only
/// ever equal to a textually identical URL.
pub fn content_id(url: &str) -> &str {
    CONTENT_ID_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map_or(url, |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reel_id() {
        assert_eq!(content_id("https://www.instagram.com/reel/C9xYz_12/"), "C9xYz_12");
        assert_eq!(content_id("https://instagram.com/reel/ABC"), "ABC");
    }

    #[test]
    fn post_id() {
        assert_eq!(content_id("https://instagram.com/p/ABC/"), "ABC");
        assert_eq!(content_id("https://instagram.com/someone/p/DEF/"), "DEF");
    }

    #[test]
    fn id_stops_at_query() {
        assert_eq!(
            content_id("https://www.instagram.com/reel/QQQ?igsh=MWx0d2"),
            "QQQ"
        );
        assert_eq!(
            content_id("https://www.instagram.com/p/QQQ/?utm_source=ig_web"),
            "QQQ"
        );
    }

    #[test]
    fn no_segment_returns_url() {
        let url = "https://www.instagram.com/stories/someone/3141592/";
        assert_eq!(content_id(url), url);
        assert_eq!(content_id("not a url"), "not a url");
    }

    #[test]
    fn empty_id_is_not_a_match() {
        let url = "https://instagram.com/reel/";
        assert_eq!(content_id(url), url);
    }

    #[test]
    fn reels_plural_is_not_reel() {
        let url = "https://instagram.com/reels/AAA/";
        assert_eq!(content_id(url), url);
    }
}
