//! URL modeling for Instagram post links.
//!
//! Pulls the two things the pipeline needs out of a post URL: the content id
//! used as the dedup key, and a best-effort creator name for the manifest.
//! URLs are treated as opaque strings; nothing here parses or validates them.

mod content_id;
mod creator;

pub use content_id::content_id;
pub use creator::creator_name;

/// Host substring a pasted line must contain to be accepted in interactive mode.
const INSTAGRAM_HOST: &str = "instagram.com";

/// Whether `line` looks like an Instagram link.
pub fn is_instagram_link(line: &str) -> bool {
    line.contains(INSTAGRAM_HOST)
}
