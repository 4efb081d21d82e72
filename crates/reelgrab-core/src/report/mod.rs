//! Run reporting: console summaries and the `reel_list.csv` manifest.

mod console;
mod manifest;

pub use console::{
    write_banner, write_check_report, write_duplicates, write_reel_list, write_summary,
};
pub use manifest::{render_manifest, write_manifest, MANIFEST_FILE_NAME};
