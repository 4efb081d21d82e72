//! Run-mode handlers, one per file.

mod check;
mod download;

pub use check::run_check;
pub use download::{run_download, DownloadSettings};
