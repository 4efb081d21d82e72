//! Fatal run conditions. Per-URL download failures are not errors; they are
//! recorded as [`crate::dispatch::DownloadResult`] values.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// Neither `<utility> --version` nor `<python> -m yt_dlp --version` succeeded.
    #[error("{utility} is not installed; install it with `pip install yt-dlp` or `brew install yt-dlp`")]
    UtilityMissing { utility: String },

    /// `--file` pointed at a path that does not exist.
    #[error("file not found: {}", .0.display())]
    InputFileNotFound(PathBuf),

    /// Arguments, file and interactive input together produced nothing.
    #[error("no URLs provided")]
    NoUrls,
}
