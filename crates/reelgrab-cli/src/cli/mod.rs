//! CLI for reelgrab.

mod commands;

use anyhow::Result;
use clap::Parser;
use reelgrab_core::config::{self, ReelgrabConfig};
use reelgrab_core::dedup::dedup_urls;
use reelgrab_core::dispatch::{self, detect_utility};
use reelgrab_core::error::RunError;
use reelgrab_core::input;
use reelgrab_core::report;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use commands::{run_check, run_download, DownloadSettings};

const EXAMPLES: &str = "\
Examples:
  reelgrab                                   (interactive mode - paste links)
  reelgrab https://instagram.com/p/ABC123/
  reelgrab -f links.txt
  reelgrab -f links.txt -o my_downloads
  reelgrab -f links.txt --check
  reelgrab url1 url2 url3";

/// Top-level CLI: batch-download Instagram posts and reels with yt-dlp.
#[derive(Debug, Parser)]
#[command(name = "reelgrab")]
#[command(about = "Download media from Instagram posts, reels, and more", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Instagram URLs to download.
    pub urls: Vec<String>,

    /// File containing URLs (one per line, `#` starts a comment).
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output directory (default from config: downloads).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Starting number for file naming (default from config: 1).
    #[arg(short, long, value_name = "N")]
    pub start: Option<u32>,

    /// Path to a cookies.txt file (Netscape format).
    #[arg(short, long, value_name = "PATH", conflicts_with = "browser")]
    pub cookies: Option<PathBuf>,

    /// Extract cookies from a browser (chrome, firefox, safari, edge).
    #[arg(long, value_name = "NAME")]
    pub browser: Option<String>,

    /// Only check for duplicates; do not download.
    #[arg(long)]
    pub check: bool,

    /// Per-URL timeout in seconds (default from config: 120).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Run log opened by `main`, shown at the end of a download run.
    #[arg(skip)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub async fn run_from_args(log_file: Option<PathBuf>) -> Result<()> {
        let cli = Cli {
            log_file,
            ..Cli::parse()
        };
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.execute(&cfg).await
    }

    /// Runs one pass against the process's stdin and stdout.
    pub async fn execute(self, cfg: &ReelgrabConfig) -> Result<()> {
        let stdin = io::stdin();
        self.execute_with(cfg, stdin.lock(), &mut io::stdout()).await
    }

    /// Runs one pass: collect, dedup, then either report (`--check`) or download.
    ///
    /// `reader` is only read when neither positional URLs nor `--file` yield
    /// anything. Download progress always goes to stdout.
    pub async fn execute_with<R: BufRead, W: Write>(
        self,
        cfg: &ReelgrabConfig,
        reader: R,
        out: &mut W,
    ) -> Result<()> {
        // Download mode needs the utility before any other work happens.
        let utility = if self.check {
            None
        } else {
            Some(detect_utility(&cfg.utility, &cfg.python).await?)
        };

        let mut urls = input::collect_urls(&self.urls, self.file.as_deref())?;
        if urls.is_empty() {
            urls = input::read_interactive(reader, out)?;
        }
        if urls.is_empty() {
            return Err(RunError::NoUrls.into());
        }

        let dedup = dedup_urls(&urls);
        tracing::info!(
            total = dedup.total(),
            unique = dedup.unique.len(),
            duplicates = dedup.duplicates.len(),
            "collected urls"
        );
        report::write_duplicates(out, &dedup)?;
        out.flush()?;

        let Some(utility) = utility else {
            return run_check(out, &dedup);
        };

        let cookies = dispatch::resolve_cookies(
            self.cookies.as_deref(),
            self.browser.as_deref(),
            cfg.cookies_file.clone().or_else(config::default_cookies_path),
        );
        let settings = DownloadSettings {
            output_dir: self.output.unwrap_or_else(|| cfg.output_dir.clone()),
            start: self.start.unwrap_or(cfg.start_number),
            timeout: self.timeout.map_or_else(|| cfg.timeout(), Duration::from_secs),
            cookies,
            log_file: self.log_file,
        };
        run_download(&dedup, utility, settings).await
    }
}

#[cfg(test)]
mod tests;
