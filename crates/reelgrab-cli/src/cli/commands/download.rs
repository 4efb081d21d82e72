//! Default mode – download every unique URL and write the manifest.

use anyhow::{Context, Result};
use reelgrab_core::dedup::DedupReport;
use reelgrab_core::dispatch::{
    run_batch, BatchEvent, CookieResolution, ProcessDispatcher, UtilityCommand,
};
use reelgrab_core::numbering::assign_numbers;
use reelgrab_core::report;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Effective settings after merging CLI flags over config.
#[derive(Debug)]
pub struct DownloadSettings {
    pub output_dir: PathBuf,
    pub start: u32,
    pub timeout: Duration,
    pub cookies: CookieResolution,
    pub log_file: Option<PathBuf>,
}

pub async fn run_download(
    dedup: &DedupReport,
    utility: UtilityCommand,
    settings: DownloadSettings,
) -> Result<()> {
    let output_dir = settings.output_dir;
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;

    if let CookieResolution::MissingFile(path) = &settings.cookies {
        println!("Warning: Cookies file not found: {}", path.display());
    }
    let cookies = settings.cookies.into_source();

    report::write_banner(
        &mut io::stdout(),
        dedup.unique.len(),
        &output_dir,
        &utility,
        cookies.as_ref(),
    )?;

    let entries = assign_numbers(&dedup.unique, settings.start);
    let dispatcher = ProcessDispatcher::new(utility, cookies, settings.timeout);
    let results = run_batch(&dispatcher, &entries, &output_dir, |event| match event {
        BatchEvent::Started {
            index,
            total,
            number,
            ..
        } => {
            print!("[{index}/{total}] Downloading as {number}... ");
            if let Err(e) = io::stdout().flush() {
                tracing::debug!(error = %e, "stdout flush failed");
            }
        }
        BatchEvent::Finished { result, .. } => {
            println!("{} - {}", result.status_label(), result.message);
        }
    })
    .await;

    let saved_to = output_dir
        .canonicalize()
        .unwrap_or_else(|_| output_dir.clone());
    let mut out = io::stdout().lock();
    report::write_summary(&mut out, &results, &saved_to)?;
    report::write_reel_list(&mut out, &entries)?;

    let manifest = report::write_manifest(&output_dir, &entries)?;
    let manifest = manifest.canonicalize().unwrap_or(manifest);
    writeln!(out, "\nCSV saved to: {}", manifest.display())?;
    if let Some(log_file) = &settings.log_file {
        writeln!(out, "Run log: {}", log_file.display())?;
    }
    out.flush()?;

    let failed = results.iter().filter(|r| !r.success).count();
    tracing::info!(
        downloaded = results.len() - failed,
        failed,
        "run completed {} url(s)",
        results.len()
    );
    Ok(())
}
