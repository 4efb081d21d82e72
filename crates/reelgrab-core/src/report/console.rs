//! Console report blocks. Each writer takes `impl Write` so the CLI can pass
//! a locked stdout and tests can pass a buffer.

use std::io::{self, Write};
use std::path::Path;

use crate::dedup::DedupReport;
use crate::dispatch::{CookieSource, DownloadResult, UtilityCommand};
use crate::numbering::NumberedUrl;
use crate::url_model::content_id;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Lists skipped duplicates; writes nothing for a clean list.
pub fn write_duplicates<W: Write>(out: &mut W, report: &DedupReport) -> io::Result<()> {
    if report.is_clean() {
        return Ok(());
    }
    writeln!(
        out,
        "\nFound {} duplicate(s) - will skip:",
        report.duplicates.len()
    )?;
    for dup in &report.duplicates {
        writeln!(
            out,
            "  Line {}: {} (duplicate of line {})",
            dup.position, dup.content_id, dup.first_position
        )?;
    }
    writeln!(out)
}

/// Totals for `--check`, followed by the deduplicated list when it differs
/// from the input.
pub fn write_check_report<W: Write>(out: &mut W, report: &DedupReport) -> io::Result<()> {
    writeln!(out, "Total URLs: {}", report.total())?;
    writeln!(out, "Unique URLs: {}", report.unique.len())?;
    writeln!(out, "Duplicates: {}", report.duplicates.len())?;
    if report.is_clean() {
        return writeln!(out, "NO DUPLICATES - list is clean!");
    }
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "CLEAN LIST (copy this):")?;
    writeln!(out, "{}", rule())?;
    for url in &report.unique {
        writeln!(out, "{url}")?;
    }
    writeln!(out, "{}", rule())
}

pub fn write_banner<W: Write>(
    out: &mut W,
    url_count: usize,
    output_dir: &Path,
    utility: &UtilityCommand,
    cookies: Option<&CookieSource>,
) -> io::Result<()> {
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "reelgrab ({})", utility.describe())?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "URLs to process: {url_count}")?;
    writeln!(out, "Output directory: {}", output_dir.display())?;
    match cookies {
        Some(CookieSource::File(path)) => writeln!(out, "Using cookies: {}", path.display())?,
        Some(CookieSource::Browser(name)) => writeln!(out, "Using cookies from: {name} browser")?,
        None => writeln!(out, "No cookies (some content may fail)")?,
    }
    writeln!(out, "{}\n", rule())
}

/// Success count, then every failed URL with its error.
pub fn write_summary<W: Write>(
    out: &mut W,
    results: &[DownloadResult],
    saved_to: &Path,
) -> io::Result<()> {
    let successful = results.iter().filter(|r| r.success).count();
    let failed: Vec<&DownloadResult> = results.iter().filter(|r| !r.success).collect();

    writeln!(out, "\n{}", rule())?;
    writeln!(out, "Complete! Downloaded: {}/{}", successful, results.len())?;
    if !failed.is_empty() {
        writeln!(out, "\nFailed URLs ({}):", failed.len())?;
        for r in failed {
            writeln!(out, "  - {}", r.url)?;
            writeln!(out, "    Error: {}", r.message)?;
        }
    }
    writeln!(out, "{}", rule())?;
    writeln!(out, "\nFiles saved to: {}", saved_to.display())
}

/// `<number>. <content id>` for every entry, so files can be matched back to posts.
pub fn write_reel_list<W: Write>(out: &mut W, entries: &[NumberedUrl<'_>]) -> io::Result<()> {
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "REEL LIST (number = filename):")?;
    writeln!(out, "{}", rule())?;
    for entry in entries {
        writeln!(out, "{}. {}", entry.number, content_id(entry.url))?;
    }
    writeln!(out, "{}", rule())
}
