//! `reelgrab --check` – report duplicates and print the clean list.

use anyhow::Result;
use reelgrab_core::dedup::DedupReport;
use reelgrab_core::report;
use std::io::Write;

/// Never touches the output directory or the download utility.
pub fn run_check<W: Write>(out: &mut W, dedup: &DedupReport) -> Result<()> {
    report::write_check_report(out, dedup)?;
    out.flush()?;
    Ok(())
}
