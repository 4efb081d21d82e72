//! Interactive paste mode: read links from the console until the user is done.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::url_model::is_instagram_link;

const RULE_WIDTH: usize = 50;

/// Reads pasted links from `input`, echoing progress to `out`.
///
/// Stops on a line reading `done` (any case), on two consecutive empty
/// lines, or at EOF. Lines that aren't Instagram links are ignored.
pub fn read_interactive<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<Vec<String>> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "reelgrab - Interactive Mode")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Paste your Instagram links below (one per line)")?;
    writeln!(out, "When done, type 'done' or press Enter twice")?;
    writeln!(out, "{rule}\n")?;
    out.flush()?;

    let mut urls = Vec::new();
    let mut empty_run = 0;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.eq_ignore_ascii_case("done") {
            break;
        }
        if line.is_empty() {
            empty_run += 1;
            if empty_run >= 2 {
                break;
            }
            continue;
        }

        empty_run = 0;
        if is_instagram_link(line) {
            urls.push(line.to_string());
            writeln!(out, "  Added ({})", urls.len())?;
            out.flush()?;
        } else {
            tracing::debug!(line, "ignoring non-instagram input");
        }
    }

    Ok(urls)
}
