//! CSV manifest mapping file numbers to creators and links.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::numbering::NumberedUrl;
use crate::url_model::creator_name;

pub const MANIFEST_FILE_NAME: &str = "reel_list.csv";

const HEADER: [&str; 3] = ["Video Number", "Creator Name", "Link"];
const LINE_END: &str = "\r\n";

/// Appends `field`, quoting it when it contains a delimiter, quote or newline.
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push_str(LINE_END);
}

/// Manifest contents: a header row, then one row per entry in order.
pub fn render_manifest(entries: &[NumberedUrl<'_>]) -> String {
    let mut out = String::new();
    push_row(&mut out, &HEADER);
    for entry in entries {
        let number = entry.number.to_string();
        push_row(&mut out, &[number.as_str(), creator_name(entry.url), entry.url]);
    }
    out
}

/// Writes `reel_list.csv` into `output_dir`, replacing any previous manifest.
pub fn write_manifest(output_dir: &Path, entries: &[NumberedUrl<'_>]) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILE_NAME);
    fs::write(&path, render_manifest(entries))
        .with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = entries.len(), "wrote manifest");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::assign_numbers;

    #[test]
    fn header_and_rows() {
        let urls = [
            "https://www.instagram.com/chef_ana/reel/AAA/",
            "https://www.instagram.com/p/BBB/",
        ];
        let csv = render_manifest(&assign_numbers(&urls, 3));
        assert_eq!(
            csv,
            "Video Number,Creator Name,Link\r\n\
             3,chef_ana,https://www.instagram.com/chef_ana/reel/AAA/\r\n\
             4,,https://www.instagram.com/p/BBB/\r\n"
        );
    }

    #[test]
    fn fields_with_commas_and_quotes_are_quoted() {
        let mut out = String::new();
        push_field(&mut out, "a,b");
        out.push('|');
        push_field(&mut out, "say \"hi\"");
        out.push('|');
        push_field(&mut out, "plain");
        assert_eq!(out, "\"a,b\"|\"say \"\"hi\"\"\"|plain");
    }

    #[test]
    fn header_only_for_empty_list() {
        assert_eq!(render_manifest(&[]), "Video Number,Creator Name,Link\r\n");
    }

    #[test]
    fn write_manifest_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let urls = ["https://instagram.com/reel/X/"];
        let path = write_manifest(dir.path(), &assign_numbers(&urls, 1)).unwrap();
        assert_eq!(path, dir.path().join("reel_list.csv"));
        let data = std::fs::read_to_string(&path).unwrap();
        assert!(data.ends_with("1,,https://instagram.com/reel/X/\r\n"));
    }
}
