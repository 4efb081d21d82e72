//! Command-line contract of the download utility.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::cookies::CookieSource;

/// Output template for file `number`; the utility fills in the extension.
pub fn output_template(output_dir: &Path, number: u64) -> PathBuf {
    output_dir.join(format!("{number}.%(ext)s"))
}

/// Arguments for downloading `url` as file `number`:
/// `-o <dir>/<number>.%(ext)s --no-playlist --quiet --no-warnings [cookies] <url>`.
pub fn download_args(
    url: &str,
    output_dir: &Path,
    number: u64,
    cookies: Option<&CookieSource>,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-o".into(),
        output_template(output_dir, number).into_os_string(),
        "--no-playlist".into(),
        "--quiet".into(),
        "--no-warnings".into(),
    ];
    if let Some(source) = cookies {
        args.extend(source.to_args());
    }
    args.push(url.into());
    args
}
