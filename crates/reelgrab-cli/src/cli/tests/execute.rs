//! End-to-end runs of `Cli::execute` that don't need a real download utility.

use super::parse;
use reelgrab_core::config::ReelgrabConfig;
use reelgrab_core::error::RunError;
use std::io::{Cursor, Write};

fn config_without_utility() -> ReelgrabConfig {
    ReelgrabConfig {
        utility: "/nonexistent/reelgrab/yt-dlp".to_string(),
        python: "/nonexistent/reelgrab/python".to_string(),
        ..ReelgrabConfig::default()
    }
}

#[tokio::test]
async fn check_mode_skips_utility_and_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("downloads");
    let out_arg = out.to_str().unwrap();
    let cli = parse(&[
        "reelgrab",
        "--check",
        "-o",
        out_arg,
        "https://instagram.com/reel/ABC/",
        "https://instagram.com/p/ABC/",
    ]);

    cli.execute(&config_without_utility()).await.unwrap();
    assert!(!out.exists(), "check mode must not create the output dir");
}

#[tokio::test]
async fn download_mode_fails_fast_without_utility() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("downloads");
    let out_arg = out.to_str().unwrap();
    let cli = parse(&["reelgrab", "-o", out_arg, "https://instagram.com/reel/ABC/"]);

    let err = cli.execute(&config_without_utility()).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RunError>(),
        Some(RunError::UtilityMissing { .. })
    ));
    assert!(!out.exists());
}

#[tokio::test]
async fn missing_url_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("links.txt");
    let cli = parse(&["reelgrab", "--check", "-f", missing.to_str().unwrap()]);

    let err = cli.execute(&config_without_utility()).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RunError>(),
        Some(RunError::InputFileNotFound(_))
    ));
}

#[tokio::test]
async fn check_mode_reads_url_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "# reels to grab").unwrap();
    writeln!(f, "https://instagram.com/reel/ONE/").unwrap();
    writeln!(f, "https://instagram.com/reel/ONE/").unwrap();
    f.flush().unwrap();

    let cli = parse(&["reelgrab", "--check", "-f", f.path().to_str().unwrap()]);
    cli.execute(&config_without_utility()).await.unwrap();
}

#[tokio::test]
async fn empty_interactive_input_is_fatal() {
    let cli = parse(&["reelgrab", "--check"]);
    let mut out = Vec::new();

    let err = cli
        .execute_with(&config_without_utility(), Cursor::new(""), &mut out)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RunError>(),
        Some(RunError::NoUrls)
    ));
    assert!(String::from_utf8(out).unwrap().contains("Interactive Mode"));
}

#[tokio::test]
async fn interactive_input_feeds_check_mode() {
    let cli = parse(&["reelgrab", "--check"]);
    let mut out = Vec::new();

    cli.execute_with(
        &config_without_utility(),
        Cursor::new("https://instagram.com/reel/A/\ndone\n"),
        &mut out,
    )
    .await
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("  Added (1)"));
    assert!(text.contains("Total URLs: 1"));
    assert!(text.contains("NO DUPLICATES - list is clean!"));
}

#[tokio::test]
async fn duplicates_reported_to_writer() {
    let cli = parse(&[
        "reelgrab",
        "--check",
        "https://instagram.com/reel/ABC/",
        "https://instagram.com/p/ABC/",
    ]);
    let mut out = Vec::new();

    cli.execute_with(&config_without_utility(), Cursor::new(""), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("  Line 2: ABC (duplicate of line 1)"));
    assert!(text.contains("CLEAN LIST (copy this):"));
    assert!(!text.contains("Interactive Mode"));
}
