//! Locating and launching the download utility.

use std::ffi::{OsStr, OsString};
use std::process::Stdio;
use std::time::Duration;

use crate::error::RunError;

/// Python module name used for the `python -m` fallback.
const YT_DLP_MODULE: &str = "yt_dlp";

/// Upper bound on a `--version` check.
const VERSION_CHECK_TIMEOUT: Duration = Duration::from_secs(15);

/// How to start the utility: a program plus any arguments that must precede
/// the download arguments (e.g. `-m yt_dlp` for the Python fallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityCommand {
    pub program: OsString,
    pub leading_args: Vec<OsString>,
}

impl UtilityCommand {
    pub fn new<P, I, A>(program: P, leading_args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            leading_args: leading_args.into_iter().map(Into::into).collect(),
        }
    }

    /// A standalone executable such as `yt-dlp`.
    pub fn executable(program: impl Into<OsString>) -> Self {
        Self::new(program, Vec::<OsString>::new())
    }

    /// `python -m yt_dlp`.
    pub fn python_module(python: impl Into<OsString>) -> Self {
        Self::new(python, ["-m", YT_DLP_MODULE])
    }

    /// A fresh command with the program and leading arguments applied.
    pub fn command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.leading_args);
        cmd
    }

    /// Human-readable form for logs and banners.
    pub fn describe(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.leading_args.iter().map(OsString::as_os_str))
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn responds_to_version(&self) -> bool {
        let mut cmd = self.command();
        cmd.arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        match tokio::time::timeout(VERSION_CHECK_TIMEOUT, cmd.status()).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                tracing::debug!(
                    utility = %self.describe(),
                    error = %e,
                    "utility version check failed to launch"
                );
                false
            }
            Err(_) => {
                tracing::debug!(utility = %self.describe(), "utility version check timed out");
                false
            }
        }
    }
}

/// Finds a working utility: `utility --version` first, then
/// `python -m yt_dlp --version`.
pub async fn detect_utility(utility: &str, python: &str) -> Result<UtilityCommand, RunError> {
    for candidate in [
        UtilityCommand::executable(utility),
        UtilityCommand::python_module(python),
    ] {
        if candidate.responds_to_version().await {
            tracing::info!(utility = %candidate.describe(), "using download utility");
            return Ok(candidate);
        }
    }
    Err(RunError::UtilityMissing {
        utility: utility.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_module_form() {
        let cmd = UtilityCommand::python_module("python3");
        assert_eq!(cmd.describe(), "python3 -m yt_dlp");
        assert_eq!(cmd.leading_args.len(), 2);
    }

    #[test]
    fn executable_form() {
        let cmd = UtilityCommand::executable("yt-dlp");
        assert_eq!(cmd.describe(), "yt-dlp");
        assert!(cmd.leading_args.is_empty());
    }

    #[tokio::test]
    async fn missing_utility_detected() {
        let err = detect_utility("/nonexistent/reelgrab/yt-dlp", "/nonexistent/reelgrab/python")
            .await
            .unwrap_err();
        match err {
            RunError::UtilityMissing { utility } => {
                assert_eq!(utility, "/nonexistent/reelgrab/yt-dlp")
            }
            other => panic!("expected UtilityMissing, got {other:?}"),
        }
    }
}
