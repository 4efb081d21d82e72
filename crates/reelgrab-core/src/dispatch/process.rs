//! [`Dispatcher`] that runs the real utility as a child process.

use std::process::Stdio;
use std::time::Duration;

use super::args::download_args;
use super::batch::{DispatchJob, Dispatcher};
use super::cookies::CookieSource;
use super::result::DownloadResult;
use super::utility::UtilityCommand;

const TIMEOUT_MESSAGE: &str = "Timeout";
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

#[derive(Debug, Clone)]
pub struct ProcessDispatcher {
    utility: UtilityCommand,
    cookies: Option<CookieSource>,
    timeout: Duration,
}

impl ProcessDispatcher {
    pub fn new(utility: UtilityCommand, cookies: Option<CookieSource>, timeout: Duration) -> Self {
        Self {
            utility,
            cookies,
            timeout,
        }
    }
}

impl Dispatcher for ProcessDispatcher {
    /// Exit 0 is success. Otherwise the trimmed stderr (or `Unknown error`),
    /// `Timeout` when the bound elapses, or the launch error text. The child
    /// is killed if it outlives the timeout.
    async fn dispatch(&self, job: &DispatchJob<'_>) -> DownloadResult {
        let args = download_args(job.url, job.output_dir, job.number, self.cookies.as_ref());
        let mut cmd = self.utility.command();
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(
            utility = %self.utility.describe(),
            number = job.number,
            url = job.url,
            "dispatching"
        );

        match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) if output.status.success() => {
                DownloadResult::succeeded(job.url, job.number)
            }
            Ok(Ok(output)) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr = stderr.trim();
                tracing::debug!(status = %output.status, stderr, "utility exited with failure");
                let reason = if stderr.is_empty() {
                    UNKNOWN_ERROR_MESSAGE
                } else {
                    stderr
                };
                DownloadResult::failed(job.url, job.number, reason)
            }
            Ok(Err(e)) => DownloadResult::failed(job.url, job.number, &e.to_string()),
            Err(_) => {
                tracing::debug!(timeout = ?self.timeout, "utility timed out; killed");
                DownloadResult::failed(job.url, job.number, TIMEOUT_MESSAGE)
            }
        }
    }
}
