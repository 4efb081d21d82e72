//! Per-URL download outcome.

/// Longest message kept from a failed invocation, in characters.
pub const MESSAGE_LIMIT: usize = 100;

/// Outcome of one dispatch. Built once, after the utility exits or times out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub url: String,
    pub number: u64,
    pub success: bool,
    /// `Downloaded as <n>` on success, otherwise the truncated failure reason.
    pub message: String,
}

impl DownloadResult {
    pub fn succeeded(url: &str, number: u64) -> Self {
        Self {
            url: url.to_string(),
            number,
            success: true,
            message: format!("Downloaded as {number}"),
        }
    }

    pub fn failed(url: &str, number: u64, reason: &str) -> Self {
        Self {
            url: url.to_string(),
            number,
            success: false,
            message: truncate_message(reason),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.success {
            "OK"
        } else {
            "FAIL"
        }
    }
}

/// First [`MESSAGE_LIMIT`] characters of `reason`.
pub fn truncate_message(reason: &str) -> String {
    reason.chars().take(MESSAGE_LIMIT).collect()
}
