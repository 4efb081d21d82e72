//! Dispatch of unique URLs to the external download utility.
//!
//! One utility process per URL, strictly one at a time. Every outcome (exit
//! code, timeout, launch failure) is folded into a [`DownloadResult`]; nothing
//! here aborts a batch.

mod args;
mod batch;
mod cookies;
mod process;
mod result;
mod utility;

pub use args::{download_args, output_template};
pub use batch::{run_batch, BatchEvent, DispatchJob, Dispatcher};
pub use cookies::{resolve_cookies, CookieResolution, CookieSource};
pub use process::ProcessDispatcher;
pub use result::{truncate_message, DownloadResult, MESSAGE_LIMIT};
pub use utility::{detect_utility, UtilityCommand};
