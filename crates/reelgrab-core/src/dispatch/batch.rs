//! Sequential batch loop over numbered URLs.

use std::path::Path;

use super::result::DownloadResult;
use crate::numbering::NumberedUrl;

/// One unit of work handed to a [`Dispatcher`].
#[derive(Debug, Clone, Copy)]
pub struct DispatchJob<'a> {
    pub url: &'a str,
    pub number: u64,
    pub output_dir: &'a Path,
}

/// Runs one download. Implementations must report failures through the
/// returned [`DownloadResult`] rather than panicking or erroring.
#[allow(async_fn_in_trait)]
pub trait Dispatcher {
    async fn dispatch(&self, job: &DispatchJob<'_>) -> DownloadResult;
}

/// Progress notifications from [`run_batch`]; `index` is 1-based.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Started {
        index: usize,
        total: usize,
        number: u64,
        url: &'a str,
    },
    Finished {
        index: usize,
        total: usize,
        result: &'a DownloadResult,
    },
}

/// Dispatches every entry in order, awaiting each before starting the next.
///
/// A failure never stops the loop; every entry gets exactly one result, in
/// the same order as `entries`.
pub async fn run_batch<D, F>(
    dispatcher: &D,
    entries: &[NumberedUrl<'_>],
    output_dir: &Path,
    mut on_event: F,
) -> Vec<DownloadResult>
where
    D: Dispatcher,
    F: FnMut(BatchEvent<'_>),
{
    let total = entries.len();
    let mut results = Vec::with_capacity(total);

    for (i, entry) in entries.iter().enumerate() {
        let index = i + 1;
        on_event(BatchEvent::Started {
            index,
            total,
            number: entry.number,
            url: entry.url,
        });

        let job = DispatchJob {
            url: entry.url,
            number: entry.number,
            output_dir,
        };
        let result = dispatcher.dispatch(&job).await;
        if result.success {
            tracing::info!(number = result.number, url = %result.url, "download ok");
        } else {
            tracing::warn!(
                number = result.number,
                url = %result.url,
                message = %result.message,
                "download failed"
            );
        }

        on_event(BatchEvent::Finished {
            index,
            total,
            result: &result,
        });
        results.push(result);
    }

    results
}
