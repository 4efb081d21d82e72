//! File number assignment for the deduplicated URL list.

/// A unique URL paired with the number its downloaded file is named after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedUrl<'a> {
    pub number: u64,
    pub url: &'a str,
}

/// Numbers `urls` contiguously from `start`, in list order.
///
/// Numbers are fixed before anything is dispatched, so a failed download
/// still owns its number.
pub fn assign_numbers<S: AsRef<str>>(urls: &[S], start: u32) -> Vec<NumberedUrl<'_>> {
    urls.iter()
        .zip(u64::from(start)..)
        .map(|(url, number)| NumberedUrl {
            number,
            url: url.as_ref(),
        })
        .collect()
}
