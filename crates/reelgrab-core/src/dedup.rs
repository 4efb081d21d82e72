//! Order-preserving deduplication of post URLs by content id.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::url_model::content_id;

/// A URL that was dropped because an earlier URL had the same content id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    /// 1-based position of the dropped URL in the input list.
    pub position: usize,
    pub content_id: String,
    /// 1-based input position of the URL that was kept. This is its line in
    /// the input, not its index in [`DedupReport::unique`].
    pub first_position: usize,
}

/// Result of deduplicating an input list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupReport {
    /// Kept URLs, in order of first occurrence.
    pub unique: Vec<String>,
    /// Dropped URLs, in input order.
    pub duplicates: Vec<Duplicate>,
}

impl DedupReport {
    /// Length of the input list this report was built from.
    pub fn total(&self) -> usize {
        self.unique.len() + self.duplicates.len()
    }

    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Keeps the first URL for each content id and records every later one as a
/// [`Duplicate`]. URLs are compared only through [`content_id`]; no other
/// normalization is applied.
pub fn dedup_urls<S: AsRef<str>>(urls: &[S]) -> DedupReport {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut report = DedupReport::default();

    for (idx, url) in urls.iter().enumerate() {
        let url = url.as_ref();
        let id = content_id(url);
        let position = idx + 1;
        match first_seen.entry(id) {
            Entry::Occupied(first) => {
                tracing::debug!(position, id, first = *first.get(), "skipping duplicate");
                report.duplicates.push(Duplicate {
                    position,
                    content_id: id.to_string(),
                    first_position: *first.get(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(position);
                report.unique.push(url.to_string());
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reel_and_post_with_same_id_collapse() {
        let urls = [
            "https://instagram.com/reel/ABC/",
            "https://instagram.com/p/ABC/",
            "https://instagram.com/reel/XYZ/",
        ];
        let report = dedup_urls(&urls);
        assert_eq!(
            report.unique,
            vec![
                "https://instagram.com/reel/ABC/".to_string(),
                "https://instagram.com/reel/XYZ/".to_string(),
            ]
        );
        assert_eq!(
            report.duplicates,
            vec![Duplicate {
                position: 2,
                content_id: "ABC".to_string(),
                first_position: 1,
            }]
        );
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn first_position_refers_to_input_order() {
        let urls = [
            "https://instagram.com/reel/A/",
            "https://instagram.com/reel/A/?igsh=x",
            "https://instagram.com/reel/B/",
            "https://instagram.com/p/B/",
            "https://instagram.com/p/A/",
        ];
        let report = dedup_urls(&urls);
        assert_eq!(report.unique.len(), 2);
        let refs: Vec<(usize, usize)> = report
            .duplicates
            .iter()
            .map(|d| (d.position, d.first_position))
            .collect();
        assert_eq!(refs, vec![(2, 1), (4, 3), (5, 1)]);
    }

    #[test]
    fn unmatched_urls_only_collapse_when_identical() {
        let urls = [
            "https://instagram.com/stories/x/1/",
            "https://instagram.com/stories/x/1/?hl=en",
            "https://instagram.com/stories/x/1/",
        ];
        let report = dedup_urls(&urls);
        assert_eq!(report.unique.len(), 2);
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].position, 3);
        assert_eq!(report.duplicates[0].content_id, urls[0]);
    }

    #[test]
    fn dedup_is_idempotent() {
        let urls = vec![
            "https://instagram.com/reel/ONE/".to_string(),
            "https://instagram.com/reel/TWO/".to_string(),
            "https://instagram.com/p/ONE/".to_string(),
            "https://instagram.com/reel/THREE/".to_string(),
            "https://instagram.com/reel/TWO/".to_string(),
        ];
        let first = dedup_urls(&urls);
        let second = dedup_urls(&first.unique);
        assert_eq!(second.unique, first.unique);
        assert!(second.is_clean());
    }

    #[test]
    fn empty_input() {
        let report = dedup_urls::<String>(&[]);
        assert!(report.unique.is_empty());
        assert!(report.is_clean());
        assert_eq!(report.total(), 0);
    }
}
