use crate::listing::JobListing;
use crate::traits::BoardId;
use std::collections::{BTreeMap, HashSet};

/// Merges per-board result lists in the given order.
///
/// The first listing seen for an identifying URL wins; listings without one
/// are dropped because they cannot be deduplicated. Output keeps first-seen
/// order.
pub fn aggregate<I>(lists: I) -> Vec<JobListing>
where
    I: IntoIterator<Item = Vec<JobListing>>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();

    for list in lists {
        for job in list {
            let Some(key) = job.identifying_url() else {
                continue;
            };
            if seen.insert(key.to_string()) {
                merged.push(job);
            }
        }
    }

    merged
}

/// How many listings each board contributed, in fan-out order.
pub fn count_by_source(jobs: &[JobListing]) -> BTreeMap<BoardId, usize> {
    let mut counts = BTreeMap::new();
    for source in jobs.iter().filter_map(|job| job.source) {
        *counts.entry(source).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, apply_url: Option<&str>, url: Option<&str>) -> JobListing {
        JobListing {
            title: Some(title.to_string()),
            apply_url: apply_url.map(str::to_string),
            url: url.map(str::to_string),
            ..Default::default()
        }
    }

    fn titles(jobs: &[JobListing]) -> Vec<&str> {
        jobs.iter().map(|j| j.display_title()).collect()
    }

    #[test]
    fn keeps_first_seen_across_lists() {
        let a = vec![
            job("a1", Some("https://x/1"), None),
            job("a2", None, Some("https://x/2")),
        ];
        let b = vec![
            job("b1", Some("https://x/2"), None),
            job("b2", Some("https://x/3"), None),
        ];
        let c = vec![
            job("c1", None, Some("https://x/1")),
            job("c2", Some("https://x/4"), None),
            job("c3", Some("https://x/3"), None),
        ];

        let merged = aggregate(vec![a, b, c]);

        assert_eq!(merged.len(), 4);
        assert_eq!(titles(&merged), vec!["a1", "a2", "b2", "c2"]);
    }

    #[test]
    fn drops_listings_without_url() {
        let merged = aggregate(vec![
            vec![job("nourl", None, None), job("ok", None, Some("https://x/1"))],
            vec![job("blank", Some(""), None)],
        ]);
        assert_eq!(titles(&merged), vec!["ok"]);
    }

    #[test]
    fn duplicates_within_one_list_collapse() {
        let merged = aggregate(vec![vec![
            job("first", Some("https://x/1"), None),
            job("second", Some("https://x/1"), None),
        ]]);
        assert_eq!(titles(&merged), vec!["first"]);
    }

    #[test]
    fn empty_inputs() {
        assert!(aggregate(Vec::<Vec<JobListing>>::new()).is_empty());
        assert!(aggregate(vec![vec![], vec![], vec![]]).is_empty());
    }

    #[test]
    fn counts_follow_board_order() {
        let jobs = vec![
            job("w", Some("https://x/1"), None).with_source(BoardId::Web3),
            job("c", Some("https://x/2"), None).with_source(BoardId::Careerjet),
            job("w2", Some("https://x/3"), None).with_source(BoardId::Web3),
            job("unknown", Some("https://x/4"), None),
        ];

        let counts: Vec<_> = count_by_source(&jobs).into_iter().collect();

        assert_eq!(counts, vec![(BoardId::Careerjet, 1), (BoardId::Web3, 2)]);
    }
}
