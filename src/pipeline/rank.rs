//! Filtering and two-key ranking of extracted records.
//!
//! Drops any record lacking a keyword or either metric, or whose
//! difficulty is at or above the ceiling, then orders the survivors
//! descending by search volume with ties broken by ascending
//! difficulty.

use crate::pipeline::extract::ExtractedRecord;
use crate::types::{cmp_metrics, KeywordMetric};

/// Filter and rank extracted records.
///
/// The filter is strict: absence of either metric excludes a record
/// silently (that is the missing-field outcome, not an error), and the
/// ceiling is exclusive, so `difficulty == ceiling` is dropped.
/// Produces a fresh vector; the comparator fully specifies the order
/// between distinct keys.
pub fn rank(records: Vec<ExtractedRecord>, difficulty_ceiling: f64) -> Vec<KeywordMetric> {
    let mut metrics: Vec<KeywordMetric> = records
        .into_iter()
        .filter_map(|record| {
            let keyword = record.keyword?;
            let search_volume = record.search_volume?;
            let keyword_difficulty = record.keyword_difficulty?;
            (keyword_difficulty < difficulty_ceiling).then(|| KeywordMetric {
                keyword,
                search_volume,
                keyword_difficulty,
            })
        })
        .collect();

    metrics.sort_by(cmp_metrics);
    metrics
}
