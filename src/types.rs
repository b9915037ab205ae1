//! Core types for keyword metrics and bulk aggregation results.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A keyword suggestion that passed filtering, with its provider metrics.
///
/// Only constructed when both metrics were resolvable on the source item
/// and the difficulty is below the configured ceiling. Immutable once
/// built; exists only transiently per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetric {
    /// The suggested keyword phrase.
    pub keyword: String,
    /// Estimated monthly search volume reported by the provider.
    pub search_volume: u64,
    /// Provider-estimated competitiveness score (0–100, lower is easier).
    pub keyword_difficulty: f64,
}

/// A keyword metric tagged with the seed keyword that produced it.
///
/// Serializes flat, so a row carries all four columns
/// (`seed_keyword`, `keyword`, `search_volume`, `keyword_difficulty`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkKeyword {
    /// The seed keyword whose search discovered this metric.
    pub seed_keyword: String,
    /// The discovered keyword and its metrics.
    #[serde(flatten)]
    pub metric: KeywordMetric,
}

/// A per-seed failure recorded during bulk processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedError {
    /// The seed keyword whose search failed.
    pub seed_keyword: String,
    /// The error message for that seed.
    pub error: String,
}

/// Outcome of a bulk search over many seed keywords.
///
/// Always carries whatever was accumulated before completion or a halt:
/// partial results are surfaced, never discarded.
#[derive(Debug, Clone, Default)]
pub struct BulkReport {
    /// Accumulated keywords across all processed seeds, deduplicated by
    /// `(keyword, seed_keyword)` and globally sorted by volume then
    /// difficulty.
    pub keywords: Vec<BulkKeyword>,
    /// Per-seed errors, in processing order.
    pub errors: Vec<SeedError>,
    /// True when a quota-exhausted provider error stopped the batch
    /// before all seeds were attempted. The triggering error is the
    /// last entry in `errors`.
    pub halted: bool,
}

/// Two-key ranking comparator: descending search volume, ties broken by
/// ascending keyword difficulty.
///
/// Fully specifies the order between any two metrics with distinct
/// keys, so callers need not rely on sort stability.
pub fn cmp_metrics(a: &KeywordMetric, b: &KeywordMetric) -> Ordering {
    b.search_volume
        .cmp(&a.search_volume)
        .then_with(|| {
            a.keyword_difficulty
                .partial_cmp(&b.keyword_difficulty)
                .unwrap_or(Ordering::Equal)
        })
}
