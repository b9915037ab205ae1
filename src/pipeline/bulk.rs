//! Bulk aggregation over many seed keywords.
//!
//! Seeds are processed strictly sequentially with a fixed pause between
//! them, to stay inside the provider's rate limit. Results accumulate
//! across seeds with `(keyword, seed_keyword)` deduplication and a full
//! re-sort after each seed. A quota-exhausted provider error halts the
//! whole batch immediately; any other per-seed error is recorded and
//! processing continues.

use std::collections::HashSet;
use std::time::Duration;

use crate::config::FinderConfig;
use crate::pipeline::search;
use crate::provider::RelatedKeywordsProvider;
use crate::types::{cmp_metrics, BulkKeyword, BulkReport, SeedError};

/// Split a user-supplied seed list on commas and newlines.
///
/// Entries are trimmed and empties dropped, so `"a, b\n\nc"` parses to
/// three seeds.
pub fn parse_seed_list(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|seed| !seed.is_empty())
        .map(str::to_string)
        .collect()
}

/// Process seeds one at a time, accumulating a deduplicated, globally
/// sorted result set.
///
/// The report always carries whatever was gathered: on a quota halt the
/// partial accumulation is returned with `halted` set and the
/// triggering error as the last entry in `errors`. The inter-seed pause
/// runs before every seed after the first, never after the last or
/// after a halt.
pub async fn run_bulk<P: RelatedKeywordsProvider>(
    provider: &P,
    seeds: &[String],
    config: &FinderConfig,
) -> BulkReport {
    let mut report = BulkReport::default();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for (index, seed_keyword) in seeds.iter().enumerate() {
        if index > 0 && config.seed_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.seed_delay_ms)).await;
        }
        tracing::debug!(
            %seed_keyword,
            position = index + 1,
            total = seeds.len(),
            "processing seed"
        );

        match search::run(provider, seed_keyword, config).await {
            Ok(metrics) => {
                for metric in metrics {
                    let key = (metric.keyword.clone(), seed_keyword.clone());
                    if seen.insert(key) {
                        report.keywords.push(BulkKeyword {
                            seed_keyword: seed_keyword.clone(),
                            metric,
                        });
                    }
                }
                // Re-sort the full accumulation after each seed.
                report
                    .keywords
                    .sort_by(|a, b| cmp_metrics(&a.metric, &b.metric));
            }
            Err(err) => {
                tracing::warn!(%seed_keyword, error = %err, "seed failed");
                let quota_exhausted = err.is_quota_exhausted();
                report.errors.push(SeedError {
                    seed_keyword: seed_keyword.clone(),
                    error: err.to_string(),
                });
                if quota_exhausted {
                    tracing::warn!(
                        remaining = seeds.len() - index - 1,
                        "quota exhausted, halting batch"
                    );
                    report.halted = true;
                    break;
                }
            }
        }
    }

    report
}
