//! Single-seed search: cache lookup, fetch, extract, rank.

use crate::cache::{self, CacheKey};
use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::pipeline::extract::extract;
use crate::pipeline::rank::rank;
use crate::provider::RelatedKeywordsProvider;
use crate::types::KeywordMetric;

/// Run the full single-seed pipeline.
///
/// # Pipeline
///
/// 1. Check the result cache (skipped when `cache_ttl_seconds` is 0)
/// 2. Fetch raw items from the provider
/// 3. Extract each item's keyword, volume, and difficulty
/// 4. Filter against the difficulty ceiling and sort
/// 5. Cache the ranked list
///
/// # Errors
///
/// Returns [`FinderError::Config`] for a blank seed, and propagates any
/// provider or transport error — a single-seed request has no partial
/// outcome.
pub async fn run<P: RelatedKeywordsProvider>(
    provider: &P,
    seed_keyword: &str,
    config: &FinderConfig,
) -> Result<Vec<KeywordMetric>, FinderError> {
    if seed_keyword.trim().is_empty() {
        return Err(FinderError::Config("seed keyword must not be empty".into()));
    }

    let cache_key = CacheKey::new(seed_keyword, config);
    if config.cache_ttl_seconds > 0 {
        if let Some(cached) = cache::get(&cache_key, config.cache_ttl_seconds).await {
            tracing::debug!(seed_keyword, count = cached.len(), "cache hit");
            return Ok(cached);
        }
    }

    let raw_items = provider.related_keywords(seed_keyword, config).await?;
    let records = raw_items.iter().map(extract).collect();
    let ranked = rank(records, config.difficulty_ceiling);
    tracing::debug!(
        seed_keyword,
        raw = raw_items.len(),
        kept = ranked.len(),
        "keywords extracted and ranked"
    );

    if config.cache_ttl_seconds > 0 {
        cache::insert(cache_key, ranked.clone(), config.cache_ttl_seconds).await;
    }

    Ok(ranked)
}
