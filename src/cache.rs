//! In-memory TTL cache for ranked keyword results.
//!
//! Caches the final filtered, sorted metric list keyed by the
//! normalised seed keyword plus a hash of the request-shaping
//! parameters. Uses [`moka`] for async-friendly caching with
//! configurable TTL and automatic eviction. Nothing is ever persisted.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use std::time::Duration;

use moka::future::Cache;

use crate::config::FinderConfig;
use crate::types::KeywordMetric;

/// Maximum number of cached result sets.
const MAX_CACHE_ENTRIES: u64 = 100;

/// Global process-wide result cache.
///
/// Lazily initialised on first access. TTL is set when first created
/// and cannot be changed after initialisation.
static CACHE: OnceLock<Cache<CacheKey, Vec<KeywordMetric>>> = OnceLock::new();

/// Composite cache key: normalised seed keyword + parameter hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Lowercased, trimmed seed keyword.
    seed_keyword: String,
    /// Hash of the request-shaping config fields, so different
    /// locations, languages, or ceilings cache independently.
    params_hash: u64,
}

impl CacheKey {
    /// Build a deterministic cache key from a seed keyword and config.
    pub fn new(seed_keyword: &str, config: &FinderConfig) -> Self {
        Self {
            seed_keyword: seed_keyword.trim().to_lowercase(),
            params_hash: hash_params(config),
        }
    }
}

fn get_or_init_cache(ttl_seconds: u64) -> &'static Cache<CacheKey, Vec<KeywordMetric>> {
    CACHE.get_or_init(|| {
        Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build()
    })
}

/// Look up cached results for the given key.
///
/// Returns `Some(metrics)` on cache hit, `None` on miss.
pub async fn get(key: &CacheKey, ttl_seconds: u64) -> Option<Vec<KeywordMetric>> {
    get_or_init_cache(ttl_seconds).get(key).await
}

/// Insert ranked results into the cache.
pub async fn insert(key: CacheKey, metrics: Vec<KeywordMetric>, ttl_seconds: u64) {
    get_or_init_cache(ttl_seconds).insert(key, metrics).await;
}

/// Hash every config field that shapes the provider request or the
/// filtering outcome.
fn hash_params(config: &FinderConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.location_code.hash(&mut hasher);
    config.language_code.hash(&mut hasher);
    config.depth.hash(&mut hasher);
    config.limit.hash(&mut hasher);
    config.include_serp_info.hash(&mut hasher);
    config.include_clickstream_data.hash(&mut hasher);
    config.difficulty_ceiling.to_bits().hash(&mut hasher);
    hasher.finish()
}
