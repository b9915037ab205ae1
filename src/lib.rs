//! # keyword-finder
//!
//! High-volume, low-competition keyword discovery over the DataForSEO
//! Labs API.
//!
//! Given a seed keyword, this crate fetches related-keyword suggestions
//! from the `related_keywords/live` endpoint, normalizes the provider's
//! schema-variable items, filters out anything missing metrics or at or
//! above a difficulty ceiling, and returns the survivors ordered by
//! search volume (descending) with difficulty (ascending) breaking
//! ties. A bulk mode repeats this for many seeds sequentially,
//! accumulating a deduplicated, globally sorted result set.
//!
//! ## Design
//!
//! - Raw provider items stay untyped JSON; field extraction probes an
//!   ordered list of nested paths, since the schema varies
//!   response-to-response
//! - Filtering and ranking are pure functions over in-memory lists
//! - Bulk processing is strictly sequential with a fixed pause between
//!   seeds; an out-of-credits provider error halts the batch, any other
//!   per-seed error is recorded and skipped
//! - In-memory TTL cache of ranked results; nothing is persisted
//!
//! ## Security
//!
//! - Credentials are caller-owned and never appear in errors or logs
//! - No network listeners — this is a library, not a server
//! - Seed keywords are logged only at trace/debug level

pub mod cache;
pub mod config;
pub mod credentials;
pub mod error;
pub mod pipeline;
pub mod provider;
pub mod providers;
pub mod types;

pub use config::{FinderConfig, DEFAULT_DIFFICULTY_CEILING};
pub use credentials::Credentials;
pub use error::{FinderError, Result};
pub use pipeline::bulk::parse_seed_list;
pub use pipeline::extract::{extract, ExtractedRecord};
pub use pipeline::rank::rank;
pub use provider::{RawItem, RelatedKeywordsProvider};
pub use providers::DataForSeoClient;
pub use types::{BulkKeyword, BulkReport, KeywordMetric, SeedError};

/// Find low-competition keywords related to one seed keyword.
///
/// Convenience wrapper that builds a [`DataForSeoClient`] from the
/// given credentials and runs the full pipeline.
///
/// # Errors
///
/// Returns [`FinderError::Config`] for an invalid config or blank seed,
/// [`FinderError::Transport`] when the provider is unreachable, and
/// [`FinderError::Provider`] when the provider rejects the request. Any
/// error aborts the request entirely.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> keyword_finder::Result<()> {
/// let credentials = keyword_finder::Credentials::from_env()?;
/// let config = keyword_finder::FinderConfig::default();
/// let keywords = keyword_finder::find_keywords("running shoes", &credentials, &config).await?;
/// for kw in &keywords {
///     println!("{}: vol {}, kd {}", kw.keyword, kw.search_volume, kw.keyword_difficulty);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find_keywords(
    seed_keyword: &str,
    credentials: &Credentials,
    config: &FinderConfig,
) -> Result<Vec<KeywordMetric>> {
    let client = DataForSeoClient::new(credentials.clone());
    find_keywords_with(&client, seed_keyword, config).await
}

/// Find keywords through any [`RelatedKeywordsProvider`].
///
/// The provider seam exists so tests and alternative backends can run
/// the identical extract/filter/rank pipeline.
///
/// # Errors
///
/// Same as [`find_keywords`].
pub async fn find_keywords_with<P: RelatedKeywordsProvider>(
    provider: &P,
    seed_keyword: &str,
    config: &FinderConfig,
) -> Result<Vec<KeywordMetric>> {
    config.validate()?;
    pipeline::search::run(provider, seed_keyword, config).await
}

/// Run a bulk search over many seed keywords sequentially.
///
/// Each seed's results are tagged with the seed, merged into one
/// accumulation deduplicated by `(keyword, seed_keyword)`, and the
/// whole set is re-sorted after every seed. Per-seed failures are
/// recorded in the report; an out-of-credits provider error halts the
/// batch and surfaces the partial accumulation.
///
/// # Errors
///
/// Returns [`FinderError::Config`] if the config is invalid or `seeds`
/// is empty. Per-seed provider/transport errors never fail the call —
/// they land in [`BulkReport::errors`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> keyword_finder::Result<()> {
/// let credentials = keyword_finder::Credentials::from_env()?;
/// let config = keyword_finder::FinderConfig::default();
/// let seeds = keyword_finder::parse_seed_list("running shoes, yoga mats");
/// let report = keyword_finder::find_keywords_bulk(&seeds, &credentials, &config).await?;
/// println!("{} keywords, {} errors", report.keywords.len(), report.errors.len());
/// # Ok(())
/// # }
/// ```
pub async fn find_keywords_bulk(
    seeds: &[String],
    credentials: &Credentials,
    config: &FinderConfig,
) -> Result<BulkReport> {
    let client = DataForSeoClient::new(credentials.clone());
    find_keywords_bulk_with(&client, seeds, config).await
}

/// Bulk search through any [`RelatedKeywordsProvider`].
///
/// # Errors
///
/// Same as [`find_keywords_bulk`].
pub async fn find_keywords_bulk_with<P: RelatedKeywordsProvider>(
    provider: &P,
    seeds: &[String],
    config: &FinderConfig,
) -> Result<BulkReport> {
    config.validate()?;
    if seeds.is_empty() {
        return Err(FinderError::Config(
            "at least one seed keyword is required".into(),
        ));
    }
    Ok(pipeline::bulk::run_bulk(provider, seeds, config).await)
}
