//! Finder configuration with sensible defaults.
//!
//! [`FinderConfig`] controls the provider request shape (location,
//! language, depth, paging limit), the difficulty ceiling used for
//! filtering, the pause between seeds in bulk mode, and result caching.
//! The defaults match the DataForSEO Labs parameters the tool has
//! always used: US English, depth 1, up to 1000 suggestions per seed.

use crate::error::FinderError;

/// Default exclusive upper bound on keyword difficulty.
pub const DEFAULT_DIFFICULTY_CEILING: f64 = 40.0;

/// Default number of suggestions requested per seed (provider maximum).
pub const DEFAULT_LIMIT: u32 = 1000;

/// Configuration for keyword discovery requests.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Provider location code. Defaults to 2840 (United States).
    pub location_code: u32,
    /// Provider language code. Defaults to `"en"`.
    pub language_code: String,
    /// Related-keywords crawl depth.
    pub depth: u8,
    /// Maximum number of raw suggestions requested per seed, 1–1000.
    pub limit: u32,
    /// Whether to ask the provider to include SERP data on each item.
    pub include_serp_info: bool,
    /// Whether to ask the provider to include clickstream data.
    pub include_clickstream_data: bool,
    /// Exclusive upper bound on keyword difficulty. Suggestions at or
    /// above this are discarded.
    pub difficulty_ceiling: f64,
    /// Fixed pause in milliseconds between seeds in bulk mode, to avoid
    /// bursting the provider rate limit.
    pub seed_delay_ms: u64,
    /// How long to cache ranked results in seconds. Set to 0 to disable
    /// caching.
    pub cache_ttl_seconds: u64,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            location_code: 2840,
            language_code: "en".to_string(),
            depth: 1,
            limit: DEFAULT_LIMIT,
            include_serp_info: true,
            include_clickstream_data: true,
            difficulty_ceiling: DEFAULT_DIFFICULTY_CEILING,
            seed_delay_ms: 500,
            cache_ttl_seconds: 600,
        }
    }
}

impl FinderConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `language_code` must not be empty
    /// - `limit` must be between 1 and 1000 (provider maximum)
    /// - `difficulty_ceiling` must be finite and greater than 0
    pub fn validate(&self) -> Result<(), FinderError> {
        if self.language_code.trim().is_empty() {
            return Err(FinderError::Config(
                "language_code must not be empty".into(),
            ));
        }
        if self.limit == 0 || self.limit > 1000 {
            return Err(FinderError::Config(
                "limit must be between 1 and 1000".into(),
            ));
        }
        if !self.difficulty_ceiling.is_finite() || self.difficulty_ceiling <= 0.0 {
            return Err(FinderError::Config(
                "difficulty_ceiling must be a positive finite number".into(),
            ));
        }
        Ok(())
    }
}
