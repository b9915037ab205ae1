//! Trait definition for pluggable keyword-data providers.
//!
//! The pipeline talks to the outside world through
//! [`RelatedKeywordsProvider`]; the production implementation is
//! [`DataForSeoClient`](crate::providers::DataForSeoClient), and tests
//! substitute scripted mocks.

use crate::config::FinderConfig;
use crate::error::FinderError;

/// A raw, schema-variable result item as returned by the provider.
///
/// Kept as untyped JSON because the provider nests the interesting
/// fields under several alternative paths response-to-response; the
/// extractor probes them in priority order.
pub type RawItem = serde_json::Value;

/// A source of related-keyword suggestions for a seed keyword.
///
/// Implementors handle their own request construction, authentication,
/// and response-envelope parsing, and return the raw result items for
/// the pipeline to normalize. All implementations must be `Send + Sync`
/// so a single client can serve sequential bulk batches.
pub trait RelatedKeywordsProvider: Send + Sync {
    /// Fetch raw related-keyword items for one seed keyword.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Transport`] for network-level failures and
    /// [`FinderError::Provider`] when the provider rejects the request
    /// or reports a failed task status.
    fn related_keywords(
        &self,
        seed_keyword: &str,
        config: &FinderConfig,
    ) -> impl std::future::Future<Output = Result<Vec<RawItem>, FinderError>> + Send;
}
