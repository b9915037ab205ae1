//! Error types for the keyword-finder crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Credentials never appear in error
//! messages.

/// Errors that can occur while fetching or processing keyword data.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// Invalid finder configuration or missing credentials.
    #[error("config error: {0}")]
    Config(String),

    /// Network-level failure reaching the provider.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider rejected the request or returned a failed task
    /// status. Carries the provider's own message.
    #[error("provider error: {0}")]
    Provider(String),
}

impl FinderError {
    /// Whether this error indicates the provider account has run out of
    /// credits.
    ///
    /// Classified by message content: a [`FinderError::Provider`] whose
    /// message contains `"payment"` or `"credit"` (case-insensitive).
    /// Quota exhaustion is fatal for a running bulk batch; transport
    /// errors never classify, whatever their text.
    pub fn is_quota_exhausted(&self) -> bool {
        match self {
            Self::Provider(message) => {
                let lower = message.to_lowercase();
                lower.contains("payment") || lower.contains("credit")
            }
            _ => false,
        }
    }
}

/// Convenience type alias for keyword-finder results.
pub type Result<T> = std::result::Result<T, FinderError>;
