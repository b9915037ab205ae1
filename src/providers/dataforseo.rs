//! DataForSEO Labs client for the Google `related_keywords/live` endpoint.
//!
//! Posts a one-element task array authenticated with HTTP Basic and
//! unwraps the task envelope (`tasks[0].result[0].items`). The provider
//! signals failure two ways — a non-2xx HTTP status, or a 2xx response
//! whose task `status_code` is not 20000 — and both map to
//! [`FinderError::Provider`].

use serde::Deserialize;
use serde_json::json;

use crate::config::FinderConfig;
use crate::credentials::Credentials;
use crate::error::FinderError;
use crate::provider::{RawItem, RelatedKeywordsProvider};

/// Production API base URL.
const DEFAULT_BASE_URL: &str = "https://api.dataforseo.com";

/// Endpoint path for live related-keyword lookups.
const RELATED_KEYWORDS_PATH: &str = "/v3/dataforseo_labs/google/related_keywords/live";

/// Task status code the provider uses for success.
const TASK_STATUS_OK: u32 = 20000;

/// Maximum length of an unparseable error body carried into a message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Canned message for an out-of-credits account. Contains "credits" on
/// purpose: bulk-mode quota classification keys off that substring.
const PAYMENT_REQUIRED_MESSAGE: &str =
    "Payment Required: your DataForSEO account may be out of credits; check your account balance";

/// HTTP client for the DataForSEO Labs related-keywords endpoint.
///
/// Cheap to clone per request is not needed — one client serves a whole
/// sequential batch. No explicit request timeout is set; the transport
/// default applies.
pub struct DataForSeoClient {
    credentials: Credentials,
    base_url: String,
    client: reqwest::Client,
}

impl DataForSeoClient {
    /// Create a client for the production API.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Set the base URL (useful for testing with mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{RELATED_KEYWORDS_PATH}",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl RelatedKeywordsProvider for DataForSeoClient {
    async fn related_keywords(
        &self,
        seed_keyword: &str,
        config: &FinderConfig,
    ) -> Result<Vec<RawItem>, FinderError> {
        tracing::trace!(seed_keyword, "DataForSEO related keywords request");

        let response = self
            .client
            .post(self.endpoint())
            .basic_auth(&self.credentials.login, Some(&self.credentials.password))
            .json(&build_task_body(seed_keyword, config))
            .send()
            .await
            .map_err(|e| FinderError::Transport(format!("DataForSEO request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FinderError::Transport(format!("DataForSEO response read failed: {e}")))?;

        if !status.is_success() {
            let message = error_message_from_body(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), %message, "DataForSEO request rejected");
            return Err(FinderError::Provider(message));
        }

        let items = parse_envelope(&body)?;
        tracing::debug!(seed_keyword, count = items.len(), "DataForSEO items received");
        Ok(items)
    }
}

/// Build the one-element task array the live endpoint expects.
///
/// Extracted as a separate function for testability against the wire
/// format.
pub(crate) fn build_task_body(seed_keyword: &str, config: &FinderConfig) -> serde_json::Value {
    json!([{
        "keyword": seed_keyword,
        "location_code": config.location_code,
        "language_code": config.language_code,
        "include_serp_info": config.include_serp_info,
        "include_clickstream_data": config.include_clickstream_data,
        "depth": config.depth,
        "limit": config.limit,
    }])
}

#[derive(Debug, Deserialize)]
struct TaskEnvelope {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct Task {
    status_code: u32,
    #[serde(default)]
    status_message: String,
    #[serde(default)]
    result: Option<Vec<TaskResult>>,
}

#[derive(Debug, Deserialize)]
struct TaskResult {
    #[serde(default)]
    items: Option<Vec<RawItem>>,
}

/// Unwrap a 2xx response body down to the raw result items.
///
/// A missing `result` or `items` on a successful task is an empty
/// suggestion list, not an error.
pub(crate) fn parse_envelope(body: &str) -> Result<Vec<RawItem>, FinderError> {
    let envelope: TaskEnvelope = serde_json::from_str(body)
        .map_err(|e| FinderError::Provider(format!("invalid response from DataForSEO: {e}")))?;

    let task = envelope
        .tasks
        .into_iter()
        .next()
        .ok_or_else(|| FinderError::Provider("invalid response from DataForSEO: no tasks".into()))?;

    if task.status_code != TASK_STATUS_OK {
        return Err(FinderError::Provider(format!(
            "API task error: {}",
            task.status_message
        )));
    }

    let items = task
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|r| r.items)
        .unwrap_or_default();
    Ok(items)
}

/// Derive a user-facing message from a non-2xx response.
///
/// Prefers the task `status_message` if the body is a task envelope,
/// then a top-level `error` field, then the raw body truncated to
/// [`MAX_ERROR_BODY_CHARS`]. HTTP 402 and payment/credit messages
/// collapse to the canned out-of-credits message.
pub(crate) fn error_message_from_body(status: u16, body: &str) -> String {
    let mut message = format!("API request failed: HTTP {status}");

    if !body.is_empty() {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(parsed) => {
                if let Some(task_message) = parsed["tasks"][0]["status_message"].as_str() {
                    message = task_message.to_string();
                } else if let Some(error) = parsed["error"].as_str() {
                    message = error.to_string();
                }
            }
            Err(_) => {
                message = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            }
        }
    }

    let lower = message.to_lowercase();
    if status == 402 || lower.contains("payment") || lower.contains("credit") {
        message = PAYMENT_REQUIRED_MESSAGE.to_string();
    }
    message
}
