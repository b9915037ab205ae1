//! DataForSEO account credentials.
//!
//! The API authenticates with HTTP Basic using the account login and an
//! API password. Credentials are caller-owned configuration; the
//! environment loader is an opt-in convenience, not something the
//! pipeline reaches for itself.

use std::fmt;

use crate::error::FinderError;

/// Environment variable holding the account login.
const ENV_LOGIN: &str = "DATAFORSEO_LOGIN";

/// Preferred environment variable for the API password.
const ENV_API_PASSWORD: &str = "DATAFORSEO_API_PASSWORD";

/// Fallback environment variable for the API password.
const ENV_PASSWORD: &str = "DATAFORSEO_PASSWORD";

/// DataForSEO login/password pair for HTTP Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account login (usually an email address).
    pub login: String,
    /// API password.
    pub password: String,
}

impl Credentials {
    /// Create credentials from a login and password.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Load credentials from the environment.
    ///
    /// Reads `DATAFORSEO_LOGIN` and `DATAFORSEO_API_PASSWORD`,
    /// falling back to `DATAFORSEO_PASSWORD` for the latter.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Config`] if either value is missing or
    /// empty.
    pub fn from_env() -> Result<Self, FinderError> {
        let login = std::env::var(ENV_LOGIN).unwrap_or_default();
        let password = std::env::var(ENV_API_PASSWORD)
            .or_else(|_| std::env::var(ENV_PASSWORD))
            .unwrap_or_default();

        if login.is_empty() || password.is_empty() {
            return Err(FinderError::Config(format!(
                "missing credentials: set {ENV_LOGIN} and {ENV_API_PASSWORD} (or {ENV_PASSWORD})"
            )));
        }
        Ok(Self { login, password })
    }
}

// Manual Debug so the password never lands in logs or error output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}
