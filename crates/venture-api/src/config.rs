//! Configuration for the backend API client

use crate::error::{ApiError, Result};
use url::Url;

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the venture backend client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend (default: "http://localhost:8000")
    pub base_url: String,

    /// Overall request timeout in seconds (default: 120)
    ///
    /// Applies to every request the client issues. There is no per-stage
    /// deadline beyond this.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a new config with the given base URL and default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(base_url.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from environment variables
    ///
    /// Reads the base URL from `VENTURE_API_BASE` (defaults to
    /// "http://localhost:8000" when unset) and the timeout from
    /// `VENTURE_API_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("VENTURE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let timeout_secs = match std::env::var("VENTURE_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ApiError::Configuration(format!(
                    "VENTURE_API_TIMEOUT_SECS must be a number of seconds, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: normalize_base(base_url),
            timeout_secs,
        })
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base(base_url.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url).map_err(|e| {
            ApiError::Configuration(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;

        if self.timeout_secs == 0 {
            return Err(ApiError::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Endpoint paths are appended with a leading slash
fn normalize_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
