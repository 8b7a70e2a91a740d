//! Client configuration.
//!
//! Values come from the environment, falling back to the defaults used by a
//! local development server:
//!
//! - `RECIPP_BASE_URL` - API root (default `http://localhost:3000`)
//! - `RECIPP_TIMEOUT_SECS` - optional per-request timeout in seconds

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the Recipp API, without a trailing slash
    pub base_url: String,
    /// Request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Self {
        let base_url =
            env::var("RECIPP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var("RECIPP_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    tracing::warn!("Ignoring invalid RECIPP_TIMEOUT_SECS value: {:?}", raw);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            base_url: normalize_base_url(base_url),
            timeout,
        }
    }
}

pub(crate) fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
