//! Process-wide configuration for the Mavvrik MCP server.
//!
//! [`Settings`] is built once at startup (environment first, `.env` loaded
//! by the binary before [`Settings::from_env`] runs) and then passed by
//! reference into every client and handler. No business logic reads the
//! environment after startup.

use serde::{Deserialize, Serialize};

/// Default GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://graphql.mavvrik.dev";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default ceiling for user-supplied list sizes (top-N rankings).
pub const DEFAULT_MAX_LIST_LIMIT: u32 = 20;

/// Mavvrik MCP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// GraphQL endpoint URL.
    pub api_url: String,

    /// Service-account API key. Optional so a missing key fails per-request
    /// instead of crashing startup.
    pub api_key: Option<String>,

    /// Tenant the service account is bound to.
    pub tenant_id: Option<String>,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Hard cap applied to any user-supplied `limit` parameter.
    pub max_list_limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            tenant_id: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_list_limit: DEFAULT_MAX_LIST_LIMIT,
        }
    }
}

impl Settings {
    /// Build settings from the process environment.
    ///
    /// Recognized variables: `MAVVRIK_API_URL`, `MAVVRIK_API_KEY`,
    /// `MAVVRIK_TENANT_ID`, `MAVVRIK_REQUEST_TIMEOUT_SECS`,
    /// `MAVVRIK_MAX_LIST_LIMIT`. Empty values count as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env_string("MAVVRIK_API_URL").unwrap_or(defaults.api_url),
            api_key: env_string("MAVVRIK_API_KEY"),
            tenant_id: env_string("MAVVRIK_TENANT_ID"),
            request_timeout_secs: env_parsed("MAVVRIK_REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            max_list_limit: env_parsed("MAVVRIK_MAX_LIST_LIMIT")
                .unwrap_or(defaults.max_list_limit),
        }
    }

    /// Set a custom API endpoint.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the service-account credentials.
    pub fn with_credentials(
        mut self,
        api_key: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        self.api_key = Some(api_key.into());
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set the list-size ceiling.
    pub fn with_max_list_limit(mut self, limit: u32) -> Self {
        self.max_list_limit = limit;
        self
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_string(key).and_then(|v| v.parse().ok())
}
