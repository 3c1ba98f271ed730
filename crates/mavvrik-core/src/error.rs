//! Error types for Mavvrik MCP operations.
//!
//! Every failure a tool invocation can hit is classified here. Errors are
//! designed for visibility: no silent failures, no automatic retry. A tool
//! handler converts any of these into a plain-text diagnostic for the
//! calling agent; nothing below the handler boundary swallows an error.

use thiserror::Error;

/// Result type alias using [`MavvrikError`].
pub type Result<T> = std::result::Result<T, MavvrikError>;

/// Classified failures for the query pipeline.
///
/// The display strings double as the user-facing diagnostic text, so they
/// stay short and name the actionable cause.
#[derive(Debug, Error)]
pub enum MavvrikError {
    /// Required tenant context missing from outbound headers. Never sent to
    /// the backend; caught before the request is dispatched.
    #[error("Configuration Error: {0}")]
    Configuration(String),

    /// Backend returned 401: the API key itself is not valid.
    #[error("Access Denied: Invalid API Key.")]
    InvalidApiKey,

    /// Backend returned 403: the key is valid but cannot access the
    /// configured tenant.
    #[error("Permission Denied: API Key cannot access tenant '{0}'.")]
    TenantForbidden(String),

    /// Any other non-2xx status. Only the code is surfaced.
    #[error("System Error ({0}).")]
    Backend(u16),

    /// Connection refused, DNS failure, or request timeout.
    #[error("Connection Failed: {0}")]
    Connection(String),

    /// The GraphQL response carried an `errors` array despite a 2xx status.
    /// Holds the first error's message.
    #[error("Mavvrik API Error: {0}")]
    Api(String),

    /// Building the filter/option pair failed.
    #[error("Validation Error: {0}")]
    Validation(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MavvrikError {
    /// Check if this error is a network-level failure (as opposed to a
    /// backend- or configuration-level one).
    pub fn is_network_error(&self) -> bool {
        matches!(self, MavvrikError::Connection(_))
    }

    /// Check if this error came back from the backend's auth layer.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            MavvrikError::InvalidApiKey | MavvrikError::TenantForbidden(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_is_network_error() {
        let err = MavvrikError::Connection("connection refused".to_string());
        assert!(err.is_network_error());
        assert!(!err.is_auth_error());
    }

    #[test]
    fn status_errors_classify_as_auth() {
        assert!(MavvrikError::InvalidApiKey.is_auth_error());
        assert!(MavvrikError::TenantForbidden("acme".to_string()).is_auth_error());
        assert!(!MavvrikError::Backend(500).is_auth_error());
    }

    #[test]
    fn display_messages_name_the_cause() {
        let err = MavvrikError::TenantForbidden("acme".to_string());
        assert_eq!(
            err.to_string(),
            "Permission Denied: API Key cannot access tenant 'acme'."
        );
        assert_eq!(MavvrikError::Backend(502).to_string(), "System Error (502).");
    }
}
