//! Service-account identity for outbound requests.
//!
//! The backend authenticates a request by API key plus tenant scope. The
//! tenant header is sent under both its current and legacy names; older
//! gateway deployments only look at the legacy one.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use tracing::warn;

use mavvrik_core::{MavvrikError, Result, Settings};

/// API key header name.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Tenant scope header name.
pub const TENANT_HEADER: &str = "x-mavvrik-tenant";

/// Pre-rename tenant header, still required by older gateways.
pub const LEGACY_TENANT_HEADER: &str = "tenant";

/// Build the outbound header map for the configured service account.
///
/// Base content negotiation headers are always present. The credential
/// headers are only added when BOTH the API key and the tenant id are
/// configured; a partial pair is treated as unconfigured and warned about,
/// and the executor's pre-flight check will then refuse to dispatch.
pub fn auth_headers(settings: &Settings) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    match (settings.api_key.as_deref(), settings.tenant_id.as_deref()) {
        (Some(api_key), Some(tenant_id)) => {
            headers.insert(header_name(API_KEY_HEADER), header_value(api_key)?);
            let tenant = header_value(tenant_id)?;
            headers.insert(header_name(TENANT_HEADER), tenant.clone());
            headers.insert(header_name(LEGACY_TENANT_HEADER), tenant);
        }
        _ => {
            warn!("MAVVRIK_API_KEY or MAVVRIK_TENANT_ID missing; requests will be refused");
        }
    }

    Ok(headers)
}

fn header_name(name: &'static str) -> HeaderName {
    HeaderName::from_static(name)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| MavvrikError::Configuration("credential value is not header-safe".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_account_sends_both_tenant_headers() {
        let settings = Settings::default().with_credentials("key-123", "acme");
        let headers = auth_headers(&settings).unwrap();

        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "key-123");
        assert_eq!(headers.get(TENANT_HEADER).unwrap(), "acme");
        assert_eq!(headers.get(LEGACY_TENANT_HEADER).unwrap(), "acme");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn missing_credentials_yield_base_headers_only() {
        let headers = auth_headers(&Settings::default()).unwrap();
        assert!(headers.get(API_KEY_HEADER).is_none());
        assert!(headers.get(TENANT_HEADER).is_none());
        assert!(headers.get(LEGACY_TENANT_HEADER).is_none());
        assert!(headers.get(ACCEPT).is_some());
    }

    #[test]
    fn partial_credentials_count_as_unconfigured() {
        let mut settings = Settings::default();
        settings.api_key = Some("key-only".to_string());
        let headers = auth_headers(&settings).unwrap();
        assert!(headers.get(API_KEY_HEADER).is_none());
    }
}
