//! GraphQL executor for the Mavvrik backend.
//!
//! [`GraphqlClient`] owns one reqwest client (built once with the
//! configured timeout) and the service-account header map. It returns the
//! `data` object of a successful response, or a classified
//! [`MavvrikError`]; callers pattern-match on the error instead of relying
//! on transport exceptions. No retries: a failure is terminal for the
//! invocation.

use reqwest::header::HeaderMap;
use serde_json::{json, Value};
use tracing::{debug, error};

use mavvrik_core::{MavvrikError, Result, Settings};

use crate::identity::{self, LEGACY_TENANT_HEADER, TENANT_HEADER};

/// HTTP client for the Mavvrik GraphQL endpoint.
pub struct GraphqlClient {
    http: reqwest::Client,
    api_url: String,
    headers: HeaderMap,
    tenant_id: Option<String>,
}

impl GraphqlClient {
    /// Build a client from settings. Fails only on configuration problems
    /// (bad header values, TLS backend init).
    pub fn new(settings: &Settings) -> Result<Self> {
        let headers = identity::auth_headers(settings)?;
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| {
                MavvrikError::Configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
            headers,
            tenant_id: settings.tenant_id.clone(),
        })
    }

    /// Execute one GraphQL query with the service-account credentials.
    ///
    /// `variables` is the `{option, filter}` pair already serialized in its
    /// sparse wire form. Returns the response's `data` object.
    pub async fn execute(
        &self,
        query: &str,
        variables: Value,
        operation_name: &str,
    ) -> Result<Value> {
        // Refuse to send anything without tenant context; the backend would
        // answer for the wrong scope or reject with a confusing 400.
        if !self.headers.contains_key(TENANT_HEADER)
            && !self.headers.contains_key(LEGACY_TENANT_HEADER)
        {
            return Err(MavvrikError::Configuration(
                "Tenant ID missing from headers.".to_string(),
            ));
        }

        debug!(operation = operation_name, "executing GraphQL query");

        let response = self
            .http
            .post(&self.api_url)
            .headers(self.headers.clone())
            .json(&json!({"query": query, "variables": variables}))
            .send()
            .await
            .map_err(|e| MavvrikError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 => MavvrikError::InvalidApiKey,
                // Usually a valid key paired with the wrong tenant id.
                403 => MavvrikError::TenantForbidden(self.tenant_id.clone().unwrap_or_default()),
                code => MavvrikError::Backend(code),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| MavvrikError::Api(format!("invalid response body: {e}")))?;

        if let Some(errors) = payload.get("errors").and_then(Value::as_array) {
            error!(operation = operation_name, count = errors.len(), "GraphQL errors in response");
            let message = errors
                .first()
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("unknown GraphQL error");
            return Err(MavvrikError::Api(message.to_string()));
        }

        Ok(payload.get("data").cloned().unwrap_or_else(|| json!({})))
    }
}
