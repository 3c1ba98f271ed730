//! The response envelope shared by every tool.
//!
//! All tool output goes through [`format_cost_response`]: a header with the
//! title, generation timestamp, and data-source label; a body that is
//! either a fixed no-data notice or the pretty-printed payload; a footer
//! with a dashboard deep link so a human can verify the numbers. Handlers
//! never format output themselves.

use serde_json::Value;

/// Prefix for the verification deep link; the caller appends a
/// query-string describing the view it used.
const DASHBOARD_URL: &str = "https://app.mavvrik.ai/cost";

/// Data-source label shown in every header.
const SOURCE_LABEL: &str = "Mavvrik Intelligence Engine (Net Billable USD)";

/// Body used when the payload carries no rows.
const NO_DATA_NOTICE: &str = "> _No cost data found for the specified parameters._";

/// Wrap a result payload in the three-part text envelope.
pub fn format_cost_response(data: &Value, title: &str, filter_query: &str) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");
    let header = format!(
        "### {title}\n**Generated:** {generated}\n**Source:** {SOURCE_LABEL}\n"
    );

    let body = if is_empty_payload(data) {
        format!("\n{NO_DATA_NOTICE}\n")
    } else {
        // The payload stays raw JSON; the model does the parsing and the
        // explanation.
        let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        format!("\n```json\n{pretty}\n```\n")
    };

    let footer = format!(
        "\n---\n🔍 [**Click here to verify this data in the Mavvrik Dashboard**]({DASHBOARD_URL}?{filter_query})\n"
    );

    format!("{header}{body}{footer}")
}

/// Empty means: null, empty list, empty object, or empty string.
fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payloads_get_the_no_data_notice() {
        for payload in [json!(null), json!([]), json!({}), json!("")] {
            let text = format_cost_response(&payload, "Cost Trend", "view=trend");
            assert!(text.contains(NO_DATA_NOTICE), "payload {payload} should be empty");
            assert!(!text.contains("```json"));
        }
    }

    #[test]
    fn non_empty_payload_is_pretty_printed() {
        let payload = json!({"total_cost": 25.0, "currency": "USD"});
        let text = format_cost_response(&payload, "Cost Overview", "view=overview&provider=all");

        assert!(text.contains("### Cost Overview"));
        assert!(text.contains("**Generated:**"));
        assert!(text.contains(SOURCE_LABEL));
        assert!(text.contains("```json"));
        assert!(text.contains("\"total_cost\": 25.0"));
        assert!(text.contains("\"currency\": \"USD\""));
    }

    #[test]
    fn footer_appends_the_filter_query() {
        let text = format_cost_response(&json!([1]), "K8s", "view=k8s&group=namespace");
        assert!(text.contains("https://app.mavvrik.ai/cost?view=k8s&group=namespace"));
        assert!(text.contains("🔍"));
        assert!(text.contains("\n---\n"));
    }

    #[test]
    fn zero_is_not_an_empty_payload() {
        let text = format_cost_response(&json!(0), "Edge", "view=edge");
        assert!(!text.contains(NO_DATA_NOTICE));
    }
}
