//! End-to-end handler tests against a mocked GraphQL backend.
//!
//! Each test drives a full tool invocation: request normalization, wire
//! variable construction (asserted through wiremock body matchers),
//! post-processing, and the response envelope.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mavvrik_client::GraphqlClient;
use mavvrik_core::Settings;
use mavvrik_finops::{
    CostCompareRequest, CostOverviewRequest, CostRankingsRequest, CostTrendRequest, FinopsTools,
    Granularity, K8sDrilldownRequest, K8sGroupBy, RankingCategory, SplitBy,
};

fn tools_for(server: &MockServer) -> FinopsTools {
    let settings = Settings::default()
        .with_api_url(server.uri())
        .with_credentials("test-key", "test-tenant");
    FinopsTools::new(GraphqlClient::new(&settings).unwrap(), &settings)
}

fn costs_response(rows: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"data": {"costs": rows}}))
}

#[tokio::test]
async fn overview_sums_rows_into_one_scalar() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "variables": {
                "option": {
                    "xAxis": "date",
                    "interval": "month",
                    "groupBy": "provider_code",
                    "fromDate": "2024-06-01",
                    "toDate": "2024-06-30",
                    "options": ["discount", "tax"],
                },
                "filter": {},
            }
        })))
        .respond_with(costs_response(json!([
            {"cost": 10.0, "date": "2024-06-01", "groupId": "aws", "groupName": "AWS"},
            {"cost": 15.0, "date": "2024-06-02", "groupId": "gcp", "groupName": "GCP"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_overview(CostOverviewRequest {
            from_date: "2024-06-01".to_string(),
            to_date: "2024-06-30".to_string(),
            granularity: Granularity::Month,
            provider: None,
        })
        .await;

    assert!(text.contains("### Cost Overview"));
    assert!(text.contains("\"total_cost\": 25.0"));
    assert!(text.contains("\"currency\": \"USD\""));
    assert!(text.contains("\"period\": \"2024-06-01 to 2024-06-30\""));
    assert!(text.contains("view=overview&provider=all"));
}

#[tokio::test]
async fn overview_scopes_filter_to_normalized_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"filter": {"provider_code": ["aws"]}}
        })))
        .respond_with(costs_response(json!([{"cost": 7.5, "date": "2024-06-01"}])))
        .expect(1)
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_overview(CostOverviewRequest {
            from_date: "2024-06-01".to_string(),
            to_date: "2024-06-30".to_string(),
            granularity: Granularity::Month,
            provider: Some("Amazon".to_string()),
        })
        .await;

    assert!(text.contains("\"total_cost\": 7.5"));
    assert!(text.contains("view=overview&provider=aws"));
}

#[tokio::test]
async fn trend_without_split_merges_rows_per_date() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"option": {"groupBy": "provider_code", "interval": "day"}}
        })))
        .respond_with(costs_response(json!([
            {"cost": 5.0, "date": "d1", "groupId": "aws", "groupName": "AWS"},
            {"cost": 7.0, "date": "d1", "groupId": "gcp", "groupName": "GCP"},
            {"cost": 3.0, "date": "d2", "groupId": "aws", "groupName": "AWS"},
        ])))
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_trend(CostTrendRequest {
            from_date: "2024-06-01".to_string(),
            to_date: "2024-06-30".to_string(),
            granularity: Granularity::Day,
            split_by: None,
        })
        .await;

    assert!(text.contains("### Cost Trend (day)"));
    assert!(text.contains("\"cost\": 12.0"));
    assert!(text.contains("\"cost\": 3.0"));
    // Merged: the hidden provider grouping must not leak out.
    assert!(!text.contains("groupId"));
    // Sorted ascending by date.
    assert!(text.find("d1").unwrap() < text.find("d2").unwrap());
    assert!(text.contains("view=trend&interval=day&split=total"));
}

#[tokio::test]
async fn trend_with_split_passes_rows_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"option": {"groupBy": "product_name"}}
        })))
        .respond_with(costs_response(json!([
            {"cost": 5.0, "date": "d1", "groupId": "ec2", "groupName": "EC2"},
            {"cost": 7.0, "date": "d1", "groupId": "s3", "groupName": "S3"},
            {"cost": 3.0, "date": "d2", "groupId": "ec2", "groupName": "EC2"},
        ])))
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_trend(CostTrendRequest {
            from_date: "2024-06-01".to_string(),
            to_date: "2024-06-30".to_string(),
            granularity: Granularity::Day,
            split_by: Some(SplitBy::ProductName),
        })
        .await;

    // Row count preserved: both d1 rows survive unmerged.
    assert_eq!(text.matches("\"date\": \"d1\"").count(), 2);
    assert!(text.contains("\"groupId\": \"ec2\""));
    assert!(text.contains("view=trend&interval=day&split=product_name"));
}

#[tokio::test]
async fn trend_with_no_rows_shows_no_data_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(costs_response(json!([])))
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_trend(CostTrendRequest {
            from_date: "2024-06-01".to_string(),
            to_date: "2024-06-30".to_string(),
            granularity: Granularity::Day,
            split_by: None,
        })
        .await;

    assert!(text.contains("No cost data found for the specified parameters"));
    assert!(!text.contains("```json"));
}

#[tokio::test]
async fn rankings_clamp_limit_and_normalize_month() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {
                "option": {
                    "category": "product_name",
                    "month": "2024-06-01",
                    "limit": 20,
                    "options": ["discount", "tax"],
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"costTopEntries": {"topEntries": [
                {"cost": 120.5, "groupId": "ec2", "groupName": "Amazon EC2"},
            ]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_rankings(CostRankingsRequest {
            month: "2024-06".to_string(),
            category: RankingCategory::ProductName,
            limit: 999,
        })
        .await;

    // The clamped limit, not the requested one, is reported back.
    assert!(text.contains("### Top 20 by product_name"));
    assert!(text.contains("\"groupName\": \"Amazon EC2\""));
    assert!(text.contains("view=rankings&dim=product_name&month=2024-06-01"));
}

#[tokio::test]
async fn rankings_pass_full_dates_through_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"option": {"month": "2024-06-15", "limit": 5}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"costTopEntries": {"topEntries": []}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_rankings(CostRankingsRequest {
            month: "2024-06-15".to_string(),
            category: RankingCategory::ProductName,
            limit: 5,
        })
        .await;

    assert!(text.contains("### Top 5 by product_name"));
    assert!(text.contains("month=2024-06-15"));
}

#[tokio::test]
async fn k8s_drilldown_returns_raw_grouped_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {
                "option": {"groupBy": "namespace", "interval": "month", "xAxis": "date"}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"k8sCosts": [
                {"groupId": "ns-1", "groupName": "payments", "cost": 42.0, "date": "2024-06-01"},
                {"groupId": "ns-2", "groupName": "checkout", "cost": 13.37, "date": "2024-06-01"},
            ]}
        })))
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .k8s_drilldown(K8sDrilldownRequest {
            from_date: "2024-06-01".to_string(),
            to_date: "2024-06-30".to_string(),
            group_by: K8sGroupBy::Namespace,
        })
        .await;

    assert!(text.contains("### Kubernetes Cost by namespace"));
    assert!(text.contains("\"groupName\": \"payments\""));
    assert!(text.contains("\"groupName\": \"checkout\""));
    assert!(text.contains("view=k8s&group=namespace"));
}

#[tokio::test]
async fn compare_computes_variance_from_concurrent_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"option": {"fromDate": "2024-06-01", "toDate": "2024-06-30"}}
        })))
        .respond_with(costs_response(json!([
            {"cost": 70.0, "date": "2024-06-01"},
            {"cost": 50.0, "date": "2024-06-01"},
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"option": {"fromDate": "2024-05-01", "toDate": "2024-05-31"}}
        })))
        .respond_with(costs_response(json!([{"cost": 100.0, "date": "2024-05-01"}])))
        .expect(1)
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_compare(CostCompareRequest {
            base_start: "2024-06-01".to_string(),
            base_end: "2024-06-30".to_string(),
            comp_start: "2024-05-01".to_string(),
            comp_end: "2024-05-31".to_string(),
        })
        .await;

    assert!(text.contains("### Period Comparison"));
    assert!(text.contains("\"absolute_change\": 20.0"));
    assert!(text.contains("\"percent_change\": \"20.0%\""));
    assert!(text.contains("\"total_cost\": 120.0"));
    assert!(text.contains("\"total_cost\": 100.0"));
    assert!(text.contains("view=compare"));
}

#[tokio::test]
async fn compare_defines_percent_as_zero_when_comparison_is_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"option": {"fromDate": "2024-06-01"}}
        })))
        .respond_with(costs_response(json!([{"cost": 55.0, "date": "2024-06-01"}])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"option": {"fromDate": "2024-05-01"}}
        })))
        .respond_with(costs_response(json!([])))
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_compare(CostCompareRequest {
            base_start: "2024-06-01".to_string(),
            base_end: "2024-06-30".to_string(),
            comp_start: "2024-05-01".to_string(),
            comp_end: "2024-05-31".to_string(),
        })
        .await;

    assert!(text.contains("\"percent_change\": \"0.0%\""));
    assert!(text.contains("\"absolute_change\": 55.0"));
}

#[tokio::test]
async fn unauthorized_backend_becomes_diagnostic_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_overview(CostOverviewRequest {
            from_date: "2024-06-01".to_string(),
            to_date: "2024-06-30".to_string(),
            granularity: Granularity::Month,
            provider: None,
        })
        .await;

    assert_eq!(text, "❌ Access Denied: Invalid API Key.");
}

#[tokio::test]
async fn forbidden_backend_names_the_tenant_in_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .k8s_drilldown(K8sDrilldownRequest {
            from_date: "2024-06-01".to_string(),
            to_date: "2024-06-30".to_string(),
            group_by: K8sGroupBy::ClusterId,
        })
        .await;

    assert!(text.starts_with("❌ Permission Denied"));
    assert!(text.contains("test-tenant"));
}

#[tokio::test]
async fn timeout_becomes_connection_failure_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            costs_response(json!([])).set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let settings = Settings::default()
        .with_api_url(server.uri())
        .with_credentials("test-key", "test-tenant")
        .with_timeout_secs(1);
    let tools = FinopsTools::new(GraphqlClient::new(&settings).unwrap(), &settings);

    let text = tools
        .cost_trend(CostTrendRequest {
            from_date: "2024-06-01".to_string(),
            to_date: "2024-06-30".to_string(),
            granularity: Granularity::Day,
            split_by: None,
        })
        .await;

    assert!(text.starts_with("❌ Connection Failed:"), "got: {text}");
}

#[tokio::test]
async fn graphql_errors_become_api_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "option.groupBy must be defined"}]
        })))
        .mount(&server)
        .await;

    let text = tools_for(&server)
        .cost_rankings(CostRankingsRequest {
            month: "2024-06".to_string(),
            category: RankingCategory::Service,
            limit: 5,
        })
        .await;

    assert_eq!(text, "❌ Mavvrik API Error: option.groupBy must be defined");
}
