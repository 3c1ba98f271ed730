//! The five FinOps tool handlers.
//!
//! Each handler normalizes its inputs, builds one `(option, filter)` pair,
//! runs exactly one query document (two for the period comparison), applies
//! its post-processing, and hands the payload to the formatter. Handlers
//! return plain text in every case: a classified failure becomes a `❌`
//! diagnostic string instead of an error the protocol layer would have to
//! translate.
//!
//! The backend rejects time-series and categorical queries without a
//! grouping dimension, so every handler forces one (`provider_code` when
//! the caller didn't ask for a split) and, where the caller wanted an
//! ungrouped total, re-aggregates the rows client-side. That workaround is
//! deliberate; do not "simplify" it away.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use mavvrik_client::{
    CostOption, CostRow, Filter, GraphqlClient, TopEntries, QUERY_COSTS, QUERY_COST_RANKINGS,
    QUERY_K8S_COSTS,
};
use mavvrik_core::{MavvrikError, Result, Settings};

use crate::format::format_cost_response;

/// Grouping forced onto queries when the caller didn't request a split.
const DEFAULT_GROUP_BY: &str = "provider_code";

/// Time bucket for cost series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Month,
    Day,
}

impl Granularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Month => "month",
            Granularity::Day => "day",
        }
    }
}

/// Split dimension for trend queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SplitBy {
    ProductName,
    ProviderCode,
    LocationId,
}

impl SplitBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SplitBy::ProductName => "product_name",
            SplitBy::ProviderCode => "provider_code",
            SplitBy::LocationId => "location_id",
        }
    }
}

/// Ranking dimension for top-N queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RankingCategory {
    ProductName,
    Service,
    ResourceGroupId,
    LocationId,
    BillingAccountId,
}

impl RankingCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RankingCategory::ProductName => "product_name",
            RankingCategory::Service => "service",
            RankingCategory::ResourceGroupId => "resource_group_id",
            RankingCategory::LocationId => "location_id",
            RankingCategory::BillingAccountId => "billing_account_id",
        }
    }
}

/// Grouping dimension for Kubernetes drilldowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum K8sGroupBy {
    ClusterId,
    Namespace,
    Node,
}

impl K8sGroupBy {
    pub fn as_str(self) -> &'static str {
        match self {
            K8sGroupBy::ClusterId => "cluster_id",
            K8sGroupBy::Namespace => "namespace",
            K8sGroupBy::Node => "node",
        }
    }
}

fn default_month() -> Granularity {
    Granularity::Month
}

fn default_day() -> Granularity {
    Granularity::Day
}

fn default_ranking_category() -> RankingCategory {
    RankingCategory::ProductName
}

fn default_ranking_limit() -> u32 {
    5
}

fn default_k8s_group_by() -> K8sGroupBy {
    K8sGroupBy::ClusterId
}

/// Parameters for the scalar total-cost tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CostOverviewRequest {
    /// Start of the period, inclusive (YYYY-MM-DD).
    pub from_date: String,
    /// End of the period, inclusive (YYYY-MM-DD).
    pub to_date: String,
    /// Reporting granularity; "month" for high-level reporting, "day" only
    /// when the user asks for daily totals.
    #[serde(default = "default_month")]
    pub granularity: Granularity,
    /// Optional provider scope, e.g. "aws", "gcp", "azure". Aliases like
    /// "amazon" are accepted.
    #[serde(default)]
    pub provider: Option<String>,
}

/// Parameters for the time-series tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CostTrendRequest {
    /// Start of the period, inclusive (YYYY-MM-DD).
    pub from_date: String,
    /// End of the period, inclusive (YYYY-MM-DD).
    pub to_date: String,
    /// Time bucket for the series; "day" suits spike diagnosis.
    #[serde(default = "default_day")]
    pub granularity: Granularity,
    /// Optional dimension to split the series by; omit for one total line.
    #[serde(default)]
    pub split_by: Option<SplitBy>,
}

/// Parameters for the top-N ranking tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CostRankingsRequest {
    /// Month to rank, "YYYY-MM" or "YYYY-MM-DD".
    pub month: String,
    /// Dimension to rank by.
    #[serde(default = "default_ranking_category")]
    pub category: RankingCategory,
    /// Number of entries to return; capped server-side.
    #[serde(default = "default_ranking_limit")]
    pub limit: u32,
}

/// Parameters for the Kubernetes drilldown tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct K8sDrilldownRequest {
    /// Start of the period, inclusive (YYYY-MM-DD).
    pub from_date: String,
    /// End of the period, inclusive (YYYY-MM-DD).
    pub to_date: String,
    /// Kubernetes axis to group costs by.
    #[serde(default = "default_k8s_group_by")]
    pub group_by: K8sGroupBy,
}

/// Parameters for the period comparison tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CostCompareRequest {
    /// Start of the base period (YYYY-MM-DD).
    pub base_start: String,
    /// End of the base period (YYYY-MM-DD).
    pub base_end: String,
    /// Start of the comparison period (YYYY-MM-DD).
    pub comp_start: String,
    /// End of the comparison period (YYYY-MM-DD).
    pub comp_end: String,
}

/// One point of a merged trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub cost: f64,
}

/// The FinOps tool handlers, sharing one executor and the configured
/// list-size ceiling. One instance serves all invocations; there is no
/// mutable state.
pub struct FinopsTools {
    client: GraphqlClient,
    max_list_limit: u32,
}

impl FinopsTools {
    pub fn new(client: GraphqlClient, settings: &Settings) -> Self {
        Self {
            client,
            max_list_limit: settings.max_list_limit,
        }
    }

    /// Total cost for a period, optionally scoped to one provider.
    pub async fn cost_overview(&self, req: CostOverviewRequest) -> String {
        info!(from = %req.from_date, to = %req.to_date, "cost_overview");
        self.cost_overview_inner(req).await.unwrap_or_else(failure_text)
    }

    async fn cost_overview_inner(&self, req: CostOverviewRequest) -> Result<String> {
        let clean_provider = req.provider.as_deref().map(normalize_provider);

        let filter = Filter {
            provider_code: clean_provider.clone().map(|p| vec![p]),
            ..Default::default()
        };
        // The backend errors out on grouped queries without a groupBy, so
        // one is always sent and the rows are re-summed below.
        let option = CostOption {
            x_axis: Some("date".to_string()),
            interval: Some(req.granularity.as_str().to_string()),
            group_by: Some(DEFAULT_GROUP_BY.to_string()),
            from_date: Some(req.from_date.clone()),
            to_date: Some(req.to_date.clone()),
            options: Some(cost_flags()),
            ..Default::default()
        };

        let variables = build_variables(&option, &filter)?;
        let data = self.client.execute(QUERY_COSTS, variables, "CostsQuery").await?;
        let rows = parse_rows(&data, "costs")?;

        let summary = json!({
            "total_cost": round2(sum_costs(&rows)),
            "currency": "USD",
            "period": format!("{} to {}", req.from_date, req.to_date),
            "grouping_applied": "provider_code (aggregated)",
        });

        Ok(format_cost_response(
            &summary,
            "Cost Overview",
            &format!(
                "view=overview&provider={}",
                clean_provider.as_deref().unwrap_or("all")
            ),
        ))
    }

    /// Time-series of spend, merged to one line unless a split was asked for.
    pub async fn cost_trend(&self, req: CostTrendRequest) -> String {
        info!(from = %req.from_date, to = %req.to_date, "cost_trend");
        self.cost_trend_inner(req).await.unwrap_or_else(failure_text)
    }

    async fn cost_trend_inner(&self, req: CostTrendRequest) -> Result<String> {
        // No split requested still needs a valid groupBy for the backend;
        // the hidden provider grouping gets merged back out below.
        let effective_group_by = req
            .split_by
            .map(SplitBy::as_str)
            .unwrap_or(DEFAULT_GROUP_BY);

        let option = CostOption {
            x_axis: Some("date".to_string()),
            interval: Some(req.granularity.as_str().to_string()),
            group_by: Some(effective_group_by.to_string()),
            from_date: Some(req.from_date.clone()),
            to_date: Some(req.to_date.clone()),
            options: Some(cost_flags()),
            ..Default::default()
        };

        let variables = build_variables(&option, &Filter::default())?;
        let data = self.client.execute(QUERY_COSTS, variables, "CostsQuery").await?;
        let rows = parse_rows(&data, "costs")?;

        let payload = if req.split_by.is_none() {
            serde_json::to_value(merge_by_date(rows))?
        } else {
            serde_json::to_value(rows)?
        };

        let split_label = req.split_by.map(SplitBy::as_str).unwrap_or("total");
        Ok(format_cost_response(
            &payload,
            &format!("Cost Trend ({})", req.granularity.as_str()),
            &format!(
                "view=trend&interval={}&split={}",
                req.granularity.as_str(),
                split_label
            ),
        ))
    }

    /// Top cost drivers for one month under a chosen ranking dimension.
    pub async fn cost_rankings(&self, req: CostRankingsRequest) -> String {
        info!(month = %req.month, limit = req.limit, "cost_rankings");
        self.cost_rankings_inner(req).await.unwrap_or_else(failure_text)
    }

    async fn cost_rankings_inner(&self, req: CostRankingsRequest) -> Result<String> {
        let safe_limit = req.limit.min(self.max_list_limit);
        let formatted_month = normalize_month(&req.month);

        let option = CostOption {
            category: Some(req.category.as_str().to_string()),
            month: Some(formatted_month.clone()),
            limit: Some(safe_limit),
            options: Some(cost_flags()),
            ..Default::default()
        };

        let variables = build_variables(&option, &Filter::default())?;
        let data = self
            .client
            .execute(QUERY_COST_RANKINGS, variables, "CostTopEntriesQuery")
            .await?;

        let payload = match data.get("costTopEntries") {
            None | Some(Value::Null) => Value::Null,
            Some(v) => {
                let entries: TopEntries = serde_json::from_value(v.clone()).map_err(|e| {
                    MavvrikError::Validation(format!("unexpected costTopEntries payload: {e}"))
                })?;
                serde_json::to_value(entries)?
            }
        };

        Ok(format_cost_response(
            &payload,
            &format!("Top {} by {}", safe_limit, req.category.as_str()),
            &format!(
                "view=rankings&dim={}&month={}",
                req.category.as_str(),
                formatted_month
            ),
        ))
    }

    /// Kubernetes-scoped costs, returned as raw grouped rows.
    pub async fn k8s_drilldown(&self, req: K8sDrilldownRequest) -> String {
        info!(from = %req.from_date, to = %req.to_date, group_by = req.group_by.as_str(), "k8s_drilldown");
        self.k8s_drilldown_inner(req).await.unwrap_or_else(failure_text)
    }

    async fn k8s_drilldown_inner(&self, req: K8sDrilldownRequest) -> Result<String> {
        let option = CostOption {
            x_axis: Some("date".to_string()),
            interval: Some("month".to_string()),
            group_by: Some(req.group_by.as_str().to_string()),
            from_date: Some(req.from_date.clone()),
            to_date: Some(req.to_date.clone()),
            ..Default::default()
        };

        let variables = build_variables(&option, &Filter::default())?;
        let data = self
            .client
            .execute(QUERY_K8S_COSTS, variables, "K8sCostsQuery")
            .await?;
        let rows = parse_rows(&data, "k8sCosts")?;

        Ok(format_cost_response(
            &serde_json::to_value(rows)?,
            &format!("Kubernetes Cost by {}", req.group_by.as_str()),
            &format!("view=k8s&group={}", req.group_by.as_str()),
        ))
    }

    /// Variance between two periods: absolute delta and percent change.
    pub async fn cost_compare(&self, req: CostCompareRequest) -> String {
        info!(base = %req.base_start, comp = %req.comp_start, "cost_compare");
        self.cost_compare_inner(req).await.unwrap_or_else(failure_text)
    }

    async fn cost_compare_inner(&self, req: CostCompareRequest) -> Result<String> {
        // The two fetches have no data dependency; run them concurrently
        // and join before computing the variance.
        let (base_total, comp_total) = tokio::try_join!(
            self.fetch_period_total(&req.base_start, &req.base_end),
            self.fetch_period_total(&req.comp_start, &req.comp_end),
        )?;

        let delta = base_total - comp_total;
        let pct = if comp_total != 0.0 {
            delta / comp_total * 100.0
        } else {
            0.0
        };

        let payload = json!({
            "comparison": {
                "base_period": {
                    "start": req.base_start,
                    "end": req.base_end,
                    "total_cost": round2(base_total),
                },
                "comparison_period": {
                    "start": req.comp_start,
                    "end": req.comp_end,
                    "total_cost": round2(comp_total),
                },
                "variance": {
                    "absolute_change": round2(delta),
                    "percent_change": format_percent(pct),
                },
            }
        });

        Ok(format_cost_response(&payload, "Period Comparison", "view=compare"))
    }

    async fn fetch_period_total(&self, start: &str, end: &str) -> Result<f64> {
        let option = CostOption {
            x_axis: Some("date".to_string()),
            interval: Some("month".to_string()),
            group_by: Some(DEFAULT_GROUP_BY.to_string()),
            from_date: Some(start.to_string()),
            to_date: Some(end.to_string()),
            options: Some(cost_flags()),
            ..Default::default()
        };
        let variables = build_variables(&option, &Filter::default())?;
        let data = self.client.execute(QUERY_COSTS, variables, "CostsQuery").await?;
        Ok(sum_costs(&parse_rows(&data, "costs")?))
    }
}

/// Convert a classified failure into the text returned to the agent.
fn failure_text(err: MavvrikError) -> String {
    format!("❌ {err}")
}

/// Backend feature flags requested on cost queries: net billable values
/// with discounts and tax applied.
fn cost_flags() -> Vec<String> {
    vec!["discount".to_string(), "tax".to_string()]
}

/// Serialize the `(option, filter)` pair into the wire variables object.
fn build_variables(option: &CostOption, filter: &Filter) -> Result<Value> {
    let option = serde_json::to_value(option).map_err(|e| MavvrikError::Validation(e.to_string()))?;
    let filter = serde_json::to_value(filter).map_err(|e| MavvrikError::Validation(e.to_string()))?;
    Ok(json!({ "option": option, "filter": filter }))
}

/// Pull a row list out of the `data` object; a missing or null key is an
/// empty result, anything else must parse.
fn parse_rows(data: &Value, key: &str) -> Result<Vec<CostRow>> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| MavvrikError::Validation(format!("unexpected {key} payload: {e}"))),
    }
}

/// Map provider aliases onto backend provider codes. Unknown providers
/// pass through lower-cased; the backend may know dimensions we don't.
fn normalize_provider(provider: &str) -> String {
    let lower = provider.to_lowercase();
    match lower.as_str() {
        "amazon" => "aws".to_string(),
        "google" => "gcp".to_string(),
        "microsoft" => "azure".to_string(),
        _ => lower,
    }
}

/// Expand a `YYYY-MM` month to the first-of-month date the backend wants.
fn normalize_month(month: &str) -> String {
    if month.len() == 7 {
        format!("{month}-01")
    } else {
        month.to_string()
    }
}

fn sum_costs(rows: &[CostRow]) -> f64 {
    rows.iter().map(|row| row.cost).sum()
}

/// Merge rows sharing a date into one point per date, costs summed and
/// rounded, sorted ascending by date string.
fn merge_by_date(rows: Vec<CostRow>) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        *by_date.entry(row.date.unwrap_or_default()).or_insert(0.0) += row.cost;
    }
    by_date
        .into_iter()
        .map(|(date, cost)| TrendPoint {
            date,
            cost: round2(cost),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percent with at least one decimal place, so a whole number reads
/// "20.0%" rather than "20%".
fn format_percent(pct: f64) -> String {
    let rounded = round2(pct);
    if rounded == rounded.trunc() {
        format!("{rounded:.1}%")
    } else {
        format!("{rounded}%")
    }
}
