//! # mavvrik-finops
//!
//! The FinOps tool handlers for the Mavvrik MCP server.
//!
//! This crate provides:
//! - [`FinopsTools`] - the five handlers (overview, trend, rankings,
//!   Kubernetes drilldown, period comparison), each returning formatted
//!   text and never an error
//! - typed request structs and closed parameter enums for the tool surface
//! - [`format_cost_response`] - the shared three-part response envelope

pub mod finops;
pub mod format;

pub use finops::{
    CostCompareRequest, CostOverviewRequest, CostRankingsRequest, CostTrendRequest, FinopsTools,
    Granularity, K8sDrilldownRequest, K8sGroupBy, RankingCategory, SplitBy, TrendPoint,
};
pub use format::format_cost_response;
