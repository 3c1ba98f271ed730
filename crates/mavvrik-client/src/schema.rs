//! Wire-level input types for the Mavvrik GraphQL API.
//!
//! Everything here is a sparse record: the backend distinguishes an absent
//! field from a `null` one, so serialization must drop every field left
//! unset. `#[skip_serializing_none]` enforces that on all `Option` fields;
//! an all-default value serializes to `{}`.
//!
//! Filter dimensions are lists of strings: values within one dimension are
//! OR-ed, dimensions are AND-ed, both enforced backend-side. The only job
//! of this module is to never send an empty list or a null placeholder.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// A cloud tag key/value pair, used by the `tags`/`vtags` filter dimensions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

/// Free-text search over a set of result fields.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Search {
    pub fields: Option<Vec<String>>,
    pub keyword: Option<String>,
}

/// The broad multi-dimensional filter accepted by every cost-family query.
///
/// The `json` wire field collides with a reserved name on the backend's SDK
/// side; it is exposed here as `json_value` and renamed on serialization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    // Cloud billing dimensions
    pub provider_code: Option<Vec<String>>,
    pub product_name: Option<Vec<String>>,
    pub asset_type: Option<Vec<String>>,
    pub billing_account_id: Option<Vec<String>>,
    pub usage_account_id: Option<Vec<String>>,
    pub billing_account_name: Option<Vec<String>>,
    pub usage_account_name: Option<Vec<String>>,
    pub location_id: Option<Vec<String>>,
    pub location_name: Option<Vec<String>>,

    // Tagging
    pub tag_keys: Option<Vec<String>>,
    pub vtag_keys: Option<Vec<String>>,
    pub tags: Option<Vec<Tag>>,
    pub vtags: Option<Vec<Tag>>,

    // Policy / alerting dimensions
    pub category: Option<Vec<String>>,
    pub severity: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<Vec<String>>,
    pub policy_id: Option<Vec<String>>,
    pub state: Option<Vec<String>>,

    // Commitment dimensions
    pub term: Option<Vec<String>>,
    pub instance_type: Option<Vec<String>>,
    pub purchase_option: Option<Vec<String>>,
    pub platform: Option<Vec<String>>,
    pub payment_option: Option<Vec<String>>,
    pub instance_family: Option<Vec<String>>,
    pub reservations: Option<Vec<String>>,
    pub savings_plans: Option<Vec<String>>,
    pub reservation_id: Option<Vec<String>>,
    pub savings_plan_id: Option<Vec<String>>,
    pub tenancy: Option<Vec<String>>,
    pub deployment_option: Option<Vec<String>>,

    // Kubernetes dimensions
    pub cluster: Option<Vec<String>>,
    pub namespace: Option<Vec<String>>,
    pub node_pool: Option<Vec<String>>,
    pub node: Option<Vec<String>>,
    pub pv: Option<Vec<String>>,
    pub pv_storage_class: Option<Vec<String>>,
    pub pvc: Option<Vec<String>>,
    pub gpu_model: Option<Vec<String>>,
    pub gpu_gi_profile: Option<Vec<String>>,
    pub controller_kind: Option<Vec<String>>,

    // Cost classification
    pub cost_type: Option<Vec<String>>,
    pub cost_category: Option<Vec<String>>,
    pub usage_type: Option<Vec<String>>,

    // Resource identity
    pub cloud_resource_id: Option<Vec<String>>,
    pub resource_type: Option<Vec<String>>,
    pub resource_category: Option<Vec<String>>,
    pub resource_id: Option<Vec<String>>,
    pub resource_name: Option<Vec<String>>,
    pub resource_group_id: Option<Vec<String>>,

    // On-prem / vSphere dimensions
    pub vcenter_id: Option<Vec<String>>,
    pub datacenter_id: Option<Vec<String>>,
    pub cluster_id: Option<Vec<String>>,
    pub host_id: Option<Vec<String>>,
    pub vcenter_name: Option<Vec<String>>,
    pub datacenter_name: Option<Vec<String>>,
    pub cluster_name: Option<Vec<String>>,
    pub host_name: Option<Vec<String>>,
    pub host_vendor: Option<Vec<String>>,
    pub host_model: Option<Vec<String>>,

    // Customer / SKU dimensions
    pub customer_id: Option<Vec<String>>,
    pub customer_name: Option<Vec<String>>,
    pub sku_id: Option<Vec<String>>,
    pub sku_name: Option<Vec<String>>,
    pub billing_entity: Option<Vec<String>>,
    pub tenant_id: Option<Vec<String>>,
    pub tenant_name: Option<Vec<String>>,

    // Escape hatch for dimensions not modeled above. `json` is a reserved
    // name, hence the rename.
    #[serde(rename = "json")]
    pub json_value: Option<Value>,

    // LLM model dimensions
    pub model: Option<Vec<String>>,
    pub model_provider_code: Option<Vec<String>>,
    pub model_type: Option<Vec<String>>,
    pub model_family: Option<Vec<String>>,
    pub model_service: Option<Vec<String>>,
    pub model_name: Option<Vec<String>>,
    pub model_version: Option<Vec<String>>,
    pub operation: Option<Vec<String>>,
    pub source: Option<Vec<String>>,
}

/// Filter shape specific to alert queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertFilter {
    #[serde(rename = "type")]
    pub kind: Option<Vec<String>>,
    pub users: Option<Vec<String>>,
    pub channels: Option<Vec<String>>,
    #[serde(rename = "json")]
    pub json_value: Option<Value>,
}

/// Options bag for the cost query family.
///
/// Any query that buckets results over time or a category must carry a
/// non-null `group_by`; omitting it is a known backend failure mode, so the
/// tool handlers always supply one.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostOption {
    pub interval: Option<String>,
    pub variance: Option<String>,
    pub group_by: Option<String>,
    /// Format: YYYY-MM-01 or YYYY-MM-DD
    pub from_date: Option<String>,
    /// Format: YYYY-MM-01 or YYYY-MM-DD
    pub to_date: Option<String>,
    pub today_date: Option<String>,
    pub tag_key: Option<String>,
    pub tag_keys: Option<Vec<String>>,
    pub vtag_key: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<u32>,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
    pub chart_type: Option<String>,
    pub forecast: Option<i32>,
    pub category: Option<String>,
    pub month: Option<String>,
    /// Backend feature flags, e.g. "discount" / "tax" inclusion.
    pub options: Option<Vec<String>>,
    pub options_map: Option<Value>,
    pub cost_fields_map: Option<Value>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub filter_key: Option<String>,
    pub mode: Option<String>,
    pub cost_allocation_id: Option<String>,
    pub cost_to_serve_id: Option<String>,
    pub i18n_map: Option<Value>,
    pub date_ranges: Option<Vec<Vec<String>>>,
    pub provider: Option<String>,
    pub field_ids: Option<Vec<String>>,
}

/// Options bag for asset inventory queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetOption {
    pub group_by: Option<String>,
    pub tag_key: Option<String>,
    pub vtag_key: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub today_date: Option<String>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub month: Option<String>,
    pub i18n_map: Option<Value>,
}

/// Options bag for per-resource cost queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOption {
    pub interval: Option<String>,
    pub y_axis: Option<String>,
    pub x_axis: Option<String>,
    pub group_by: Option<String>,
    pub tag_key: Option<String>,
    pub vtag_key: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub today_date: Option<String>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub month: Option<String>,
    pub options: Option<Vec<String>>,
    pub i18n_map: Option<Value>,
    pub date_ranges: Option<Vec<Vec<String>>>,
}

/// Options bag for tag breakdown queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagOption {
    pub interval: Option<String>,
    pub group_by: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<u32>,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
    pub chart_type: Option<String>,
    pub month: Option<String>,
    pub today_date: Option<String>,
    pub options: Option<Vec<String>>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub i18n_map: Option<Value>,
    pub vtag_key: Option<String>,
    pub tag_keys: Option<Vec<String>>,
    pub date_ranges: Option<Vec<Vec<String>>>,
    pub tag_policy: Option<Filter>,
}

/// Options bag for optimization recommendation queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationOption {
    pub today_date: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub i18n_map: Option<Value>,
    pub options: Option<Vec<String>>,
    pub thresholds: Option<Value>,
}

/// Options bag for commitment coverage queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageOption {
    pub interval: Option<String>,
    pub date: Option<String>,
    pub month: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub today_date: Option<String>,
    pub chart_type: Option<String>,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub i18n_map: Option<Value>,
    pub date_ranges: Option<Vec<Vec<String>>>,
}

/// Options bag for reserved instance queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiOption {
    pub interval: Option<String>,
    pub date: Option<String>,
    pub month: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub today_date: Option<String>,
    pub chart_type: Option<String>,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub i18n_map: Option<Value>,
    pub date_ranges: Option<Vec<Vec<String>>>,
}

/// Options bag for savings plan queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpOption {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub date: Option<String>,
    pub month: Option<String>,
    pub today_date: Option<String>,
    pub chart_type: Option<String>,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
    pub interval: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub i18n_map: Option<Value>,
    pub date_ranges: Option<Vec<Vec<String>>>,
}

/// Options bag for anomaly detection queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyOption {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub month: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<u32>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub i18n_map: Option<Value>,
    pub level: Option<i32>,
    pub thresholds: Option<Value>,
}

/// Options bag for alert queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertOption {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub i18n_map: Option<Value>,
}

/// Options bag for saved report queries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOption {
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
}
