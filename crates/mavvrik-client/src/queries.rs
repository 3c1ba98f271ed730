//! The static GraphQL query catalog and the row shapes it returns.
//!
//! Three fixed documents cover every tool: cost totals/series, top-N
//! rankings, and Kubernetes-scoped costs. All three take a non-null
//! `$option` and a nullable `$filter`; nothing here is generated
//! dynamically.

use serde::{Deserialize, Serialize};

/// Grouped cost rows for a date range.
pub const QUERY_COSTS: &str = r#"
query CostsQuery($option: CostOption!, $filter: Filter) {
  costs(option: $option, filter: $filter) {
    cost
    date
    groupId
    groupName
  }
}
"#;

/// Top-N cost drivers for a single month.
pub const QUERY_COST_RANKINGS: &str = r#"
query CostTopEntriesQuery($option: CostOption!, $filter: Filter) {
  costTopEntries(option: $option, filter: $filter) {
    topEntries {
      cost
      groupId
      groupName
    }
  }
}
"#;

/// Kubernetes-scoped cost rows, grouped by cluster/namespace/node.
pub const QUERY_K8S_COSTS: &str = r#"
query K8sCostsQuery($option: CostOption!, $filter: Filter) {
  k8sCosts(option: $option, filter: $filter) {
    groupId
    groupName
    cost
    date
  }
}
"#;

/// One row of a `costs` or `k8sCosts` result. A missing `cost` reads as
/// zero rather than failing the whole row set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostRow {
    pub cost: f64,
    pub date: Option<String>,
    pub group_id: Option<String>,
    pub group_name: Option<String>,
}

/// One entry of a `costTopEntries` result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopEntry {
    pub cost: f64,
    pub group_id: Option<String>,
    pub group_name: Option<String>,
}

/// Envelope around the ranked entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopEntries {
    pub top_entries: Vec<TopEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cost_row_tolerates_missing_cost() {
        let row: CostRow = serde_json::from_value(json!({"date": "2024-06-01"})).unwrap();
        assert_eq!(row.cost, 0.0);
        assert_eq!(row.date.as_deref(), Some("2024-06-01"));
        assert!(row.group_id.is_none());
    }

    #[test]
    fn top_entries_parse_from_wire_shape() {
        let parsed: TopEntries = serde_json::from_value(json!({
            "topEntries": [
                {"cost": 120.5, "groupId": "ec2", "groupName": "Amazon EC2"},
                {"cost": 42.0, "groupId": "s3", "groupName": "Amazon S3"},
            ]
        }))
        .unwrap();
        assert_eq!(parsed.top_entries.len(), 2);
        assert_eq!(parsed.top_entries[0].group_id.as_deref(), Some("ec2"));
    }

    #[test]
    fn documents_declare_option_and_filter_variables() {
        for doc in [QUERY_COSTS, QUERY_COST_RANKINGS, QUERY_K8S_COSTS] {
            assert!(doc.contains("$option: CostOption!"));
            assert!(doc.contains("$filter: Filter"));
        }
    }
}
