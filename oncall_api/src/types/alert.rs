use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A single alert received by an integration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Alert {
    pub id: String,
    pub alert_group_id: String,
    pub created_at: String,
    pub payload: AlertPayload,
}

/// The Grafana-alerting payload carried by an [`Alert`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertPayload {
    pub state: String,
    pub title: String,
    pub rule_id: i64,
    pub message: String,
    pub rule_url: String,
    pub rule_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eval_matches: Vec<AlertEvalMatch>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AlertEvalMatch {
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub value: f64,
    pub metric: String,
}

/// Alerts grouped by an integration's grouping template.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AlertGroup {
    pub id: String,
    pub integration_id: String,
    pub route_id: Option<String>,
    pub alerts_count: i64,
    /// `new`, `acknowledged`, `resolved` or `silenced`.
    pub state: String,
    pub created_at: String,
    pub resolved_at: Option<String>,
    pub acknowledged_at: Option<String>,
    pub title: Option<String>,
    /// Links to the group in each connected chat tool, keyed by tool name.
    #[serde(deserialize_with = "null_as_default")]
    pub permalinks: BTreeMap<String, Option<String>>,
}

impl AlertGroup {
    pub fn is_resolved(&self) -> bool {
        self.state == "resolved"
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ResolutionNote {
    pub id: String,
    pub alert_group_id: String,
    pub author: Option<String>,
    /// `web` or `slack`.
    pub source: String,
    pub created_at: String,
    pub text: String,
}
