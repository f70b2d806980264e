use serde::{Deserialize, Serialize};

use crate::Nullable;

use super::is_false;

/// An ordered list of escalation steps routes point at.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EscalationChain {
    pub id: String,
    pub name: String,
    pub team_id: Option<String>,
}

/// Body of `POST escalation_chains/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateEscalationChainOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub team_id: String,
}

/// Body of `PUT escalation_chains/{id}/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateEscalationChainOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

/// One step of an escalation chain (an escalation policy).
///
/// Which of the optional fields are set depends on `escalation_type`, e.g.
/// `wait` carries `duration` and `notify_persons` carries `persons_to_notify`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Escalation {
    pub id: String,
    pub escalation_chain_id: String,
    pub position: i64,
    #[serde(rename = "type")]
    pub escalation_type: Option<String>,
    /// Seconds, for `wait` steps.
    pub duration: Option<i64>,
    pub persons_to_notify: Option<Vec<String>>,
    pub persons_to_notify_next_each_time: Option<Vec<String>>,
    pub team_to_notify: Option<String>,
    pub notify_on_call_from_schedule: Option<String>,
    pub action_to_trigger: Option<String>,
    pub group_to_notify: Option<String>,
    pub important: Option<bool>,
    pub notify_if_time_from: Option<String>,
    pub notify_if_time_to: Option<String>,
    pub severity: Option<String>,
}

/// Body of `POST escalation_policies/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateEscalationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_chain_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Nullable::is_absent")]
    pub escalation_type: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons_to_notify: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons_to_notify_next_each_time: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_to_notify: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_call_from_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_to_trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_to_notify: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub manual_order: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_if_time_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_if_time_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// Body of `PUT escalation_policies/{id}/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateEscalationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Nullable::is_absent")]
    pub escalation_type: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons_to_notify: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons_to_notify_next_each_time: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_to_notify: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_call_from_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_to_trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_to_notify: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub manual_order: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_if_time_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_if_time_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
