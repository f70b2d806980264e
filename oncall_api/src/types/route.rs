use serde::{Deserialize, Serialize};

use crate::Nullable;

use super::is_false;

/// Sends matching alerts of an integration to an escalation chain.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Route {
    pub id: String,
    pub integration_id: String,
    pub escalation_chain_id: Option<String>,
    pub position: i64,
    pub routing_regex: String,
    /// `regex` or `jinja2`.
    pub routing_type: String,
    pub is_the_last_route: bool,
    pub slack: Option<SlackRoute>,
    pub telegram: Option<TelegramRoute>,
    pub msteams: Option<MsTeamsRoute>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SlackRoute {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub channel_id: Nullable<String>,
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TelegramRoute {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: Nullable<String>,
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MsTeamsRoute {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: Nullable<String>,
    pub enabled: bool,
}

/// Body of `POST routes/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateRouteOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub integration_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_chain_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<TelegramRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msteams: Option<MsTeamsRoute>,
    /// Insert at `position` without shifting the other routes.
    #[serde(skip_serializing_if = "is_false")]
    pub manual_order: bool,
}

/// Body of `PUT routes/{id}/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateRouteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_chain_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<TelegramRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msteams: Option<MsTeamsRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_regex: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub manual_order: bool,
}
