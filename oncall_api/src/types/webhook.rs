use serde::{Deserialize, Serialize};

use crate::Nullable;

/// An outgoing webhook fired on alert-group lifecycle events.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Webhook {
    pub id: String,
    pub name: String,
    pub team: Option<String>,
    pub url: String,
    pub trigger_type: String,
    pub http_method: String,
    pub data: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub authorization_header: Option<String>,
    pub trigger_template: Option<String>,
    pub headers: Option<String>,
    pub forward_all: bool,
    pub integration_filter: Option<Vec<String>>,
    pub is_webhook_enabled: bool,
}

/// Body of `POST webhooks/` and `PUT webhooks/{id}/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateWebhookOptions {
    pub name: String,
    pub team: String,
    pub url: String,
    pub trigger_type: String,
    pub http_method: String,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub data: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub username: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub password: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub authorization_header: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub trigger_template: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub headers: Nullable<String>,
    pub forward_all: bool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration_filter: Nullable<Vec<String>>,
    pub is_webhook_enabled: bool,
}

pub type UpdateWebhookOptions = CreateWebhookOptions;

/// A legacy outgoing webhook, exposed as `actions` by the API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CustomAction {
    pub id: String,
    pub name: String,
    pub team_id: Option<String>,
    pub webhook: String,
    pub data: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub authorization_header: Option<String>,
    pub forward_whole_payload: bool,
}

/// Body of `POST actions/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateCustomActionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub data: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub user: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub password: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub authorization_header: Nullable<String>,
    pub forward_whole_payload: bool,
}

/// Body of `PUT actions/{id}/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateCustomActionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub webhook: String,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub data: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub user: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub password: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub authorization_header: Nullable<String>,
    pub forward_whole_payload: bool,
}
