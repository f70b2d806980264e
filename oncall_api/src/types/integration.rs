use serde::{Deserialize, Serialize};

use crate::Nullable;

use super::route::{MsTeamsRoute, SlackRoute, TelegramRoute};

/// An alert source (Grafana alerting, webhook, Alertmanager, ...).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Integration {
    pub id: String,
    pub team_id: Option<String>,
    pub name: String,
    /// Inbound URL alerts are posted to.
    pub link: Option<String>,
    pub incidents_count: i64,
    #[serde(rename = "type")]
    pub integration_type: String,
    pub default_route: Option<DefaultRoute>,
    pub templates: Option<Templates>,
}

/// The catch-all route every integration owns.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DefaultRoute {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub escalation_chain_id: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<TelegramRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msteams: Option<MsTeamsRoute>,
}

/// Jinja2 templates that shape how alerts render per channel.
///
/// Every field is [`Nullable`]: on update, an absent field is left as is and
/// an explicit null resets the template to its default.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Templates {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub grouping_key: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub resolve_signal: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub acknowledge_signal: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub source_link: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub slack: Nullable<TitleMessageImageTemplate>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub web: Nullable<TitleMessageImageTemplate>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub msteams: Nullable<TitleMessageImageTemplate>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub telegram: Nullable<TitleMessageImageTemplate>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub phone_call: Nullable<TitleTemplate>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub sms: Nullable<TitleTemplate>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub email: Nullable<TitleMessageTemplate>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub mobile_app: Nullable<TitleMessageTemplate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TitleMessageImageTemplate {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub title: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub message: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub image_url: Nullable<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TitleMessageTemplate {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub title: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub message: Nullable<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TitleTemplate {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub title: Nullable<String>,
}

/// Body of `POST integrations/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateIntegrationOptions {
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub integration_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Templates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_route: Option<DefaultRoute>,
}

impl CreateIntegrationOptions {
    pub fn new(name: &str, integration_type: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            integration_type: Some(integration_type.to_string()),
            ..Self::default()
        }
    }
}

/// Body of `PUT integrations/{id}/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateIntegrationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Templates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_route: Option<DefaultRoute>,
}
