use serde::{Deserialize, Serialize};

use super::is_false;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: String,
    pub email: String,
    /// Linked Slack identities, one per Slack workspace.
    pub slack: Option<Vec<SlackUser>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SlackUser {
    pub user_id: String,
    pub team_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// A chat-tool user group (currently Slack only).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UserGroup {
    pub id: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub slack: Option<SlackUserGroup>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SlackUserGroup {
    pub id: String,
    pub name: String,
    pub handle: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SlackChannel {
    pub name: String,
    pub slack_id: String,
}

/// A step of a user's personal notification policy.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UserNotificationRule {
    pub id: String,
    pub user_id: String,
    pub position: i64,
    /// Seconds, for `wait` rules.
    pub duration: Option<i64>,
    /// Whether the rule belongs to the important-notification policy.
    pub important: bool,
    #[serde(rename = "type")]
    pub rule_type: String,
}

/// Body of `POST personal_notification_rules/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateUserNotificationRuleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "is_false")]
    pub important: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub manual_order: bool,
}

/// Body of `PUT personal_notification_rules/{id}/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateUserNotificationRuleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub manual_order: bool,
}
