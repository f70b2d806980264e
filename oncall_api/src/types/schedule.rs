use serde::{Deserialize, Serialize};

use crate::Nullable;

use super::null_as_default;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Schedule {
    pub id: String,
    pub team_id: Option<String>,
    /// `ical`, `calendar` or `web`.
    #[serde(rename = "type")]
    pub schedule_type: String,
    /// User IDs currently on call.
    #[serde(deserialize_with = "null_as_default")]
    pub on_call_now: Vec<String>,
    pub name: String,
    pub ical_url_primary: Option<String>,
    pub ical_url_overrides: Option<String>,
    pub enable_web_overrides: bool,
    pub time_zone: Option<String>,
    pub slack: Option<SlackSchedule>,
    /// On-call shift IDs, for `calendar` schedules.
    pub shifts: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SlackSchedule {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub channel_id: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub user_group_id: Nullable<String>,
}

/// Body of `POST schedules/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateScheduleOptions {
    pub team_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub schedule_type: String,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub ical_url_primary: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub ical_url_overrides: Nullable<String>,
    pub enable_web_overrides: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackSchedule>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub shifts: Nullable<Vec<String>>,
}

/// Body of `PUT schedules/{id}/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateScheduleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub team_id: String,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub ical_url_primary: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub ical_url_overrides: Nullable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    pub enable_web_overrides: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackSchedule>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub shifts: Nullable<Vec<String>>,
}

/// A recurring or single rotation that feeds a `calendar` schedule.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct OnCallShift {
    pub id: String,
    pub team_id: Option<String>,
    /// `single_event`, `recurrent_event` or `rolling_users`.
    #[serde(rename = "type")]
    pub shift_type: String,
    pub name: String,
    pub schedule_id: Option<String>,
    pub level: i64,
    pub start: String,
    pub until: Option<String>,
    /// Seconds.
    pub duration: i64,
    pub frequency: Option<String>,
    pub users: Option<Vec<String>>,
    pub interval: Option<i64>,
    pub week_start: Option<String>,
    pub by_day: Option<Vec<String>>,
    pub by_month: Option<Vec<i64>>,
    pub by_monthday: Option<Vec<i64>>,
    pub rolling_users: Option<Vec<Vec<String>>>,
    pub time_zone: Option<String>,
    pub start_rotation_from_user_index: Option<i64>,
}

/// Body of `POST on_call_shifts/` and `PUT on_call_shifts/{id}/`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateOnCallShiftOptions {
    pub team_id: String,
    #[serde(rename = "type")]
    pub shift_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    pub duration: i64,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub frequency: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub users: Nullable<Vec<String>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub interval: Nullable<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub by_day: Nullable<Vec<String>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub by_month: Nullable<Vec<i64>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub by_monthday: Nullable<Vec<i64>>,
    /// Where the shift was created from; `0` is the web UI.
    pub source: i64,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub rolling_users: Nullable<Vec<Vec<String>>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub time_zone: Nullable<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub start_rotation_from_user_index: Nullable<i64>,
}

/// Updates replace the whole shift definition.
pub type UpdateOnCallShiftOptions = CreateOnCallShiftOptions;
