use serde::{Deserialize, Deserializer};

mod meta;
pub use self::meta::PaginatedResponse;

mod alert;
pub use self::alert::{Alert, AlertEvalMatch, AlertGroup, AlertPayload, ResolutionNote};

mod integration;
pub use self::integration::{
    CreateIntegrationOptions, DefaultRoute, Integration, Templates, TitleMessageImageTemplate,
    TitleMessageTemplate, TitleTemplate, UpdateIntegrationOptions,
};

mod route;
pub use self::route::{
    CreateRouteOptions, MsTeamsRoute, Route, SlackRoute, TelegramRoute, UpdateRouteOptions,
};

mod escalation;
pub use self::escalation::{
    CreateEscalationChainOptions, CreateEscalationOptions, Escalation, EscalationChain,
    UpdateEscalationChainOptions, UpdateEscalationOptions,
};

mod schedule;
pub use self::schedule::{
    CreateOnCallShiftOptions, CreateScheduleOptions, OnCallShift, Schedule, SlackSchedule,
    UpdateOnCallShiftOptions, UpdateScheduleOptions,
};

mod webhook;
pub use self::webhook::{
    CreateCustomActionOptions, CreateWebhookOptions, CustomAction, UpdateCustomActionOptions,
    UpdateWebhookOptions, Webhook,
};

mod user;
pub use self::user::{
    CreateUserNotificationRuleOptions, SlackChannel, SlackUser, SlackUserGroup, Team, User,
    UserGroup, UserNotificationRule, UpdateUserNotificationRuleOptions,
};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Reads an explicit `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
