mod common;
pub use self::common::{ListOptions, Query, QueryPairs};

mod alert;
pub use self::alert::{ListAlertGroupOptions, ListAlertOptions, ListResolutionNoteOptions};

mod integration;
pub use self::integration::{ListIntegrationOptions, ListRouteOptions};

mod escalation;
pub use self::escalation::{ListEscalationChainOptions, ListEscalationOptions};

mod schedule;
pub use self::schedule::{ListOnCallShiftOptions, ListScheduleOptions};

mod webhook;
pub use self::webhook::{ListCustomActionOptions, ListWebhookOptions};

mod user;
pub use self::user::{
    ListSlackChannelOptions, ListTeamOptions, ListUserGroupOptions,
    ListUserNotificationRuleOptions, ListUserOptions,
};
