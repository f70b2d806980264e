//! Resource service facades.
//!
//! Each service borrows a [`Client`] and maps CRUD calls onto one URL
//! suffix: `list` is `GET {path}/`, `get` is `GET {path}/{id}/`, `create` is
//! `POST {path}/`, `update` is `PUT {path}/{id}/` and `delete` is
//! `DELETE {path}/{id}/`.

use crate::Client;

mod alert;
pub use self::alert::{AlertGroupService, AlertService, ResolutionNoteService};

mod integration;
pub use self::integration::{IntegrationService, RouteService};

mod escalation;
pub use self::escalation::{EscalationChainService, EscalationService};

mod schedule;
pub use self::schedule::{OnCallShiftService, ScheduleService};

mod webhook;
pub use self::webhook::{CustomActionService, WebhookService};

mod user;
pub use self::user::{
    SlackChannelService, TeamService, UserGroupService, UserNotificationRuleService, UserService,
};

fn collection_path(resource: &str) -> String {
    format!("{}/", resource)
}

/// Resource IDs are percent-encoded so each stays a single path segment.
fn member_path(resource: &str, id: &str) -> String {
    format!("{}/{}/", resource, urlencoding::encode(id))
}

impl Client {
    pub fn alerts(&self) -> AlertService<'_> {
        AlertService::new(self)
    }

    pub fn alert_groups(&self) -> AlertGroupService<'_> {
        AlertGroupService::new(self)
    }

    pub fn resolution_notes(&self) -> ResolutionNoteService<'_> {
        ResolutionNoteService::new(self)
    }

    pub fn integrations(&self) -> IntegrationService<'_> {
        IntegrationService::new(self)
    }

    pub fn routes(&self) -> RouteService<'_> {
        RouteService::new(self)
    }

    pub fn escalation_chains(&self) -> EscalationChainService<'_> {
        EscalationChainService::new(self)
    }

    /// Escalation policies, the steps of an escalation chain.
    pub fn escalations(&self) -> EscalationService<'_> {
        EscalationService::new(self)
    }

    pub fn schedules(&self) -> ScheduleService<'_> {
        ScheduleService::new(self)
    }

    pub fn on_call_shifts(&self) -> OnCallShiftService<'_> {
        OnCallShiftService::new(self)
    }

    pub fn webhooks(&self) -> WebhookService<'_> {
        WebhookService::new(self)
    }

    pub fn custom_actions(&self) -> CustomActionService<'_> {
        CustomActionService::new(self)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }

    pub fn teams(&self) -> TeamService<'_> {
        TeamService::new(self)
    }

    pub fn user_groups(&self) -> UserGroupService<'_> {
        UserGroupService::new(self)
    }

    pub fn user_notification_rules(&self) -> UserNotificationRuleService<'_> {
        UserNotificationRuleService::new(self)
    }

    pub fn slack_channels(&self) -> SlackChannelService<'_> {
        SlackChannelService::new(self)
    }
}
