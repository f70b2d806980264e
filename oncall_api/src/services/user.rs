use crate::query::{
    ListSlackChannelOptions, ListTeamOptions, ListUserGroupOptions,
    ListUserNotificationRuleOptions, ListUserOptions,
};
use crate::types::{
    CreateUserNotificationRuleOptions, PaginatedResponse, SlackChannel, Team, User, UserGroup,
    UserNotificationRule, UpdateUserNotificationRuleOptions,
};
use crate::{Client, Result};

use super::{collection_path, member_path};

const USERS: &str = "users";
const TEAMS: &str = "teams";
const USER_GROUPS: &str = "user_groups";
const PERSONAL_NOTIFICATION_RULES: &str = "personal_notification_rules";
const SLACK_CHANNELS: &str = "slack_channels";

pub struct UserService<'a> {
    client: &'a Client,
}

impl<'a> UserService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListUserOptions) -> Result<PaginatedResponse<User>> {
        self.client.get(&collection_path(USERS), options).await
    }

    pub async fn get(&self, id: &str) -> Result<User> {
        self.client.get_one(&member_path(USERS, id)).await
    }
}

pub struct TeamService<'a> {
    client: &'a Client,
}

impl<'a> TeamService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListTeamOptions) -> Result<PaginatedResponse<Team>> {
        self.client.get(&collection_path(TEAMS), options).await
    }

    pub async fn get(&self, id: &str) -> Result<Team> {
        self.client.get_one(&member_path(TEAMS, id)).await
    }
}

pub struct UserGroupService<'a> {
    client: &'a Client,
}

impl<'a> UserGroupService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListUserGroupOptions,
    ) -> Result<PaginatedResponse<UserGroup>> {
        self.client.get(&collection_path(USER_GROUPS), options).await
    }
}

/// Personal notification rules, served under `personal_notification_rules`.
pub struct UserNotificationRuleService<'a> {
    client: &'a Client,
}

impl<'a> UserNotificationRuleService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListUserNotificationRuleOptions,
    ) -> Result<PaginatedResponse<UserNotificationRule>> {
        self.client
            .get(&collection_path(PERSONAL_NOTIFICATION_RULES), options)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<UserNotificationRule> {
        self.client
            .get_one(&member_path(PERSONAL_NOTIFICATION_RULES, id))
            .await
    }

    pub async fn create(
        &self,
        options: &CreateUserNotificationRuleOptions,
    ) -> Result<UserNotificationRule> {
        self.client
            .post(&collection_path(PERSONAL_NOTIFICATION_RULES), options)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        options: &UpdateUserNotificationRuleOptions,
    ) -> Result<UserNotificationRule> {
        self.client
            .put(&member_path(PERSONAL_NOTIFICATION_RULES, id), options)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(&member_path(PERSONAL_NOTIFICATION_RULES, id))
            .await
    }
}

pub struct SlackChannelService<'a> {
    client: &'a Client,
}

impl<'a> SlackChannelService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListSlackChannelOptions,
    ) -> Result<PaginatedResponse<SlackChannel>> {
        self.client.get(&collection_path(SLACK_CHANNELS), options).await
    }
}
