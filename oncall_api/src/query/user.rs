use super::common::{push_str, ListOptions, QueryPairs};
use super::Query;

/// Filters for `GET users/`.
#[derive(Debug, Clone, Default)]
pub struct ListUserOptions {
    pub common: ListOptions,
    pub username: Option<String>,
}

impl Query for ListUserOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "username", &self.username);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListUserOptions {
    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }
}

/// Filters for `GET teams/`.
#[derive(Debug, Clone, Default)]
pub struct ListTeamOptions {
    pub common: ListOptions,
    pub name: Option<String>,
}

impl Query for ListTeamOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "name", &self.name);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListTeamOptions {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Filters for `GET user_groups/`.
#[derive(Debug, Clone, Default)]
pub struct ListUserGroupOptions {
    pub common: ListOptions,
    pub slack_handle: Option<String>,
}

impl Query for ListUserGroupOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "slack_handle", &self.slack_handle);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListUserGroupOptions {
    pub fn with_slack_handle(mut self, slack_handle: &str) -> Self {
        self.slack_handle = Some(slack_handle.to_string());
        self
    }
}

/// Filters for `GET personal_notification_rules/`.
#[derive(Debug, Clone, Default)]
pub struct ListUserNotificationRuleOptions {
    pub common: ListOptions,
    pub user_id: Option<String>,
    /// Sent as `important=true|false` when set.
    pub important: Option<bool>,
}

impl Query for ListUserNotificationRuleOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "user_id", &self.user_id);
        if let Some(important) = self.important {
            pairs.push(("important", important.to_string()));
        }
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListUserNotificationRuleOptions {
    pub fn with_user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = Some(important);
        self
    }
}

/// Filters for `GET slack_channels/`.
#[derive(Debug, Clone, Default)]
pub struct ListSlackChannelOptions {
    pub common: ListOptions,
    pub channel_name: Option<String>,
}

impl Query for ListSlackChannelOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "channel_name", &self.channel_name);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListSlackChannelOptions {
    pub fn with_channel_name(mut self, channel_name: &str) -> Self {
        self.channel_name = Some(channel_name.to_string());
        self
    }
}
