use crate::validation::{validate_time_range, ValidationError};

use super::common::{push_str, ListOptions, QueryPairs};
use super::Query;

/// Filters for `GET alerts/`.
#[derive(Debug, Clone, Default)]
pub struct ListAlertOptions {
    pub common: ListOptions,
    pub alert_group_id: Option<String>,
    /// Free-text search, sent as `search`.
    pub name: Option<String>,
}

impl Query for ListAlertOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "alert_group_id", &self.alert_group_id);
        push_str(&mut pairs, "search", &self.name);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListAlertOptions {
    pub fn with_alert_group_id(mut self, alert_group_id: &str) -> Self {
        self.alert_group_id = Some(alert_group_id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Filters for `GET alert_groups/`.
#[derive(Debug, Clone, Default)]
pub struct ListAlertGroupOptions {
    pub common: ListOptions,
    /// Sent as `id`.
    pub alert_group_id: Option<String>,
    pub route_id: Option<String>,
    pub integration_id: Option<String>,
    pub state: Option<String>,
    pub team_id: Option<String>,
    /// `<start>_<end>` range, see [`validate_time_range`].
    pub started_at: Option<String>,
    /// `key:value` label selectors, each sent as its own `label` pair.
    pub labels: Vec<String>,
    pub name: Option<String>,
}

impl Query for ListAlertGroupOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "id", &self.alert_group_id);
        push_str(&mut pairs, "route_id", &self.route_id);
        push_str(&mut pairs, "integration_id", &self.integration_id);
        push_str(&mut pairs, "state", &self.state);
        push_str(&mut pairs, "team_id", &self.team_id);
        push_str(&mut pairs, "started_at", &self.started_at);
        for label in self.labels.iter().filter(|l| !l.is_empty()) {
            pairs.push(("label", label.clone()));
        }
        push_str(&mut pairs, "name", &self.name);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListAlertGroupOptions {
    /// Checks structured filters before any request is built.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.started_at {
            Some(range) => validate_time_range(range),
            None => Ok(()),
        }
    }

    pub fn with_alert_group_id(mut self, alert_group_id: &str) -> Self {
        self.alert_group_id = Some(alert_group_id.to_string());
        self
    }

    pub fn with_route_id(mut self, route_id: &str) -> Self {
        self.route_id = Some(route_id.to_string());
        self
    }

    pub fn with_integration_id(mut self, integration_id: &str) -> Self {
        self.integration_id = Some(integration_id.to_string());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn with_team_id(mut self, team_id: &str) -> Self {
        self.team_id = Some(team_id.to_string());
        self
    }

    pub fn with_started_at(mut self, started_at: &str) -> Self {
        self.started_at = Some(started_at.to_string());
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.labels.push(label.to_string());
        self
    }

    pub fn with_labels(mut self, labels: &[String]) -> Self {
        self.labels.extend_from_slice(labels);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Filters for `GET resolution_notes/`.
#[derive(Debug, Clone, Default)]
pub struct ListResolutionNoteOptions {
    pub common: ListOptions,
    pub alert_group_id: Option<String>,
}

impl Query for ListResolutionNoteOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "alert_group_id", &self.alert_group_id);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListResolutionNoteOptions {
    pub fn with_alert_group_id(mut self, alert_group_id: &str) -> Self {
        self.alert_group_id = Some(alert_group_id.to_string());
        self
    }
}
