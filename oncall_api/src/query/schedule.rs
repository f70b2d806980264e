use super::common::{push_str, ListOptions, QueryPairs};
use super::Query;

/// Filters for `GET schedules/`.
#[derive(Debug, Clone, Default)]
pub struct ListScheduleOptions {
    pub common: ListOptions,
    pub name: Option<String>,
    pub team_id: Option<String>,
}

impl Query for ListScheduleOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "name", &self.name);
        push_str(&mut pairs, "team_id", &self.team_id);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListScheduleOptions {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_team_id(mut self, team_id: &str) -> Self {
        self.team_id = Some(team_id.to_string());
        self
    }
}

/// Filters for `GET on_call_shifts/`.
#[derive(Debug, Clone, Default)]
pub struct ListOnCallShiftOptions {
    pub common: ListOptions,
    pub schedule_id: Option<String>,
    pub name: Option<String>,
}

impl Query for ListOnCallShiftOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "schedule_id", &self.schedule_id);
        push_str(&mut pairs, "name", &self.name);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListOnCallShiftOptions {
    pub fn with_schedule_id(mut self, schedule_id: &str) -> Self {
        self.schedule_id = Some(schedule_id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}
