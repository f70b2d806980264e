use super::common::{push_str, ListOptions, QueryPairs};
use super::Query;

/// Filters for `GET webhooks/`.
#[derive(Debug, Clone, Default)]
pub struct ListWebhookOptions {
    pub common: ListOptions,
    pub name: Option<String>,
}

impl Query for ListWebhookOptions {
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

impl ListWebhookOptions {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Filters for `GET actions/`.
#[derive(Debug, Clone, Default)]
pub struct ListCustomActionOptions {
    pub common: ListOptions,
    pub name: Option<String>,
}

impl Query for ListCustomActionOptions {
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

impl ListCustomActionOptions {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}
