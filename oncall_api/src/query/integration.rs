use super::common::{push_str, ListOptions, QueryPairs};
use super::Query;

/// Filters for `GET integrations/`. Pagination only.
#[derive(Debug, Clone, Default)]
pub struct ListIntegrationOptions {
    pub common: ListOptions,
}

impl Query for ListIntegrationOptions {
    fn query_pairs(&self) -> QueryPairs {
        self.common.query_pairs()
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

/// Filters for `GET routes/`.
#[derive(Debug, Clone, Default)]
pub struct ListRouteOptions {
    pub common: ListOptions,
    pub integration_id: Option<String>,
    pub routing_regex: Option<String>,
}

impl Query for ListRouteOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.common.append_pairs(&mut pairs);
        push_str(&mut pairs, "integration_id", &self.integration_id);
        push_str(&mut pairs, "routing_regex", &self.routing_regex);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}

impl ListRouteOptions {
    pub fn with_integration_id(mut self, integration_id: &str) -> Self {
        self.integration_id = Some(integration_id.to_string());
        self
    }

    pub fn with_routing_regex(mut self, routing_regex: &str) -> Self {
        self.routing_regex = Some(routing_regex.to_string());
        self
    }
}
