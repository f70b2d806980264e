use super::common::{push_str, ListOptions, QueryPairs};
use super::Query;

/// Filters for `GET escalation_chains/`.
#[derive(Debug, Clone, Default)]
pub struct ListEscalationChainOptions {
    pub common: ListOptions,
    pub name: Option<String>,
}

impl Query for ListEscalationChainOptions {
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

impl ListEscalationChainOptions {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Filters for `GET escalation_policies/`. Pagination only.
#[derive(Debug, Clone, Default)]
pub struct ListEscalationOptions {
    pub common: ListOptions,
}

impl Query for ListEscalationOptions {
    fn query_pairs(&self) -> QueryPairs {
        self.common.query_pairs()
    }

    fn get_common(&mut self) -> &mut ListOptions {
        &mut self.common
    }
}
