//! Shared query infrastructure: the [`Query`] trait and the [`ListOptions`] pagination fields.

use url::Url;

/// Query-string pairs in emission order.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Trait implemented by all list filters. Provides URL serialization and the
/// shared pagination builder.
pub trait Query {
    /// Returns the `(key, value)` pairs this filter contributes, in order.
    /// Empty values are already dropped.
    fn query_pairs(&self) -> QueryPairs;

    /// Returns a mutable reference to the common pagination fields.
    fn get_common(&mut self) -> &mut ListOptions;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// A URL is only given a query component when at least one pair is
    /// produced, so an empty filter never leaves a dangling `?`.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }

    /// Sets the page number (1-indexed). `0` leaves the server default.
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }
}

/// Pagination fields shared by every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page number (1-indexed). `None` uses the API default.
    pub page: Option<u32>,
}

impl ListOptions {
    /// Appends the `page` pair unless unset or zero.
    pub fn append_pairs(&self, pairs: &mut QueryPairs) {
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
    }
}

impl Query for ListOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.append_pairs(&mut pairs);
        pairs
    }

    fn get_common(&mut self) -> &mut ListOptions {
        self
    }
}

/// Pushes `key=value` when the value is set and non-empty.
pub(crate) fn push_str(pairs: &mut QueryPairs, key: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://oncall.example.com/api/v1/integrations/").unwrap()
    }

    #[test]
    fn empty_options_add_no_query() {
        let url = ListOptions::default().add_to_url(&base());
        assert_eq!(url.query(), None);
        assert!(!url.as_str().ends_with('?'));
    }

    #[test]
    fn zero_page_is_omitted() {
        let url = ListOptions::default().with_page(0).add_to_url(&base());
        assert_eq!(url.query(), None);
    }

    #[test]
    fn page_is_encoded() {
        let url = ListOptions::default().with_page(3).add_to_url(&base());
        assert_eq!(url.query(), Some("page=3"));
    }

    #[test]
    fn empty_strings_are_skipped() {
        let mut pairs = QueryPairs::new();
        push_str(&mut pairs, "name", &Some(String::new()));
        push_str(&mut pairs, "team_id", &None);
        push_str(&mut pairs, "state", &Some("firing".to_string()));
        assert_eq!(pairs, vec![("state", "firing".to_string())]);
    }
}
