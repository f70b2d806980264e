use serde::{Deserialize, Serialize};

/// Envelope returned by every list endpoint.
///
/// `next` and `previous` are absolute cursor URLs; pass them to
/// [`Client::follow`](crate::Client::follow). Only `results` is authoritative
/// for the page contents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn has_previous(&self) -> bool {
        self.previous.as_deref().is_some_and(|p| !p.is_empty())
    }
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

impl<T> IntoIterator for PaginatedResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_results_are_independent() {
        let page: PaginatedResponse<String> =
            serde_json::from_str(r#"{"count": 5, "next": null, "previous": null, "results": []}"#)
                .unwrap();
        assert_eq!(page.count, 5);
        assert!(page.results.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn next_cursor_is_kept_verbatim() {
        let page: PaginatedResponse<u32> = serde_json::from_str(
            r#"{"count": 3, "next": "https://oncall.example.com/api/v1/teams/?page=2", "previous": null, "results": [1, 2]}"#,
        )
        .unwrap();
        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(
            page.next.as_deref(),
            Some("https://oncall.example.com/api/v1/teams/?page=2")
        );
        assert_eq!(page.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
