//! Endpoint bookkeeping shared by every API record.

use crate::delta::{self, diffable_record, Changes};
use crate::error::Result;
use crate::fetch::Fetcher;
use serde::{Deserialize, Serialize};

/// Component is the endpoint a record was fetched from and the ETag the server
/// reported for it at the time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub endpoint: String,
    pub etag: String,
}

diffable_record!(Component { endpoint, etag });

impl Component {
    /// Creates a component without touching the network.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Component {
            endpoint: endpoint.into(),
            etag: String::new(),
        }
    }

    /// Creates a component with the ETag a response carried, if any.
    pub fn tagged(endpoint: impl Into<String>, etag: Option<String>) -> Self {
        Component {
            endpoint: endpoint.into(),
            etag: etag.unwrap_or_default(),
        }
    }

    /// Creates a component for `endpoint` and records the ETag from a HEAD
    /// request against it. A missing header leaves the ETag empty.
    pub fn fetch(fetcher: &dyn Fetcher, endpoint: impl Into<String>) -> Result<Self> {
        let mut component = Component::new(endpoint);
        component.etag = fetcher.head(&component.endpoint)?.unwrap_or_default();
        Ok(component)
    }

    pub fn is_empty(&self) -> bool {
        delta::is_empty(self)
    }

    pub fn equals(&self, other: &Component) -> bool {
        delta::equals(self, other)
    }

    pub fn diff(&self, other: &Component) -> Changes<Component> {
        delta::diff(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::stub::StubFetcher;
    use pretty_assertions::assert_eq;

    fn component(endpoint: &str, etag: &str) -> Component {
        Component {
            endpoint: endpoint.into(),
            etag: etag.into(),
        }
    }

    #[test]
    fn test_fetch_without_etag() {
        let fetcher = StubFetcher::new();
        fetcher.route("https://example.com", "SOME HTTP DATA");
        let c = Component::fetch(&fetcher, "https://example.com").unwrap();
        assert_eq!(c.endpoint, "https://example.com");
        assert_eq!(c.etag, "");
    }

    #[test]
    fn test_fetch_with_etag() {
        let fetcher = StubFetcher::new();
        fetcher.route_with_etag("https://example.com", "hellothere", "SOME HTTP DATA");
        let c = Component::fetch(&fetcher, "https://example.com").unwrap();
        assert_eq!(c.etag, "hellothere");
        assert_eq!(fetcher.requests(), vec!["HEAD https://example.com".to_string()]);
    }

    #[test]
    fn test_tagged() {
        assert_eq!(
            Component::tagged("https://example.com", Some("abc".into())),
            component("https://example.com", "abc")
        );
        assert_eq!(
            Component::tagged("https://example.com", None),
            Component::new("https://example.com")
        );
    }

    #[test]
    fn test_fetch_transport_error() {
        let fetcher = StubFetcher::new();
        fetcher.set_down(true);
        assert!(Component::fetch(&fetcher, "https://example.com").unwrap_err().is_transport());
    }

    #[test]
    fn test_empty() {
        assert!(Component::default().is_empty());
        assert!(!Component::new("https://example.com").is_empty());
        assert!(!component("", "thing").is_empty());
    }

    #[test]
    fn test_equals() {
        assert!(component("somewhere", "").equals(&component("somewhere", "")));
        assert!(!component("somewhere", "").equals(&component("elsewhere", "")));
    }

    #[test]
    fn test_diff_equal() {
        let c1 = component("abc", "def");
        let c2 = component("abc", "def");
        assert!(c1.diff(&c2).is_same());
        assert!(c2.diff(&c1).is_same());
    }

    #[test]
    fn test_diff_added_and_deleted() {
        let c1 = Component::default();
        let c2 = component("abc", "def");

        let forward = c1.diff(&c2);
        assert_eq!(forward.positive, Some(component("abc", "def")));
        assert_eq!(forward.negative, None);

        let backward = c2.diff(&c1);
        assert_eq!(backward.positive, None);
        assert_eq!(backward.negative, Some(component("abc", "def")));
    }

    #[test]
    fn test_diff_changed() {
        let c1 = component("abc", "def");
        let c2 = component("uvw", "xyz");

        let forward = c1.diff(&c2);
        assert_eq!(forward.positive, Some(component("uvw", "xyz")));
        assert_eq!(forward.negative, Some(component("abc", "def")));

        let backward = c2.diff(&c1);
        assert_eq!(backward.positive, Some(component("abc", "def")));
        assert_eq!(backward.negative, Some(component("uvw", "xyz")));
    }
}
