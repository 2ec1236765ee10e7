//! The root connection to a Supermarket server.

use crate::component::Component;
use crate::config::Config;
use crate::cookbook::{Cookbook, CookbookVersion};
use crate::delta::{self, diffable_record, Diffable};
use crate::error::Result;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::universe::Universe;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Instance is a connection to one Supermarket deployment.
///
/// Cloning an instance is cheap; clones share the same fetcher.
#[derive(Clone)]
pub struct Instance {
    pub component: Component,
    pub base_url: String,
    pub version: String,
    fetcher: Arc<dyn Fetcher>,
}

/// The data fields of an instance, used for emptiness and equality.
#[derive(Default)]
struct InstanceFields {
    component: Component,
    base_url: String,
    version: String,
}

diffable_record!(InstanceFields {
    component,
    base_url,
    version,
});

impl Instance {
    /// Connects to the Supermarket at `url` with the default configuration.
    ///
    /// Fails if the server's status endpoint can't be reached or does not
    /// answer with a success status.
    pub fn new(url: impl Into<String>) -> Result<Instance> {
        Instance::builder(url).build()
    }

    /// Returns a builder for an instance at `url`.
    pub fn builder(url: impl Into<String>) -> InstanceBuilder {
        InstanceBuilder::new(url)
    }

    /// Returns the fetcher this instance issues requests through.
    pub fn fetcher(&self) -> &dyn Fetcher {
        self.fetcher.as_ref()
    }

    /// Returns the API endpoint, e.g. `https://supermarket.chef.io/api/v1`.
    pub fn endpoint(&self) -> &str {
        &self.component.endpoint
    }

    /// Fetches the cookbook called `name`.
    pub fn cookbook(&self, name: &str) -> Result<Cookbook> {
        Cookbook::fetch(self, name)
    }

    /// Fetches version `version` of `cookbook`.
    pub fn cookbook_version(&self, cookbook: &Cookbook, version: &str) -> Result<CookbookVersion> {
        CookbookVersion::fetch(self, cookbook, version)
    }

    /// Fetches the universe of every cookbook version on this instance.
    pub fn universe(&self) -> Result<Universe> {
        Universe::fetch(self)
    }

    fn fields(&self) -> InstanceFields {
        InstanceFields {
            component: self.component.clone(),
            base_url: self.base_url.clone(),
            version: self.version.clone(),
        }
    }

    /// Returns true if nothing but defaults has been filled in.
    pub fn is_empty(&self) -> bool {
        delta::is_empty(&self.fields())
    }

    /// Compares the data fields of two instances. The fetcher is not compared.
    pub fn equals(&self, other: &Instance) -> bool {
        self.fields().equals(&other.fields())
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("component", &self.component)
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// InstanceBuilder configures and connects an [`Instance`].
pub struct InstanceBuilder {
    url: String,
    config: Config,
    fetcher: Option<Arc<dyn Fetcher>>,
}

impl InstanceBuilder {
    /// Creates a new InstanceBuilder for the server at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        InstanceBuilder {
            url: url.into(),
            config: Config::default(),
            fetcher: None,
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the API version, e.g. `"1"` for `/api/v1`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Sets the request timeout. Ignored when a custom fetcher is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the User-Agent header. Ignored when a custom fetcher is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Sends requests through `fetcher` instead of a new [`HttpFetcher`].
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Builds the instance and checks that the server is alive.
    pub fn build(self) -> Result<Instance> {
        let fetcher: Arc<dyn Fetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpFetcher::new(&self.config)?),
        };
        let base_url = self.url.trim_end_matches('/').to_string();

        let mut component = Component::fetch(fetcher.as_ref(), base_url.as_str())?;
        component.endpoint = format!("{}/api/v{}", base_url, self.config.api_version);

        let status_url = format!("{}/status", base_url);
        debug!("Checking {}", status_url);
        fetcher.get(&status_url)?.error_for_status(&status_url)?;
        info!("Connected to Supermarket at {}", base_url);

        Ok(Instance {
            component,
            base_url,
            version: self.config.api_version,
            fetcher,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::fetch::stub::StubFetcher;
    use std::net::TcpListener;

    pub(crate) const BASE: &str = "https://supermarket.example.com";

    /// Connects an instance to `fetcher`, routing the status endpoint first.
    pub(crate) fn connect(fetcher: &Arc<StubFetcher>) -> Instance {
        fetcher.route(&format!("{}/status", BASE), r#"{"status":"ok"}"#);
        Instance::builder(BASE)
            .fetcher(fetcher.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_no_error() {
        let fetcher = Arc::new(StubFetcher::new());
        let i = connect(&fetcher);
        assert_eq!(i.base_url, BASE);
        assert_eq!(i.version, "1");
        assert_eq!(i.endpoint(), format!("{}/api/v1", BASE));
        assert_eq!(
            fetcher.requests(),
            vec![format!("HEAD {}", BASE), format!("GET {}/status", BASE)]
        );
    }

    #[test]
    fn test_new_records_etag_and_trims_slash() {
        let fetcher = Arc::new(StubFetcher::new());
        fetcher.route_with_etag(BASE, "root-tag", "");
        fetcher.route(&format!("{}/status", BASE), "{}");
        let i = Instance::builder(format!("{}/", BASE))
            .api_version("2")
            .fetcher(fetcher.clone())
            .build()
            .unwrap();
        assert_eq!(i.base_url, BASE);
        assert_eq!(i.component.etag, "root-tag");
        assert_eq!(i.endpoint(), format!("{}/api/v2", BASE));
    }

    #[test]
    fn test_new_status_error() {
        let fetcher = Arc::new(StubFetcher::new());
        fetcher.route_status(&format!("{}/status", BASE), 500, "Internal Server Error");
        let err = Instance::builder(BASE).fetcher(fetcher).build().unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_new_missing_status_endpoint() {
        let fetcher = Arc::new(StubFetcher::new());
        let err = Instance::builder(BASE).fetcher(fetcher).build().unwrap_err();
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_new_down_endpoint() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = reqwest::blocking::Client::builder().no_proxy().build().unwrap();
        let err = Instance::builder(url)
            .fetcher(Arc::new(HttpFetcher::with_client(client)))
            .build()
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_empty_and_equals() {
        let fetcher = Arc::new(StubFetcher::new());
        let i = connect(&fetcher);
        assert!(!i.is_empty());
        assert!(i.equals(&i.clone()));

        let mut other = i.clone();
        other.version = "2".into();
        assert!(!i.equals(&other));

        let mut blank = i.clone();
        blank.component = Component::default();
        blank.base_url.clear();
        blank.version.clear();
        assert!(blank.is_empty());
    }

    #[test]
    fn test_debug_hides_fetcher() {
        let fetcher = Arc::new(StubFetcher::new());
        let i = connect(&fetcher);
        let debug = format!("{:?}", i);
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("routes"));
    }
}
