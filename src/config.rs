//! Client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API version appended to the instance endpoint.
pub const DEFAULT_API_VERSION: &str = "1";

/// Default timeout for HTTP requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Config controls how an [`Instance`](crate::Instance) talks to its server.
///
/// The crate reads no config file of its own; a host program can embed this
/// struct in its own configuration. `timeout` is given in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_version: String,
    #[serde(with = "seconds")]
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("supermarket/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
