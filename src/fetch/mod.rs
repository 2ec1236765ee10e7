//! Fetch module - The HTTP seam between API records and the network.
//!
//! Records never talk to the network directly; they go through a [`Fetcher`].
//! [`HttpFetcher`] is the real implementation. Tests and host programs can
//! supply their own.

mod http;

#[cfg(test)]
pub(crate) mod stub;

pub use http::*;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Fetcher performs blocking requests against API endpoints.
pub trait Fetcher: Send + Sync {
    /// Issues a GET request.
    ///
    /// Only transport failures are errors; the status code is left for the
    /// caller to check with [`Response::error_for_status`].
    fn get(&self, url: &str) -> Result<Response>;

    /// Issues a HEAD request and returns the `ETag` header, if any.
    fn head(&self, url: &str) -> Result<Option<String>>;
}

/// Response is a fully read GET response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub reason: String,
    pub etag: Option<String>,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Response {
            status: 200,
            reason: "OK".to_string(),
            etag: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx response into [`Error::Status`].
    pub fn error_for_status(self, url: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::status(url, self.status, self.reason))
        }
    }

    /// Decodes the body as JSON.
    pub fn decode<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| Error::decode(url, e))
    }
}

/// Fetches `url`, checks the status and decodes the body.
///
/// Also returns the `ETag` sent with the body, so a record and its ETag always
/// come from the same response.
pub(crate) fn get_json<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    url: &str,
) -> Result<(T, Option<String>)> {
    let response = fetcher.get(url)?.error_for_status(url)?;
    let value = response.decode(url)?;
    Ok((value, response.etag))
}

/// Decodes JSON `null` as the type's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
