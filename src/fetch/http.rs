//! reqwest-backed fetcher.

use super::{Fetcher, Response};
use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::ETAG;
use tracing::debug;

/// HttpFetcher issues blocking requests with reqwest.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher using the timeout and user agent from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::client(e.to_string()))?;
        Ok(HttpFetcher { client })
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        HttpFetcher { client }
    }
}

fn etag_of(response: &reqwest::blocking::Response) -> Option<String> {
    response
        .headers()
        .get(ETAG)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::transport(url, e))?;

        let status = response.status();
        let etag = etag_of(&response);
        let body = response.bytes().map_err(|e| Error::transport(url, e))?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(Response {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            etag,
            body: body.to_vec(),
        })
    }

    fn head(&self, url: &str) -> Result<Option<String>> {
        debug!("HEAD {}", url);
        let response = self
            .client
            .head(url)
            .send()
            .map_err(|e| Error::transport(url, e))?;
        Ok(etag_of(&response))
    }
}
