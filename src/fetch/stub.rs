//! In-memory fetcher for tests.

use super::{Fetcher, Response};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct Route {
    status: u16,
    reason: String,
    etag: Option<String>,
    body: String,
}

/// StubFetcher answers requests from a table of routes.
///
/// Unknown URLs get a 404. While the stub is down every request fails with a
/// transport error; while only HEAD is down, GET keeps working.
/// Every request is recorded so tests can assert on the traffic.
#[derive(Debug, Default)]
pub(crate) struct StubFetcher {
    routes: Mutex<HashMap<String, Route>>,
    down: Mutex<bool>,
    head_down: Mutex<bool>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        StubFetcher::default()
    }

    /// Serves `body` with a 200 at `url`.
    pub(crate) fn route(&self, url: &str, body: impl Into<String>) {
        self.insert(url, 200, "OK", None, body.into());
    }

    /// Serves `body` with a 200 and an ETag at `url`.
    pub(crate) fn route_with_etag(&self, url: &str, etag: &str, body: impl Into<String>) {
        self.insert(url, 200, "OK", Some(etag.to_string()), body.into());
    }

    /// Serves an empty body with the given status at `url`.
    pub(crate) fn route_status(&self, url: &str, status: u16, reason: &str) {
        self.insert(url, status, reason, None, String::new());
    }

    /// Makes every request fail as if the server were unreachable.
    pub(crate) fn set_down(&self, down: bool) {
        *self.down.lock().unwrap() = down;
    }

    /// Makes HEAD requests fail while GET requests keep being served.
    pub(crate) fn set_head_down(&self, down: bool) {
        *self.head_down.lock().unwrap() = down;
    }

    /// Returns the recorded requests as `"METHOD url"` strings.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns how many GET requests were made to `url`.
    pub(crate) fn gets(&self, url: &str) -> usize {
        let wanted = format!("GET {}", url);
        self.requests().iter().filter(|r| **r == wanted).count()
    }

    fn insert(&self, url: &str, status: u16, reason: &str, etag: Option<String>, body: String) {
        self.routes.lock().unwrap().insert(
            url.to_string(),
            Route {
                status,
                reason: reason.to_string(),
                etag,
                body,
            },
        );
    }

    fn lookup(&self, method: &str, url: &str) -> Result<Option<Route>> {
        self.requests.lock().unwrap().push(format!("{} {}", method, url));
        if *self.down.lock().unwrap() || (method == "HEAD" && *self.head_down.lock().unwrap()) {
            return Err(Error::transport(url, "connection refused"));
        }
        Ok(self.routes.lock().unwrap().get(url).cloned())
    }
}

impl Fetcher for StubFetcher {
    fn get(&self, url: &str) -> Result<Response> {
        Ok(match self.lookup("GET", url)? {
            Some(route) => Response {
                status: route.status,
                reason: route.reason,
                etag: route.etag,
                body: route.body.into_bytes(),
            },
            None => Response {
                status: 404,
                reason: "Not Found".to_string(),
                ..Default::default()
            },
        })
    }

    fn head(&self, url: &str) -> Result<Option<String>> {
        Ok(self.lookup("HEAD", url)?.and_then(|route| route.etag))
    }
}
