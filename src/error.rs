//! Error types for API requests.

use thiserror::Error;

/// Boxed source error carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error represents a failed request against a Supermarket instance.
///
/// Nothing is retried: every failure surfaces to the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint could not be reached, or the request timed out.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The endpoint answered with a non-success status.
    #[error("{url}: {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// The response body was not the JSON document we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be built from the configuration.
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },

    /// A snapshot was asked to refresh without an instance to fetch through.
    #[error("{endpoint:?} is not bound to an instance")]
    Unbound { endpoint: String },
}

impl Error {
    /// Creates a transport error.
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Creates a status error.
    pub fn status(url: impl Into<String>, status: u16, reason: impl Into<String>) -> Self {
        Error::Status {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Creates a decode error.
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            url: url.into(),
            source,
        }
    }

    /// Creates a client construction error.
    pub fn client(message: impl Into<String>) -> Self {
        Error::Client {
            message: message.into(),
        }
    }

    /// Creates an error for a snapshot with no instance.
    pub fn unbound(endpoint: impl Into<String>) -> Self {
        Error::Unbound {
            endpoint: endpoint.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Returns the HTTP status code for status errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the URL the failed request was made against.
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Transport { url, .. } | Error::Status { url, .. } | Error::Decode { url, .. } => {
                Some(url)
            }
            Error::Client { .. } | Error::Unbound { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
