//! HTTP transport abstraction.
//!
//! The client only ever needs one capability from the network: issue a GET
//! against an absolute URL and hand back the status plus the raw body. That
//! capability lives behind the [`Transport`] trait so tests can swap the
//! network out for a mock, while [`ReqwestTransport`] is what production
//! callers get by default.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use std::time::Duration;

use crate::client::Error;

/// A raw HTTP response: status code plus unparsed body bytes.
///
/// The body is never decoded by this crate; image and PDF content is handed
/// to the caller verbatim.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// The injectable HTTP collaborator used by
/// [`Client::take`](crate::Client::take).
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET against the given absolute URL and read the full
    /// response body.
    ///
    /// Transport-level failures (DNS, connection refused, timeouts) are
    /// returned as [`Error::Http`] and are not reinterpreted by the client.
    async fn get(&self, url: &str) -> Result<HttpResponse, Error>;
}

/// Default [`Transport`] backed by [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default configuration.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport with a request timeout applied.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(HttpResponse { status, body })
    }
}
