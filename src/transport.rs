//! The "send one GET, get one response" seam under [`Client`](crate::Client).

use std::fmt;
use std::io::Read;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use reqwest::header::HeaderMap;
use url::Url;

use crate::error::TransportError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("airly-client/", env!("CARGO_PKG_VERSION"));

/// An outgoing GET request.
#[derive(Debug, Clone)]
pub struct Request {
    pub url: Url,
    pub headers: HeaderMap,
}

/// A received response. The body is read to the end and dropped by the client.
pub struct Response {
    pub status: u16,
    pub body: Box<dyn Read + Send>,
}

impl Response {
    pub fn new(status: u16, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

pub trait Transport: Send + Sync {
    /// Sends the request. An error means no response was received at all;
    /// non-success statuses are still `Ok`.
    fn send(&self, request: Request) -> Result<Response, TransportError>;
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }

    pub fn with_client(http: reqwest::blocking::Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        match Self::new() {
            Ok(transport) => transport,
            Err(err) => {
                tracing::warn!(error = %err, "failed to build tuned http client; using reqwest defaults");
                Self::with_client(reqwest::blocking::Client::new())
            }
        }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        let response = self
            .http
            .get(request.url)
            .headers(request.headers)
            .send()?;
        let status = response.status().as_u16();
        Ok(Response::new(status, response))
    }
}

/// Transport shared by every client that was not given one explicitly.
pub fn default_transport() -> Arc<dyn Transport> {
    static DEFAULT: OnceLock<Arc<dyn Transport>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(ReqwestTransport::default()))
        .clone()
}
