//! Remote file transport
//!
//! [`Fetcher`] is the capability the resolver uses to download a
//! configuration file from a URL; [`HttpFetcher`] implements it with a
//! blocking `reqwest` client.

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{DepsrcError, Result};
use crate::identity::strip_credentials;

/// Timeout for a whole download
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Transport capability used by the resolver
pub trait Fetcher {
    /// Start a GET request for `url` and return the response body.
    /// Non-success statuses are errors.
    fn fetch(&self, url: &str) -> Result<Box<dyn Read>>;
}

/// HTTP(S) fetcher backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout and user agent
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("depsrc/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Box<dyn Read>> {
        let response = self.client.get(url).send().map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DepsrcError::HttpStatus {
                url: strip_credentials(url),
                status: status.as_u16(),
            });
        }

        Ok(Box::new(response))
    }
}
