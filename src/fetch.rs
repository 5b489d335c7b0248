//! HTTPS downloads.
//!
//! Setup scripts are fetched in-process rather than through a download
//! utility, since on a fresh host the utility may not be installed yet.

use crate::error::{Result, ServeDepsError};
use anyhow::{bail, Context};
use reqwest::blocking::Client;
use std::time::Duration;

/// Downloads a resource into memory.
pub trait Fetch {
    /// Fetch `url`, failing on transport errors and non-success statuses.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Fetches over HTTP/HTTPS with a blocking client.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 60-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(60))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("servedeps/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            bail!("HTTP {}", response.status());
        }

        Ok(response.bytes()?.to_vec())
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Fetching {}", url);
        let body = self.get(url).map_err(|e| ServeDepsError::DownloadFailed {
            url: url.to_string(),
            message: format!("{:#}", e),
        })?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Fetcher for dry runs: reports the download and returns an empty body.
#[derive(Debug, Default)]
pub struct DryRunFetcher;

impl Fetch for DryRunFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::info!("Would download {}", url);
        Ok(Vec::new())
    }
}
