//! HTTP stats client.
//!
//! # Responsibilities
//! - Issue one GET against the stats endpoint per call
//! - Reject non-200 answers
//! - Decode the body into a [`MetricsSnapshot`]

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::EndpointConfig;
use crate::fetch::error::{FetchError, FetchResult};
use crate::fetch::snapshot::MetricsSnapshot;

/// Anything that can produce a snapshot of the monitored host.
pub trait StatsSource {
    /// Perform a single fetch attempt.
    fn fetch(&self) -> impl Future<Output = FetchResult<MetricsSnapshot>> + Send;
}

/// Fetches snapshots from the remote `_stats` endpoint.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    /// Build a fetcher from endpoint configuration.
    pub fn new(config: &EndpointConfig) -> FetchResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_client(config.url.clone(), builder.build()?))
    }

    /// Use a caller-supplied HTTP client.
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StatsSource for HttpFetcher {
    async fn fetch(&self) -> FetchResult<MetricsSnapshot> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::BadStatus(status));
        }

        let body = response.text().await?;
        tracing::trace!(url = %self.url, body = %body, "Stats payload received");

        Ok(body.parse::<MetricsSnapshot>()?)
    }
}
