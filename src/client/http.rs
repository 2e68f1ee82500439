use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult, FetchError, ValidationError};
use crate::metrics::MetricResponse;

use super::{FetchResult, MetricSource, Timeframe};

const USER_AGENT: &str = concat!("metricdash/", env!("CARGO_PKG_VERSION"));

/// [`MetricSource`] backed by a `reqwest` client against a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpMetricSource {
    client: Client,
    base_url: String,
}

impl HttpMetricSource {
    /// Builds a source for `base_url`.
    ///
    /// No timeout is applied unless `timeout` is given, so a hung endpoint
    /// keeps the request pending.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is not an absolute http(s) URL or the
    /// client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let parsed = url::Url::parse(base_url).map_err(|err| {
            AppError::validation(ValidationError::InvalidBaseUrl {
                url: base_url.to_owned(),
                source: err,
            })
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                url: base_url.to_owned(),
            }));
        }

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MetricSource for HttpMetricSource {
    async fn fetch(&self, timeframe: &Timeframe) -> FetchResult {
        let url = timeframe.request_url(&self.base_url);
        debug!("Fetching metrics from {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("Metric request to {} failed: {}", url, err);
                return Err(FetchError::Transport { url, source: err });
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Metric request to {} returned {}", url, status);
            return Err(FetchError::Status { url, status });
        }

        match response.json::<MetricResponse>().await {
            Ok(data) => {
                debug!(
                    "Received {} metric series from {}",
                    data.metric_data_results.len(),
                    url
                );
                Ok(data)
            }
            Err(err) => {
                warn!("Metric response from {} was not valid JSON: {}", url, err);
                Err(FetchError::Decode { url, source: err })
            }
        }
    }
}
