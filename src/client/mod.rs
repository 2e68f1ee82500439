//! The only I/O boundary: fetching metric data from the remote endpoint.
mod http;
mod timeframe;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::metrics::MetricResponse;

pub use http::HttpMetricSource;
pub use timeframe::{Timeframe, TimeframeLength};

/// Uniform outcome of every fetch, whichever request path produced it.
pub type FetchResult = Result<MetricResponse, FetchError>;

/// Something that can answer a metric query.
///
/// Implementations perform exactly one attempt per call and fold every failure
/// into [`FetchError`].
#[async_trait]
pub trait MetricSource: Send + Sync {
    async fn fetch(&self, timeframe: &Timeframe) -> FetchResult;

    async fn fetch_default(&self) -> FetchResult {
        self.fetch(&Timeframe::Default).await
    }

    async fn fetch_custom(&self, length: &str, unit: &str) -> FetchResult {
        self.fetch(&Timeframe::custom(length, unit)).await
    }
}
