use reqwest::StatusCode;
use thiserror::Error;

/// Failure detail for a metric fetch.
///
/// Transport and HTTP failures share this type so callers never need to know
/// which request path produced them; [`FetchError::status`] is always
/// readable for error display.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' returned {status}.")]
    Status { url: String, status: StatusCode },
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// HTTP status of the failed response, when the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Text shown after `Error:` in the page status region.
    #[must_use]
    pub fn status_label(&self) -> String {
        self.status().map_or_else(
            || "unavailable".to_owned(),
            |status| status.as_u16().to_string(),
        )
    }
}
