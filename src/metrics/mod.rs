//! Metric payload types returned by the remote API.
mod types;


pub use types::{MetricRecord, MetricResponse};
