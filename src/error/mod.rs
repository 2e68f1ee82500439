mod app;
mod chart;
mod config;
mod fetch;
mod validation;

pub use app::{AppError, AppResult};
pub use chart::ChartError;
pub use config::ConfigError;
pub use fetch::FetchError;
pub use validation::ValidationError;
