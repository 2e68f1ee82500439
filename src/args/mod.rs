//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{Command, DashboardArgs, RenderArgs, ServeArgs};
pub use defaults::{DEFAULT_BASE_URL, DEFAULT_LISTEN_ADDR, DEFAULT_OUT_PATH};
