use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;

use crate::client::TimeframeLength;

use super::defaults::{DEFAULT_BASE_URL, DEFAULT_LISTEN_ADDR, DEFAULT_OUT_PATH};
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_listen_addr, parse_timeframe_length,
};

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Serve the dashboard page with the custom timeframe form
    Serve(ServeArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, short = 'l', default_value = DEFAULT_LISTEN_ADDR, value_parser = parse_listen_addr)]
    pub listen: SocketAddr,
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Path of the HTML report to write
    #[arg(long, short = 'o', default_value = DEFAULT_OUT_PATH)]
    pub out: String,

    /// Custom timeframe length (1-100); requires --timeframe-unit
    #[arg(
        long = "timeframe-length",
        short = 'L',
        requires = "timeframe_unit",
        value_parser = parse_timeframe_length
    )]
    pub timeframe_length: Option<TimeframeLength>,

    /// Custom timeframe unit (e.g. minutes, hours, days); sent lower-cased
    #[arg(long = "timeframe-unit", short = 'U', requires = "timeframe_length")]
    pub timeframe_unit: Option<String>,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fetch metric series from an HTTP endpoint and render them as HTML tables and bar charts."
)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Metric endpoint to query
    #[arg(long = "base-url", short = 'u', default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path to config file (TOML or JSON); defaults to ./metricdash.toml or ./metricdash.json
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Request timeout (supports ms/s/m/h); requests wait indefinitely when unset
    #[arg(long, value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Enable verbose logging (sets log level to debug unless overridden by METRICDASH_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
