mod execute;

use clap::{CommandFactory, FromArgMatches};

use crate::args::DashboardArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use crate::system::logger::init_logging;

/// Parses arguments, merges config, installs logging and runs the command.
///
/// # Errors
///
/// Returns an error when arguments or config are invalid, the report cannot
/// be written, or the metric fetch failed.
pub fn run() -> AppResult<()> {
    let matches = DashboardArgs::command().get_matches();
    let mut args = DashboardArgs::from_arg_matches(&matches)?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute::execute(args))
}
