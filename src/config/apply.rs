use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::parsers::{parse_duration_arg, parse_listen_addr};
use crate::args::{Command, DashboardArgs};
use crate::client::TimeframeLength;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::{ConfigFile, DurationValue};

/// Fills in arguments that were not given on the command line from `config`.
///
/// # Errors
///
/// Returns an error when a config value fails validation.
pub fn apply_config(
    args: &mut DashboardArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "base_url")
        && let Some(base_url) = config.base_url.clone()
    {
        args.base_url = base_url;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = Some(to_duration(timeout)?);
    }

    if !is_cli(matches, "out")
        && let Some(out) = config.out.clone()
    {
        args.render.out = out;
    }

    if !is_cli(matches, "timeframe_length")
        && !is_cli(matches, "timeframe_unit")
        && let (Some(length), Some(unit)) = (config.timeframe_length, config.timeframe_unit.as_ref())
    {
        let length = TimeframeLength::try_from(length).map_err(|err| invalid("timeframe_length", err))?;
        if unit.trim().is_empty() {
            return Err(invalid("timeframe_unit", ValidationError::TimeframeUnitEmpty));
        }
        args.render.timeframe_length = Some(length);
        args.render.timeframe_unit = Some(unit.clone());
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && matches.value_source("no_color") != Some(ValueSource::EnvVariable)
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if let Some(Command::Serve(serve)) = args.command.as_mut()
        && let Some(listen) = config.listen.as_deref()
        && !matches
            .subcommand_matches("serve")
            .is_some_and(|sub| is_cli(sub, "listen"))
    {
        serve.listen = parse_listen_addr(listen).map_err(|err| match err {
            AppError::Validation(source) => invalid("listen", source),
            other => other,
        })?;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn to_duration(value: &DurationValue) -> AppResult<Duration> {
    match value {
        DurationValue::Seconds(0) => Err(invalid(
            "timeout",
            ValidationError::InvalidDurationFormat {
                value: "0".to_owned(),
            },
        )),
        DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
        DurationValue::Text(text) => parse_duration_arg(text).map_err(|err| match err {
            AppError::Validation(source) => invalid("timeout", source),
            other => other,
        }),
    }
}

fn invalid(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField { field, source })
}
