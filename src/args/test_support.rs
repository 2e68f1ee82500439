use clap::Parser;

use crate::error::{AppError, AppResult};

use super::DashboardArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<DashboardArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    DashboardArgs::try_parse_from(args).map_err(AppError::from)
}
