use std::net::SocketAddr;
use std::time::Duration;

use crate::client::TimeframeLength;
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_timeframe_length(s: &str) -> AppResult<TimeframeLength> {
    s.parse::<TimeframeLength>().map_err(AppError::from)
}

pub(crate) fn parse_listen_addr(s: &str) -> AppResult<SocketAddr> {
    s.trim().parse::<SocketAddr>().map_err(|err| {
        AppError::validation(ValidationError::InvalidListenAddr {
            value: s.to_owned(),
            source: err,
        })
    })
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let digits_len = value.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    let seconds_per_unit = match unit_part {
        "ms" => return non_zero(Duration::from_millis(number), value),
        "" | "s" => 1,
        "m" => 60,
        "h" => 3600,
        _ => {
            return Err(AppError::validation(
                ValidationError::InvalidDurationFormat {
                    value: value.to_owned(),
                },
            ));
        }
    };
    let secs = number.checked_mul(seconds_per_unit).ok_or_else(|| {
        AppError::validation(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        })
    })?;
    non_zero(Duration::from_secs(secs), value)
}

fn non_zero(duration: Duration, value: &str) -> AppResult<Duration> {
    if duration.is_zero() {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    Ok(duration)
}
