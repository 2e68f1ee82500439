use std::fmt;

use crate::error::ValidationError;

/// Which window of data to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeframe {
    /// Whatever window the endpoint returns without parameters.
    Default,
    /// An explicit window; both values are sent verbatim.
    Custom { length: String, unit: String },
}

impl Timeframe {
    #[must_use]
    pub fn custom(length: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::Custom {
            length: length.into(),
            unit: unit.into(),
        }
    }

    /// Builds the request URL for this timeframe against `base`.
    ///
    /// Custom values are interpolated literally; callers supply safe values.
    #[must_use]
    pub fn request_url(&self, base: &str) -> String {
        match self {
            Self::Default => base.to_owned(),
            Self::Custom { length, unit } => format!(
                "{}/?timeframeLength={}&timeframeUnit={}",
                base.trim_end_matches('/'),
                length,
                unit
            ),
        }
    }
}

/// Timeframe length accepted by the submit form: an integer in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeframeLength(u64);

impl TimeframeLength {
    pub const MIN: u64 = 1;
    pub const MAX: u64 = 100;

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for TimeframeLength {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::TimeframeLengthOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }
}

impl std::str::FromStr for TimeframeLength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        Self::try_from(value)
    }
}

impl fmt::Display for TimeframeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
