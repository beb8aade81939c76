use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Candle granularity supported by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    I1M,
    I5M,
    I15M,
    I1H,
    I6H,
    I1D,
}

impl Interval {
    pub const ALL: [Interval; 6] = [
        Interval::I1M,
        Interval::I5M,
        Interval::I15M,
        Interval::I1H,
        Interval::I6H,
        Interval::I1D,
    ];

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        match self {
            Self::I1M => TimeDelta::minutes(1),
            Self::I5M => TimeDelta::minutes(5),
            Self::I15M => TimeDelta::minutes(15),
            Self::I1H => TimeDelta::hours(1),
            Self::I6H => TimeDelta::hours(6),
            Self::I1D => TimeDelta::days(1),
        }
    }

    /// `strftime` pattern for axis tick labels at this granularity.
    #[must_use]
    pub fn tick_format(self) -> &'static str {
        match self {
            Self::I1M | Self::I5M | Self::I15M | Self::I1H => "%H:%M",
            Self::I6H => "%d %b %H:%M",
            Self::I1D => "%d %b",
        }
    }

    #[must_use]
    pub fn is_intraday(self) -> bool {
        !matches!(self, Self::I1D)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I1M => "1m",
            Self::I5M => "5m",
            Self::I15M => "15m",
            Self::I1H => "1h",
            Self::I6H => "6h",
            Self::I1D => "1d",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::InvalidData(format!("unknown interval `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn parses_short_names() {
        assert_eq!("15m".parse::<Interval>().expect("parse"), Interval::I15M);
        assert_eq!(" 1D ".parse::<Interval>().expect("parse"), Interval::I1D);
        assert!("2w".parse::<Interval>().is_err());
    }
}
