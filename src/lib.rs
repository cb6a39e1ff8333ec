//! Heuristic extraction of partial dates from free-form text.
//!
//! [`interpret()`] takes a fragment of human-written text and pulls out as
//! much of a calendar date as the fragment supports, from a bare year up to
//! a full year-month-day. Month names are recognized in Danish and English.
//! When the leftover numbers stay ambiguous the precision degrades instead
//! of guessing.

mod classify;
mod consts;
mod interpret;
mod months;
mod prelude;
mod resolve;
mod scan;
mod types;

pub use consts::*;
pub use interpret::{Interpreter, interpret};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// A date known to some level of precision: at least the year, optionally
/// the month, optionally the day. Missing components are genuinely unknown,
/// never fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PartialDate {
    /// Full date with day, month, and year
    #[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
    YearMonthDay {
        year: types::Year,
        month: types::Month,
        day: types::Day,
    },
    /// Month and year only
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    YearMonth {
        year: types::Year,
        month: types::Month,
    },
    /// Year only
    #[display(fmt = "{:04}", "year.get()")]
    Year { year: types::Year },
}

/// Errors from building, parsing, or interpreting dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrokError {
    /// The interpreter was handed the empty string; callers must guard this.
    #[error("empty input string")]
    EmptyInput,

    /// Year outside the representable range.
    #[error("invalid year: {0} (not in 1-9999)")]
    InvalidYear(u16),

    /// Month outside 1-12.
    #[error("invalid month: {0} (not in 1-12)")]
    InvalidMonth(u8),

    /// Day outside 1-31.
    #[error("invalid day: {0} (not in 1-31)")]
    InvalidDay(u8),

    /// A canonical date string that does not parse.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
}

impl PartialDate {
    /// Builds a date from plain components, validating each.
    ///
    /// # Errors
    /// Returns the component's bound error, or `InvalidFormat` for a day
    /// without a month.
    pub fn from_parts(year: u16, month: Option<u8>, day: Option<u8>) -> Result<Self, GrokError> {
        let year = types::Year::new(year)?;
        match (month, day) {
            (Some(month), Some(day)) => Ok(Self::YearMonthDay {
                year,
                month: types::Month::new(month)?,
                day: types::Day::new(day)?,
            }),
            (Some(month), None) => Ok(Self::YearMonth {
                year,
                month: types::Month::new(month)?,
            }),
            (None, None) => Ok(Self::Year { year }),
            (None, Some(day)) => Err(GrokError::InvalidFormat(format!(
                "day {day} without a month"
            ))),
        }
    }

    /// Returns the year component (always present)
    pub const fn year(&self) -> u16 {
        match self {
            Self::YearMonthDay { year, .. } | Self::YearMonth { year, .. } | Self::Year { year } => {
                year.get()
            }
        }
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<u8> {
        match self {
            Self::YearMonthDay { month, .. } | Self::YearMonth { month, .. } => Some(month.get()),
            Self::Year { .. } => None,
        }
    }

    /// Returns the day component if present
    pub const fn day(&self) -> Option<u8> {
        match self {
            Self::YearMonthDay { day, .. } => Some(day.get()),
            Self::YearMonth { .. } | Self::Year { .. } => None,
        }
    }

    /// Less precise sorts first on chronological ties.
    const fn precision_rank(&self) -> u8 {
        match self {
            Self::Year { .. } => 0,
            Self::YearMonth { .. } => 1,
            Self::YearMonthDay { .. } => 2,
        }
    }

    /// Earliest concrete day this value can denote, then precision.
    fn sort_key(&self) -> (u16, u8, u8, u8) {
        (
            self.year(),
            self.month().unwrap_or(MIN_MONTH),
            self.day().unwrap_or(MIN_DAY),
            self.precision_rank(),
        )
    }
}

impl PartialOrd for PartialDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PartialDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, GrokError> {
    s.parse().map_err(|_| GrokError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, GrokError> {
    s.parse().map_err(|_| GrokError::InvalidFormat(s.to_owned()))
}

impl FromStr for PartialDate {
    type Err = GrokError;

    /// Parses the canonical rendering only: `YYYY`, `YYYY-MM`, or
    /// `YYYY-MM-DD`. Free-form text goes through [`interpret()`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GrokError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        match parts[..] {
            [year] => Self::from_parts(parse_u16(year)?, None, None),
            [year, month] => Self::from_parts(parse_u16(year)?, Some(parse_u8(month)?), None),
            [year, month, day] => Self::from_parts(
                parse_u16(year)?,
                Some(parse_u8(month)?),
                Some(parse_u8(day)?),
            ),
            _ => Err(GrokError::InvalidFormat(format!(
                "too many {DATE_SEPARATOR} separators: expected 0-2, found {}",
                parts.len() - 1
            ))),
        }
    }
}

impl serde::Serialize for PartialDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PartialDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
