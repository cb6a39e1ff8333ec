use crate::GrokError;
use crate::consts::{MAX_DAY, MAX_MONTH, MAX_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
///
/// The interpreter only ever *produces* years inside its own acceptance
/// window, but the type bound is the full range so canonical strings from
/// other sources still parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `GrokError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, GrokError> {
        let non_zero = NonZeroU16::new(value).ok_or(GrokError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(GrokError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = GrokError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `GrokError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, GrokError> {
        let non_zero = NonZeroU8::new(value).ok_or(GrokError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(GrokError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = GrokError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be in the range `1..=MAX_DAY` (1..=31)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// The bound is month-agnostic: the heuristics do not validate calendar
/// dates, so a `Day` of 31 pairs with any month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `GrokError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, GrokError> {
        let non_zero = NonZeroU8::new(value).ok_or(GrokError::InvalidDay(value))?;
        if value > MAX_DAY {
            return Err(GrokError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = GrokError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(1900).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(GrokError::InvalidYear(0))));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(result, Err(GrokError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_get_and_display() {
        let year = Year::new(1983).unwrap();
        assert_eq!(year.get(), 1983);
        assert_eq!(year.to_string(), "1983");
    }

    #[test]
    fn test_year_try_from_u16() {
        let year: Year = 1983.try_into().unwrap();
        assert_eq!(year.get(), 1983);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Year, _> = 10000.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_into_u16() {
        let year = Year::new(1983).unwrap();
        let value: u16 = year.into();
        assert_eq!(value, 1983);
    }

    #[test]
    fn test_year_ordering() {
        let y1 = Year::new(1923).unwrap();
        let y2 = Year::new(1983).unwrap();
        assert!(y1 < y2);
        assert!(y2 > y1);
        assert_eq!(y1, y1);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1983).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1983");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        let result = Month::new(0);
        assert!(matches!(result, Err(GrokError::InvalidMonth(0))));

        let result = Month::new(13);
        assert!(matches!(result, Err(GrokError::InvalidMonth(13))));

        let result = Month::new(255);
        assert!(matches!(result, Err(GrokError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_get_and_display() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.get(), 8);
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_conversions() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());

        let value: u8 = month.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
    }

    #[test]
    fn test_day_new_valid() {
        assert!(Day::new(1).is_ok());
        assert!(Day::new(15).is_ok());
        assert!(Day::new(31).is_ok());
    }

    #[test]
    fn test_day_new_invalid() {
        let result = Day::new(0);
        assert!(matches!(result, Err(GrokError::InvalidDay(0))));

        let result = Day::new(32);
        assert!(matches!(result, Err(GrokError::InvalidDay(32))));
    }

    #[test]
    fn test_day_is_month_agnostic() {
        // No days-in-month knowledge at this level: 31 is fine even though
        // some months cannot hold it.
        assert!(Day::new(29).is_ok());
        assert!(Day::new(30).is_ok());
        assert!(Day::new(31).is_ok());
    }

    #[test]
    fn test_day_get_and_display() {
        let day = Day::new(15).unwrap();
        assert_eq!(day.get(), 15);
        assert_eq!(day.to_string(), "15");
    }

    #[test]
    fn test_day_conversions() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let value: u8 = day.into();
        assert_eq!(value, 15);
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }
}
