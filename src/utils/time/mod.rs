//! Time-of-day parsing and minute arithmetic.
//!
//! All grid and overlap calculations work on minutes since midnight. Strings
//! coming from pickers or forms are validated here once, so the rest of the
//! crate can assume well-formed hours and minutes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Errors produced when reading or building times of day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Invalid time format '{0}' (expected H:MM or HH:MM)")]
    InvalidFormat(String),
    #[error("Time '{0}' is out of range (hour 0-23, minute 0-59)")]
    OutOfRange(String),
    #[error("{0} minutes is past the end of the day")]
    MinutesOutOfRange(u16),
}

/// A 24-hour wall-clock time with minute precision and no date or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Build a time from its components, rejecting hours past 23 or minutes past 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::OutOfRange(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    /// Build a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::MinutesOutOfRange(minutes));
        }
        Ok(Self {
            hour: (minutes / MINUTES_PER_HOUR) as u8,
            minute: (minutes % MINUTES_PER_HOUR) as u8,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, in `0..1440`.
    pub fn minutes(&self) -> u16 {
        self.hour as u16 * MINUTES_PER_HOUR + self.minute as u16
    }

    /// Fractional hours since midnight (e.g. 9:30 is 9.5).
    pub fn fractional_hours(&self) -> f32 {
        self.hour as f32 + self.minute as f32 / 60.0
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidFormat(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;

        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !digits(hour) || !digits(minute)
        {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        if hour > 23 || minute > 59 {
            return Err(TimeError::OutOfRange(s.to_string()));
        }

        Ok(Self { hour, minute })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// A same-day span of time, compared as a half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parse both ends from `"H:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeError> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    /// Whether the two ranges share any instant. Touching endpoints do not count.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start.minutes() < other.end.minutes() && other.start.minutes() < self.end.minutes()
    }

    /// Length in minutes. Zero when `end` is not after `start`.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }
}

/// Convert an `"H:MM"` string to minutes since midnight.
pub fn time_to_minutes(time: &str) -> Result<u16, TimeError> {
    Ok(time.parse::<TimeOfDay>()?.minutes())
}

/// Convert minutes since midnight to a zero-padded `"HH:MM"` string.
pub fn minutes_to_time(minutes: u16) -> Result<String, TimeError> {
    Ok(TimeOfDay::from_minutes(minutes)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0:00", 0; "midnight short")]
    #[test_case("00:00", 0; "midnight padded")]
    #[test_case("9:30", 570; "single digit hour")]
    #[test_case("13:05", 785; "afternoon")]
    #[test_case("23:59", 1439; "last minute")]
    fn test_time_to_minutes(input: &str, expected: u16) {
        assert_eq!(time_to_minutes(input).unwrap(), expected);
    }

    #[test_case("930"; "missing colon")]
    #[test_case("9:3"; "single digit minute")]
    #[test_case("123:00"; "three digit hour")]
    #[test_case("ab:cd"; "non numeric")]
    #[test_case(" 9:30"; "leading space")]
    #[test_case("9:30:00"; "seconds")]
    #[test_case("-1:30"; "negative hour")]
    #[test_case(""; "empty")]
    fn test_time_to_minutes_invalid_format(input: &str) {
        assert_eq!(
            time_to_minutes(input),
            Err(TimeError::InvalidFormat(input.to_string()))
        );
    }

    #[test]
    fn test_time_to_minutes_out_of_range() {
        assert_eq!(
            time_to_minutes("24:00"),
            Err(TimeError::OutOfRange("24:00".to_string()))
        );
        assert_eq!(
            time_to_minutes("12:60"),
            Err(TimeError::OutOfRange("12:60".to_string()))
        );
    }

    #[test]
    fn test_minutes_to_time() {
        assert_eq!(minutes_to_time(0).unwrap(), "00:00");
        assert_eq!(minutes_to_time(570).unwrap(), "09:30");
        assert_eq!(minutes_to_time(1439).unwrap(), "23:59");
    }

    #[test]
    fn test_minutes_to_time_past_end_of_day() {
        assert_eq!(minutes_to_time(1440), Err(TimeError::MinutesOutOfRange(1440)));
    }

    #[test]
    fn test_canonical_form() {
        let minutes = time_to_minutes("9:30").unwrap();
        assert_eq!(minutes_to_time(minutes).unwrap(), "09:30");
    }

    #[test]
    fn test_time_of_day_ordering() {
        let early: TimeOfDay = "8:45".parse().unwrap();
        let late: TimeOfDay = "10:05".parse().unwrap();
        assert!(early < late);
        assert!(TimeOfDay::MIDNIGHT < early);
    }

    #[test]
    fn test_time_of_day_new_rejects_out_of_range() {
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert!(TimeOfDay::new(24, 0).is_err());
        assert!(TimeOfDay::new(0, 60).is_err());
    }

    #[test]
    fn test_time_of_day_serde_as_string() {
        let time: TimeOfDay = "7:15".parse().unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"07:15\"");

        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);

        assert!(serde_json::from_str::<TimeOfDay>("\"7.15\"").is_err());
    }

    #[test]
    fn test_range_overlap_partial() {
        let a = TimeRange::parse("9:00", "10:00").unwrap();
        let b = TimeRange::parse("9:30", "10:30").unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_range_touching_is_not_overlap() {
        let a = TimeRange::parse("9:00", "10:00").unwrap();
        let b = TimeRange::parse("10:00", "11:00").unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_range_duration() {
        let range = TimeRange::parse("9:15", "11:00").unwrap();
        assert_eq!(range.duration_minutes(), 105);

        let inverted = TimeRange::parse("11:00", "9:15").unwrap();
        assert_eq!(inverted.duration_minutes(), 0);
    }
}
