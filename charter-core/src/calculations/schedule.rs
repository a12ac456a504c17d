//! Clock arithmetic for the charter window shown on the confirmation step.
//!
//! Times are written the way the booking form shows them (`10:00 AM`,
//! `1:00 PM`). The end of a charter is the start plus the charter length on a
//! 24-hour clock, printed back in 12-hour form.
//!
//! # Example
//!
//! ```
//! use charter_core::calculations::schedule::{ClockTime, end_time};
//!
//! let start: ClockTime = "10:00 AM".parse().unwrap();
//! assert_eq!(end_time(start, 4).to_string(), "2:00 PM");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::{CharterDuration, StartTime};

/// Errors produced when parsing schedule labels.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid clock time '{0}', expected H:MM AM/PM")]
    InvalidClockTime(String),

    #[error("invalid duration '{0}', expected N hours")]
    InvalidDuration(String),

    #[error("'{0}' is not an offered start time")]
    UnofferedStartTime(String),

    #[error("'{0}' is not an offered charter length")]
    UnofferedDuration(String),
}

/// A wall-clock time with minute precision, stored on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Builds a time from 24-hour components. Out-of-range components wrap.
    pub fn new(
        hour: u32,
        minute: u32,
    ) -> Self {
        Self {
            hour: (hour % 24 + (minute / 60) % 24) % 24,
            minute: minute % 60,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Moves the time forward, wrapping past midnight.
    pub fn plus_hours(
        &self,
        hours: u32,
    ) -> Self {
        Self::new(self.hour + hours % 24, self.minute)
    }

    fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    /// Hour on a 12-hour dial: 0 shows as 12, afternoon hours drop by 12.
    fn display_hour(&self) -> u32 {
        match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidClockTime(s.to_string());

        let (time, period) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hours.parse().map_err(|_| invalid())?;
        let minute: u32 = minutes.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&hour) || minute > 59 || minutes.len() != 2 {
            return Err(invalid());
        }

        let hour = match (period.trim(), hour) {
            ("AM", 12) => 0,
            ("AM", h) => h,
            ("PM", 12) => 12,
            ("PM", h) => h + 12,
            _ => return Err(invalid()),
        };

        Ok(Self::new(hour, minute))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let period = if self.is_pm() { "PM" } else { "AM" };
        write!(f, "{}:{:02} {}", self.display_hour(), self.minute, period)
    }
}

/// Parses an `N hours` label into its hour count.
pub fn parse_hours(label: &str) -> Result<u32, ScheduleError> {
    let invalid = || ScheduleError::InvalidDuration(label.to_string());

    let (count, unit) = label.trim().split_once(' ').ok_or_else(invalid)?;
    if !matches!(unit.trim(), "hour" | "hours") {
        return Err(invalid());
    }
    count.parse().map_err(|_| invalid())
}

/// End of a charter that starts at `start` and lasts `hours`.
pub fn end_time(
    start: ClockTime,
    hours: u32,
) -> ClockTime {
    start.plus_hours(hours)
}

/// End of the charter for a selected slot.
pub fn charter_end(
    start: StartTime,
    duration: CharterDuration,
) -> ClockTime {
    end_time(start.clock(), duration.hours())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // ClockTime parsing and display
    // =========================================================================

    #[test]
    fn parses_morning_time() {
        let time: ClockTime = "9:00 AM".parse().unwrap();

        assert_eq!(time, ClockTime::new(9, 0));
    }

    #[test]
    fn parses_noon_as_twelve() {
        let time: ClockTime = "12:00 PM".parse().unwrap();

        assert_eq!(time.hour(), 12);
    }

    #[test]
    fn parses_midnight_as_zero() {
        let time: ClockTime = "12:30 AM".parse().unwrap();

        assert_eq!(time, ClockTime::new(0, 30));
    }

    #[test]
    fn new_wraps_overflowing_components() {
        assert_eq!(ClockTime::new(25, 90), ClockTime::new(2, 30));
        assert_eq!(ClockTime::new(u32::MAX, u32::MAX), ClockTime::new(19, 15));
    }

    #[test]
    fn rejects_missing_period() {
        assert_eq!(
            "10:00".parse::<ClockTime>(),
            Err(ScheduleError::InvalidClockTime("10:00".to_string()))
        );
    }

    #[test]
    fn rejects_out_of_range_hour() {
        assert!("13:00 PM".parse::<ClockTime>().is_err());
        assert!("0:00 AM".parse::<ClockTime>().is_err());
    }

    #[test]
    fn rejects_single_digit_minutes() {
        assert!("10:5 AM".parse::<ClockTime>().is_err());
    }

    #[test]
    fn displays_midnight_as_twelve_am() {
        assert_eq!(ClockTime::new(0, 0).to_string(), "12:00 AM");
    }

    #[test]
    fn displays_afternoon_on_twelve_hour_dial() {
        assert_eq!(ClockTime::new(16, 5).to_string(), "4:05 PM");
    }

    // =========================================================================
    // parse_hours
    // =========================================================================

    #[test]
    fn parse_hours_reads_count() {
        assert_eq!(parse_hours("4 hours"), Ok(4));
        assert_eq!(parse_hours("1 hour"), Ok(1));
    }

    #[test]
    fn parse_hours_rejects_other_units() {
        assert_eq!(
            parse_hours("4 days"),
            Err(ScheduleError::InvalidDuration("4 days".to_string()))
        );
    }

    // =========================================================================
    // end_time
    // =========================================================================

    fn end_at(
        start: &str,
        hours: u32,
    ) -> String {
        end_time(start.parse().unwrap(), hours).to_string()
    }

    #[test]
    fn end_time_morning_into_afternoon() {
        assert_eq!(end_at("10:00 AM", 4), "2:00 PM");
    }

    #[test]
    fn end_time_lands_after_noon() {
        assert_eq!(end_at("11:00 AM", 2), "1:00 PM");
    }

    #[test]
    fn end_time_afternoon_start() {
        assert_eq!(end_at("1:00 PM", 3), "4:00 PM");
    }

    #[test]
    fn end_time_ending_exactly_at_noon() {
        assert_eq!(end_at("10:00 AM", 2), "12:00 PM");
    }

    #[test]
    fn end_time_wraps_past_midnight() {
        let start: ClockTime = "10:00 PM".parse().unwrap();

        assert_eq!(end_time(start, 3).to_string(), "1:00 AM");
    }

    #[test]
    fn charter_end_uses_latest_offered_slot() {
        let end = charter_end(StartTime::TwoPm, CharterDuration::SixHours);

        assert_eq!(end.to_string(), "8:00 PM");
    }
}
