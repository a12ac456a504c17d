//! Month grid backing the date picker.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column headings of the Sunday-first week grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidFormat(String),

    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),
}

/// One calendar month as shown by the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    pub fn new(
        year: i32,
        month: u32,
    ) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Heading such as `July 2024`.
    pub fn label(&self) -> String {
        self.first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(following)) if following > first => {
                following.signed_duration_since(first).num_days() as u32
            }
            // December of the last representable year.
            _ => 31,
        }
    }

    /// Empty cells before day 1 in a Sunday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn previous(&self) -> Self {
        match self.month {
            1 => Self {
                year: self.year - 1,
                month: 12,
            },
            m => Self {
                year: self.year,
                month: m - 1,
            },
        }
    }

    pub fn next(&self) -> Self {
        match self.month {
            12 => Self {
                year: self.year + 1,
                month: 1,
            },
            m => Self {
                year: self.year,
                month: m + 1,
            },
        }
    }

    /// The date for `day` in this month, if the month has such a day.
    pub fn date(
        &self,
        day: u32,
    ) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// All dates of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.days_in_month()).filter_map(move |day| self.date(day))
    }
}

impl FromStr for CalendarMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidFormat(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for CalendarMonth {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarMonth> for String {
    fn from(value: CalendarMonth) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Default for CalendarMonth {
    /// July 2024, the month the booking widget opens on.
    fn default() -> Self {
        Self {
            year: 2024,
            month: 7,
        }
    }
}

/// Long form used on the confirmation step, e.g. `Friday, July 5, 2024`.
pub fn format_long_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => "Not selected".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn july_2024() -> CalendarMonth {
        CalendarMonth::new(2024, 7).unwrap()
    }

    #[test]
    fn label_spells_out_month() {
        assert_eq!(july_2024().label(), "July 2024");
    }

    #[test]
    fn july_2024_grid_layout() {
        let month = july_2024();

        assert_eq!(month.days_in_month(), 31);
        assert_eq!(month.leading_blanks(), 1); // July 1, 2024 is a Monday
    }

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2025, 2).unwrap().days_in_month(), 28);
    }

    #[test]
    fn december_next_wraps_to_january() {
        let december = CalendarMonth::new(2024, 12).unwrap();

        assert_eq!(december.next(), CalendarMonth::new(2025, 1).unwrap());
        assert_eq!(december.next().previous(), december);
    }

    #[test]
    fn date_rejects_day_past_month_end() {
        assert!(july_2024().date(31).is_some());
        assert!(CalendarMonth::new(2024, 6).unwrap().date(31).is_none());
    }

    #[test]
    fn days_iterates_whole_month() {
        assert_eq!(july_2024().days().count(), 31);
    }

    #[test]
    fn parses_year_month() {
        assert_eq!("2024-07".parse::<CalendarMonth>(), Ok(july_2024()));
        assert_eq!(july_2024().to_string(), "2024-07");
    }

    #[test]
    fn rejects_month_thirteen() {
        assert_eq!(
            "2024-13".parse::<CalendarMonth>(),
            Err(CalendarError::MonthOutOfRange(13))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            "July".parse::<CalendarMonth>(),
            Err(CalendarError::InvalidFormat("July".to_string()))
        );
    }

    #[test]
    fn long_date_includes_weekday() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 5);

        assert_eq!(format_long_date(date), "Friday, July 5, 2024");
        assert_eq!(format_long_date(None), "Not selected");
    }
}
