//! Start times and charter lengths offered on the Date & Time step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::schedule::{ClockTime, ScheduleError};

/// Departure time options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StartTime {
    NineAm,
    #[default]
    TenAm,
    ElevenAm,
    Noon,
    OnePm,
    TwoPm,
}

impl StartTime {
    pub const ALL: [StartTime; 6] = [
        Self::NineAm,
        Self::TenAm,
        Self::ElevenAm,
        Self::Noon,
        Self::OnePm,
        Self::TwoPm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NineAm => "9:00 AM",
            Self::TenAm => "10:00 AM",
            Self::ElevenAm => "11:00 AM",
            Self::Noon => "12:00 PM",
            Self::OnePm => "1:00 PM",
            Self::TwoPm => "2:00 PM",
        }
    }

    pub fn clock(&self) -> ClockTime {
        match self {
            Self::NineAm => ClockTime::new(9, 0),
            Self::TenAm => ClockTime::new(10, 0),
            Self::ElevenAm => ClockTime::new(11, 0),
            Self::Noon => ClockTime::new(12, 0),
            Self::OnePm => ClockTime::new(13, 0),
            Self::TwoPm => ClockTime::new(14, 0),
        }
    }
}

impl FromStr for StartTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clock: ClockTime = s.parse()?;
        Self::ALL
            .into_iter()
            .find(|t| t.clock() == clock)
            .ok_or_else(|| ScheduleError::UnofferedStartTime(s.to_string()))
    }
}

impl TryFrom<String> for StartTime {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StartTime> for String {
    fn from(value: StartTime) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for StartTime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Charter length options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CharterDuration {
    TwoHours,
    ThreeHours,
    #[default]
    FourHours,
    SixHours,
}

impl CharterDuration {
    pub const ALL: [CharterDuration; 4] = [
        Self::TwoHours,
        Self::ThreeHours,
        Self::FourHours,
        Self::SixHours,
    ];

    pub fn hours(&self) -> u32 {
        match self {
            Self::TwoHours => 2,
            Self::ThreeHours => 3,
            Self::FourHours => 4,
            Self::SixHours => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TwoHours => "2 hours",
            Self::ThreeHours => "3 hours",
            Self::FourHours => "4 hours",
            Self::SixHours => "6 hours",
        }
    }
}

impl FromStr for CharterDuration {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hours = crate::calculations::schedule::parse_hours(s)?;
        Self::ALL
            .into_iter()
            .find(|d| d.hours() == hours)
            .ok_or_else(|| ScheduleError::UnofferedDuration(s.to_string()))
    }
}

impl TryFrom<String> for CharterDuration {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CharterDuration> for String {
    fn from(value: CharterDuration) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for CharterDuration {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_initial_booking() {
        assert_eq!(StartTime::default(), StartTime::TenAm);
        assert_eq!(CharterDuration::default(), CharterDuration::FourHours);
    }

    #[test]
    fn start_time_labels_round_trip() {
        for time in StartTime::ALL {
            assert_eq!(time.label().parse::<StartTime>(), Ok(time));
        }
    }

    #[test]
    fn start_time_rejects_unoffered_slot() {
        assert_eq!(
            "4:00 PM".parse::<StartTime>(),
            Err(ScheduleError::UnofferedStartTime("4:00 PM".to_string()))
        );
    }

    #[test]
    fn duration_labels_round_trip() {
        for duration in CharterDuration::ALL {
            assert_eq!(duration.label().parse::<CharterDuration>(), Ok(duration));
        }
    }

    #[test]
    fn duration_rejects_unoffered_length() {
        assert_eq!(
            "5 hours".parse::<CharterDuration>(),
            Err(ScheduleError::UnofferedDuration("5 hours".to_string()))
        );
    }

    #[test]
    fn noon_is_twelve_on_the_clock() {
        assert_eq!(StartTime::Noon.clock(), ClockTime::new(12, 0));
        assert_eq!(StartTime::OnePm.clock(), ClockTime::new(13, 0));
    }
}
