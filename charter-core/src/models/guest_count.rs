//! Party size chosen on the Guest Count step.
//!
//! The booking form offers 1 through 13 guests plus a "13+" choice that turns
//! the booking into an inquiry. The raw form of the value (0 unset, 1–13,
//! 14 for the inquiry) is still available for callers that need a number.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest party that can be booked directly.
pub const MAX_PARTY_SIZE: u8 = 13;

/// Raw value standing for "13 or more, inquiry required".
pub const INQUIRY_RAW: u8 = MAX_PARTY_SIZE + 1;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("party size {0} is outside 1..=13")]
pub struct GuestCountError(pub u8);

/// A bookable party size, always within `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PartySize(u8);

impl PartySize {
    pub fn new(guests: u8) -> Result<Self, GuestCountError> {
        if (1..=MAX_PARTY_SIZE).contains(&guests) {
            Ok(Self(guests))
        } else {
            Err(GuestCountError(guests))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PartySize {
    type Error = GuestCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartySize> for u8 {
    fn from(value: PartySize) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GuestCount {
    #[default]
    Unset,
    Party(PartySize),
    /// More than 13 guests; the charter team follows up.
    Inquiry,
}

impl GuestCount {
    /// Every choice the guest selector offers, in display order.
    pub fn choices() -> impl Iterator<Item = GuestCount> {
        (1..=MAX_PARTY_SIZE)
            .filter_map(|n| PartySize::new(n).ok())
            .map(GuestCount::Party)
            .chain(std::iter::once(GuestCount::Inquiry))
    }

    /// Maps the raw numeric form onto the enumeration. Values past the
    /// inquiry sentinel saturate to [`GuestCount::Inquiry`].
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Unset,
            n if n <= MAX_PARTY_SIZE => PartySize::new(n).map_or(Self::Unset, Self::Party),
            _ => Self::Inquiry,
        }
    }

    pub fn raw(&self) -> u8 {
        match self {
            Self::Unset => 0,
            Self::Party(size) => size.get(),
            Self::Inquiry => INQUIRY_RAW,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Value shown in the selector: empty, the number, or `13+`.
    pub fn select_value(&self) -> String {
        match self {
            Self::Unset => String::new(),
            Self::Party(size) => size.get().to_string(),
            Self::Inquiry => "13+".to_string(),
        }
    }

    /// Option label in the selector list.
    pub fn option_label(&self) -> String {
        match self {
            Self::Inquiry => "13+ Inquire".to_string(),
            other => other.to_string(),
        }
    }

    /// Long description used on the Guest Count step.
    pub fn description(&self) -> String {
        match self {
            Self::Inquiry => "13+ guests (inquiry required)".to_string(),
            other => other.to_string(),
        }
    }

    /// Acknowledgement shown under the selector once a count is chosen.
    pub fn confirmation_note(&self) -> Option<String> {
        match self {
            Self::Unset => None,
            Self::Party(_) => Some(format!("Perfect! We'll prepare the yacht for {self}.")),
            Self::Inquiry => Some(
                "Perfect! For 13+ guests, we'll need to discuss special arrangements. \
                 Our team will contact you to ensure the best experience."
                    .to_string(),
            ),
        }
    }
}

impl fmt::Display for GuestCount {
    /// `1 guest`, `5 guests`, `13+ guests`, or nothing when unset.
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Party(size) if size.get() == 1 => f.write_str("1 guest"),
            Self::Party(size) => write!(f, "{} guests", size.get()),
            Self::Inquiry => f.write_str("13+ guests"),
        }
    }
}
