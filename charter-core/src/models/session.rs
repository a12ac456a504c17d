use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    CharterDuration, ContactInfo, ExtraSelections, GuestCount, PaymentMethod, StartTime, Yacht,
    YachtId,
};

/// Every selection made during one open booking wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSession {
    pub selected_date: Option<NaiveDate>,
    pub selected_time: StartTime,
    pub duration: CharterDuration,
    pub guest_count: GuestCount,
    pub selected_boat: Option<YachtId>,
    pub extras: ExtraSelections,
    pub contact_info: ContactInfo,
    pub payment_method: Option<PaymentMethod>,
}

impl BookingSession {
    /// Catalog record of the chosen yacht.
    pub fn boat(&self) -> Option<&'static Yacht> {
        self.selected_boat.map(|id| id.yacht())
    }

    /// Merges `update` into this session, replacing only the provided fields.
    ///
    /// Nested values (`extras`, `contact_info`) are replaced whole.
    pub fn apply(
        &mut self,
        update: SessionUpdate,
    ) {
        let SessionUpdate {
            selected_date,
            selected_time,
            duration,
            guest_count,
            selected_boat,
            extras,
            contact_info,
            payment_method,
        } = update;

        if let Some(value) = selected_date {
            self.selected_date = value;
        }
        if let Some(value) = selected_time {
            self.selected_time = value;
        }
        if let Some(value) = duration {
            self.duration = value;
        }
        if let Some(value) = guest_count {
            self.guest_count = value;
        }
        if let Some(value) = selected_boat {
            self.selected_boat = value;
        }
        if let Some(value) = extras {
            self.extras = value;
        }
        if let Some(value) = contact_info {
            self.contact_info = value;
        }
        if let Some(value) = payment_method {
            self.payment_method = value;
        }
    }
}

/// A partial [`BookingSession`]: each `Some` slot replaces the matching
/// field, each `None` slot leaves it alone.
///
/// Nullable fields use a nested option so a caller can clear them, e.g.
/// `SessionUpdate::new().selected_boat(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub selected_date: Option<Option<NaiveDate>>,
    pub selected_time: Option<StartTime>,
    pub duration: Option<CharterDuration>,
    pub guest_count: Option<GuestCount>,
    pub selected_boat: Option<Option<YachtId>>,
    pub extras: Option<ExtraSelections>,
    pub contact_info: Option<ContactInfo>,
    pub payment_method: Option<Option<PaymentMethod>>,
}

impl SessionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_date(
        mut self,
        date: Option<NaiveDate>,
    ) -> Self {
        self.selected_date = Some(date);
        self
    }

    pub fn selected_time(
        mut self,
        time: StartTime,
    ) -> Self {
        self.selected_time = Some(time);
        self
    }

    pub fn duration(
        mut self,
        duration: CharterDuration,
    ) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn guest_count(
        mut self,
        guest_count: GuestCount,
    ) -> Self {
        self.guest_count = Some(guest_count);
        self
    }

    pub fn selected_boat(
        mut self,
        boat: Option<YachtId>,
    ) -> Self {
        self.selected_boat = Some(boat);
        self
    }

    pub fn extras(
        mut self,
        extras: ExtraSelections,
    ) -> Self {
        self.extras = Some(extras);
        self
    }

    pub fn contact_info(
        mut self,
        contact_info: ContactInfo,
    ) -> Self {
        self.contact_info = Some(contact_info);
        self
    }

    pub fn payment_method(
        mut self,
        method: Option<PaymentMethod>,
    ) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// True when the update carries no fields.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
