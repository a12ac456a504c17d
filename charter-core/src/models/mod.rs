mod calendar;
mod catalog;
mod charter_slot;
mod contact_info;
mod extra_selections;
mod guest_count;
mod session;

pub use calendar::{CalendarError, CalendarMonth, WEEKDAY_HEADERS, format_long_date};
pub use catalog::{
    CatalogError, Extra, ExtraId, PaymentMethod, Yacht, YachtId, extras, yachts,
};
pub use charter_slot::{CharterDuration, StartTime};
pub use contact_info::{ContactField, ContactInfo};
pub use extra_selections::ExtraSelections;
pub use guest_count::{GuestCount, GuestCountError, INQUIRY_RAW, MAX_PARTY_SIZE, PartySize};
pub use session::{BookingSession, SessionUpdate};
