//! Derived values computed from a booking session.
//!
//! - `pricing` - extras subtotal, grand total and the itemised order summary
//! - `schedule` - start/end clock arithmetic for the charter window
//! - `common` - money rounding and formatting

pub mod common;
pub mod pricing;
pub mod schedule;

pub use pricing::{OrderLine, OrderSummary, extra_price_label, extras_total, grand_total};
pub use schedule::{ClockTime, ScheduleError, charter_end, end_time};
