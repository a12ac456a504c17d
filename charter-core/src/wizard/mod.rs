//! The seven-step booking flow.
//!
//! - `step` - the ordered steps and progress indicator
//! - `gate` - per-step rules for enabling the forward control
//! - `store` - the single owner of the booking session
//! - `controller` - navigation, open/close and step defaults

mod controller;
mod gate;
mod step;
mod store;

pub use controller::{BookingWizard, Transition};
pub use gate::{TERMS_REMINDER, blocking_reason, can_proceed};
pub use step::{Progress, WizardStep};
pub use store::BookingStore;
