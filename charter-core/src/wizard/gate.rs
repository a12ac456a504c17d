//! Forward-navigation gates.
//!
//! | Step | Forward allowed when |
//! |------|----------------------|
//! | Date & Time | a date is chosen (time and length always hold a value) |
//! | Guest Count | a guest count is chosen |
//! | Select Boat | a yacht is chosen |
//! | Add Extras | always |
//! | Contact Info | name, phone and email are filled in and the terms accepted |
//! | Payment | a payment method is chosen |
//! | Confirmation | always |
//!
//! Gates only decide whether the forward control is enabled. Going back and
//! editing the session are never gated.

use crate::models::BookingSession;
use crate::wizard::WizardStep;

/// Reminder shown under the contact form while the terms are unchecked.
pub const TERMS_REMINDER: &str = "Please agree to the terms and conditions to continue.";

pub fn can_proceed(
    step: WizardStep,
    session: &BookingSession,
) -> bool {
    match step {
        WizardStep::DateTime => {
            session.selected_date.is_some()
                && !session.selected_time.label().is_empty()
                && !session.duration.label().is_empty()
        }
        WizardStep::GuestCount => session.guest_count.raw() > 0,
        WizardStep::SelectBoat => session.selected_boat.is_some(),
        WizardStep::AddExtras => true,
        WizardStep::ContactInfo => session.contact_info.is_complete(),
        WizardStep::Payment => session.payment_method.is_some(),
        WizardStep::Confirmation => true,
    }
}

/// Inline message a step shows while its gate is closed.
///
/// Only the contact step carries a reminder, and only for the terms
/// checkbox; other steps just disable the forward control.
pub fn blocking_reason(
    step: WizardStep,
    session: &BookingSession,
) -> Option<&'static str> {
    match step {
        WizardStep::ContactInfo if !session.contact_info.agreed_to_terms => Some(TERMS_REMINDER),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{ContactInfo, GuestCount, PaymentMethod, SessionUpdate, YachtId};

    fn with(update: SessionUpdate) -> BookingSession {
        let mut session = BookingSession::default();
        session.apply(update);
        session
    }

    fn complete_contact() -> ContactInfo {
        ContactInfo {
            full_name: "Grace Hopper".to_string(),
            phone: "555-0123".to_string(),
            email: "grace@example.com".to_string(),
            agreed_to_terms: true,
        }
    }

    // =========================================================================
    // Date & Time
    // =========================================================================

    #[test]
    fn date_step_blocked_without_date() {
        assert!(!can_proceed(WizardStep::DateTime, &BookingSession::default()));
    }

    #[test]
    fn date_step_blocked_without_date_even_when_rest_is_filled() {
        let session = with(
            SessionUpdate::new()
                .guest_count(GuestCount::from_raw(4))
                .selected_boat(Some(YachtId::Serenity))
                .contact_info(complete_contact())
                .payment_method(Some(PaymentMethod::Card)),
        );

        assert!(!can_proceed(WizardStep::DateTime, &session));
    }

    #[test]
    fn date_step_open_with_date() {
        let session = with(SessionUpdate::new().selected_date(NaiveDate::from_ymd_opt(2024, 7, 5)));

        assert!(can_proceed(WizardStep::DateTime, &session));
    }

    // =========================================================================
    // Guest Count
    // =========================================================================

    #[test]
    fn guest_step_requires_positive_count() {
        assert!(!can_proceed(WizardStep::GuestCount, &BookingSession::default()));

        for raw in 1..=14 {
            let session = with(SessionUpdate::new().guest_count(GuestCount::from_raw(raw)));
            assert!(can_proceed(WizardStep::GuestCount, &session), "raw {raw}");
        }
    }

    // =========================================================================
    // Select Boat
    // =========================================================================

    #[test]
    fn boat_step_requires_boat() {
        assert!(!can_proceed(WizardStep::SelectBoat, &BookingSession::default()));

        let session = with(SessionUpdate::new().selected_boat(Some(YachtId::AzureSpirit)));
        assert!(can_proceed(WizardStep::SelectBoat, &session));
    }

    // =========================================================================
    // Optional and terminal steps
    // =========================================================================

    #[test]
    fn extras_and_confirmation_always_open() {
        let session = BookingSession::default();

        assert!(can_proceed(WizardStep::AddExtras, &session));
        assert!(can_proceed(WizardStep::Confirmation, &session));
    }

    // =========================================================================
    // Contact Info
    // =========================================================================

    #[test]
    fn contact_step_flips_when_terms_accepted() {
        let unchecked = with(SessionUpdate::new().contact_info(complete_contact().with_terms(false)));
        let checked = with(SessionUpdate::new().contact_info(complete_contact()));

        assert!(!can_proceed(WizardStep::ContactInfo, &unchecked));
        assert!(can_proceed(WizardStep::ContactInfo, &checked));
    }

    #[test]
    fn contact_step_requires_every_text_field() {
        let session = with(SessionUpdate::new().contact_info(ContactInfo {
            email: String::new(),
            ..complete_contact()
        }));

        assert!(!can_proceed(WizardStep::ContactInfo, &session));
    }

    #[test]
    fn contact_reminder_shown_until_terms_accepted() {
        let unchecked = with(SessionUpdate::new().contact_info(complete_contact().with_terms(false)));
        let checked = with(SessionUpdate::new().contact_info(complete_contact()));

        assert_eq!(
            blocking_reason(WizardStep::ContactInfo, &unchecked),
            Some(TERMS_REMINDER)
        );
        assert_eq!(blocking_reason(WizardStep::ContactInfo, &checked), None);
    }

    #[test]
    fn other_steps_have_no_reminder() {
        let session = BookingSession::default();

        assert_eq!(blocking_reason(WizardStep::Payment, &session), None);
        assert_eq!(blocking_reason(WizardStep::DateTime, &session), None);
    }

    // =========================================================================
    // Payment
    // =========================================================================

    #[test]
    fn payment_step_requires_method() {
        assert!(!can_proceed(WizardStep::Payment, &BookingSession::default()));

        let session = with(SessionUpdate::new().payment_method(Some(PaymentMethod::Zelle)));
        assert!(can_proceed(WizardStep::Payment, &session));
    }
}
