//! End-to-end walks through the booking wizard using only the public API.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use charter_core::calculations::common::format_currency;
use charter_core::calculations::{OrderSummary, charter_end, grand_total};
use charter_core::{
    BookingWizard, CalendarMonth, CharterDuration, ContactField, ContactInfo, ExtraId, GuestCount,
    PaymentMethod, SessionUpdate, StartTime, TERMS_REMINDER, Transition, WizardStep, YachtId,
    format_long_date,
};

fn july() -> CalendarMonth {
    CalendarMonth::new(2024, 7).unwrap()
}

#[test]
fn full_booking_reaches_confirmation_with_expected_total() {
    let mut wizard = BookingWizard::new();
    wizard.open();

    // Date & Time
    wizard.apply_step_defaults(&july(), 5);
    wizard.update(
        SessionUpdate::new()
            .selected_time(StartTime::OnePm)
            .duration(CharterDuration::ThreeHours),
    );
    assert_eq!(wizard.next(), Transition::Moved(WizardStep::GuestCount));

    // Guest Count
    assert_eq!(wizard.next(), Transition::Blocked(WizardStep::GuestCount));
    wizard.update(SessionUpdate::new().guest_count(GuestCount::from_raw(6)));
    assert_eq!(wizard.next(), Transition::Moved(WizardStep::SelectBoat));

    // Select Boat
    wizard.apply_step_defaults(&july(), 5);
    assert_eq!(wizard.session().selected_boat, Some(YachtId::Serenity));
    wizard.update(SessionUpdate::new().selected_boat(Some(YachtId::WaveDancer)));
    assert_eq!(wizard.next(), Transition::Moved(WizardStep::AddExtras));

    // Add Extras
    let extras = wizard.session().extras.toggled(ExtraId::ChampagneService);
    wizard.update(SessionUpdate::new().extras(extras));
    let extras = wizard.session().extras.toggled(ExtraId::PrivateChef);
    wizard.update(SessionUpdate::new().extras(extras));
    assert_eq!(wizard.next(), Transition::Moved(WizardStep::ContactInfo));

    // Contact Info
    let contact = ContactInfo::default()
        .with_field(ContactField::FullName, "Jordan Lee")
        .with_field(ContactField::Phone, "555-0199")
        .with_field(ContactField::Email, "jordan@example.com");
    wizard.update(SessionUpdate::new().contact_info(contact.clone()));
    assert_eq!(wizard.blocking_reason(), Some(TERMS_REMINDER));
    assert_eq!(wizard.next(), Transition::Blocked(WizardStep::ContactInfo));
    wizard.update(SessionUpdate::new().contact_info(contact.with_terms(true)));
    assert_eq!(wizard.blocking_reason(), None);
    assert_eq!(wizard.next(), Transition::Moved(WizardStep::Payment));

    // Payment
    wizard.update(SessionUpdate::new().payment_method(Some(PaymentMethod::Zelle)));
    assert_eq!(wizard.next(), Transition::Moved(WizardStep::Confirmation));

    let session = wizard.session();
    assert_eq!(grand_total(session), dec!(1600));
    assert_eq!(format_currency(grand_total(session)), "$1,600");
    assert_eq!(
        format_long_date(session.selected_date),
        "Friday, July 5, 2024"
    );
    assert_eq!(
        charter_end(session.selected_time, session.duration).to_string(),
        "4:00 PM"
    );

    let summary = OrderSummary::for_session(session);
    let labels: Vec<_> = summary.lines().map(|line| line.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Wave Dancer (3 hours)", "Champagne Service", "Private Chef"]
    );
    assert!(!wizard.shows_forward_control());
    assert_eq!(wizard.progress().label(), "Step 7 of 7");
}

#[test]
fn closing_mid_flow_discards_everything() {
    let mut wizard = BookingWizard::new();
    wizard.open();
    wizard.update(
        SessionUpdate::new()
            .selected_date(NaiveDate::from_ymd_opt(2024, 7, 20))
            .guest_count(GuestCount::Inquiry),
    );
    assert!(wizard.next().moved());
    assert!(wizard.next().moved());

    wizard.close();
    wizard.close();
    wizard.open();

    assert_eq!(wizard.step(), WizardStep::DateTime);
    assert_eq!(wizard.session().selected_date, None);
    assert_eq!(wizard.session().guest_count, GuestCount::Unset);
    assert_eq!(wizard.session().selected_time, StartTime::TenAm);
    assert_eq!(wizard.session().duration, CharterDuration::FourHours);
}

#[test]
fn back_then_forward_keeps_choices() {
    let mut wizard = BookingWizard::new();
    wizard.open();
    wizard.update(
        SessionUpdate::new()
            .selected_date(NaiveDate::from_ymd_opt(2024, 7, 9))
            .guest_count(GuestCount::from_raw(2)),
    );
    assert!(wizard.next().moved());
    assert!(wizard.next().moved());

    assert_eq!(wizard.prev(), Transition::Moved(WizardStep::GuestCount));
    assert_eq!(wizard.prev(), Transition::Moved(WizardStep::DateTime));
    assert_eq!(wizard.prev(), Transition::AtBoundary(WizardStep::DateTime));
    assert_eq!(wizard.next(), Transition::Moved(WizardStep::GuestCount));
    assert_eq!(wizard.next(), Transition::Moved(WizardStep::SelectBoat));

    assert_eq!(wizard.session().guest_count.to_string(), "2 guests");
}

#[test]
fn boat_only_booking_totals_yacht_price() {
    let mut wizard = BookingWizard::new();
    wizard.update(SessionUpdate::new().selected_boat(Some(YachtId::Serenity)));

    let summary = OrderSummary::for_session(wizard.session());

    assert_eq!(summary.extras_total, dec!(0));
    assert_eq!(summary.total, dec!(500));
    assert_eq!(format_currency(summary.total), "$500");
}
