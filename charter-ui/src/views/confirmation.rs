use gpui::{FontWeight, IntoElement, ParentElement, Styled, div, rgb};
use gpui_component::v_flex;

use charter_core::calculations::{OrderSummary, charter_end};
use charter_core::{BookingSession, WizardStep, format_long_date};

use super::step_frame;
use crate::components::{ACCENT, callout, money, muted, panel, summary_row};

/// Placeholder reference shown on every confirmation.
pub const BOOKING_REFERENCE: &str = "REF-123456";

const SUCCESS_TEXT: u32 = 0x16a34a;

pub fn render(session: &BookingSession) -> impl IntoElement {
    let summary = OrderSummary::for_session(session);
    let end = charter_end(session.selected_time, session.duration);
    let yacht = session.boat().map(|yacht| yacht.name).unwrap_or_default();

    let mut details = panel("Booking Summary")
        .child(summary_row("Date", muted(format_long_date(session.selected_date))))
        .child(summary_row(
            "Time",
            muted(format!("{} - {end}", session.selected_time)),
        ))
        .child(summary_row("Yacht", muted(yacht)))
        .child(summary_row("Guests", muted(session.guest_count.to_string())));

    if !summary.extras.is_empty() {
        details = details.child(
            v_flex()
                .gap_1()
                .border_t_1()
                .pt_2()
                .child(div().child("Extras"))
                .children(
                    summary
                        .extras
                        .iter()
                        .map(|line| muted(format!("• {}", line.label))),
                ),
        );
    }

    if let Some(method) = session.payment_method {
        details = details.child(
            div()
                .border_t_1()
                .pt_2()
                .child(summary_row("Payment Method", muted(method.name()))),
        );
    }

    details = details
        .child(
            div()
                .border_t_1()
                .pt_2()
                .font_weight(FontWeight::SEMIBOLD)
                .child(summary_row(
                    "Total Price",
                    div().text_color(rgb(ACCENT)).child(money(summary.total)),
                )),
        )
        .child(
            callout()
                .child(div().font_weight(FontWeight::MEDIUM).child("Booking Reference"))
                .child(BOOKING_REFERENCE),
        );

    step_frame(
        WizardStep::Confirmation,
        v_flex()
            .gap_6()
            .child(
                div()
                    .text_color(rgb(SUCCESS_TEXT))
                    .child("Your booking is confirmed and payment has been processed"),
            )
            .child(details)
            .child(
                v_flex()
                    .items_center()
                    .child(muted(format!(
                        "A confirmation email has been sent to {}",
                        session.contact_info.email
                    )))
                    .child(muted("Please save your booking reference for your records.")),
            ),
    )
}
