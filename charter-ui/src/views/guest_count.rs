use gpui::prelude::FluentBuilder;
use gpui::{
    ClickEvent, Context, FontWeight, IntoElement, ParentElement, SharedString, Styled, div, px,
};
use gpui_component::{h_flex, v_flex};

use charter_core::{BookingSession, GuestCount, SessionUpdate, WizardStep};

use super::step_frame;
use crate::components::{BookingWindow, muted, note, option_button, section_title, summary_row};

pub fn render(
    session: &BookingSession,
    cx: &Context<BookingWindow>,
) -> impl IntoElement {
    let current = session.guest_count;

    let choices = GuestCount::choices().map(|choice| {
        option_button(
            SharedString::from(format!("guests-{}", choice.raw())),
            choice.option_label(),
            current == choice,
            cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.apply(SessionUpdate::new().guest_count(choice), cx)
            }),
        )
        .w(px(100.))
    });

    let value = current.select_value();
    let trigger = summary_row(
        "Selected",
        div().font_weight(FontWeight::SEMIBOLD).child(if value.is_empty() {
            "Select number of guests".to_string()
        } else {
            value
        }),
    );

    step_frame(
        WizardStep::GuestCount,
        v_flex()
            .gap_3()
            .child(section_title("Number of Guests"))
            .child(trigger)
            .when(current.is_set(), |column| column.child(muted(current.description())))
            .child(h_flex().flex_wrap().gap_2().children(choices))
            .children(current.confirmation_note().map(note)),
    )
}
