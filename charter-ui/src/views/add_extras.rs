use gpui::{ClickEvent, Context, IntoElement, ParentElement, SharedString, Styled, div, px};
use gpui_component::{h_flex, v_flex};

use charter_core::calculations::{extra_price_label, extras_total};
use charter_core::{BookingSession, Extra, SessionUpdate, WizardStep, extras};

use super::step_frame;
use crate::components::{
    BookingWindow, callout, money, muted, option_button, section_title, summary_row,
};

pub fn render(
    session: &BookingSession,
    cx: &Context<BookingWindow>,
) -> impl IntoElement {
    let rows = extras().iter().map(|extra| extra_row(extra, session, cx));
    let subtotal = extras_total(&session.extras);

    step_frame(
        WizardStep::AddExtras,
        v_flex()
            .gap_4()
            .children(rows)
            .children(
                session
                    .extras
                    .any_selected()
                    .then(|| callout().child(summary_row("Extras Total:", div().child(money(subtotal))))),
            ),
    )
}

fn extra_row(
    extra: &'static Extra,
    session: &BookingSession,
    cx: &Context<BookingWindow>,
) -> impl IntoElement {
    let id = extra.id;
    let selected = session.extras.is_selected(id);

    h_flex()
        .justify_between()
        .items_center()
        .gap_4()
        .p_4()
        .rounded_md()
        .border_1()
        .child(
            v_flex()
                .flex_1()
                .gap_1()
                .child(
                    h_flex()
                        .justify_between()
                        .child(section_title(extra.name))
                        .child(div().child(extra_price_label(extra))),
                )
                .child(muted(extra.description)),
        )
        .child(
            option_button(
                SharedString::from(format!("extra-{}", id.index())),
                if selected { "On" } else { "Off" },
                selected,
                cx.listener(move |this, _: &ClickEvent, _window, cx| {
                    // Nested values are replaced whole, so read-merge-write.
                    let extras = this.wizard().session().extras.toggled(id);
                    this.apply(SessionUpdate::new().extras(extras), cx)
                }),
            )
            .w(px(64.)),
        )
}
