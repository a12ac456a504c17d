use gpui::prelude::FluentBuilder;
use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, SharedString,
    StatefulInteractiveElement, Styled, div, rgb,
};
use gpui_component::{h_flex, v_flex};

use charter_core::calculations::OrderSummary;
use charter_core::{BookingSession, PaymentMethod, SessionUpdate, WizardStep};

use super::step_frame;
use crate::components::{
    ACCENT, BookingWindow, money, muted, note, panel, section_title, summary_row,
};

const REDIRECT_NOTICE: &str =
    "After clicking \"Next\", you'll be redirected to complete your payment securely.";
const CARD_BORDER: u32 = 0xe5e7eb;
const BADGE_TEXT: u32 = 0xffffff;

pub fn render(
    session: &BookingSession,
    cx: &Context<BookingWindow>,
) -> impl IntoElement {
    let methods = PaymentMethod::ALL
        .into_iter()
        .map(|method| method_card(method, session.payment_method == Some(method), cx));

    step_frame(
        WizardStep::Payment,
        v_flex()
            .gap_6()
            .child(order_summary(&OrderSummary::for_session(session)))
            .child(
                v_flex()
                    .gap_3()
                    .child(section_title("Choose Payment Method"))
                    .children(methods),
            )
            .children(session.payment_method.map(|_| note(REDIRECT_NOTICE))),
    )
}

/// Boat and extras lines followed by the grand total.
pub fn order_summary(summary: &OrderSummary) -> impl IntoElement {
    let lines = summary
        .lines()
        .map(|line| summary_row(line.label.clone(), div().text_sm().child(money(line.amount))));

    panel("Order Summary").children(lines).child(
        div().border_t_1().pt_2().font_weight(FontWeight::SEMIBOLD).child(summary_row(
            "Total",
            div().child(money(summary.total)),
        )),
    )
}

fn method_card(
    method: PaymentMethod,
    selected: bool,
    cx: &Context<BookingWindow>,
) -> impl IntoElement {
    h_flex()
        .id(SharedString::from(format!("payment-{}", method.id())))
        .gap_3()
        .p_4()
        .rounded_md()
        .border_2()
        .border_color(rgb(if selected { ACCENT } else { CARD_BORDER }))
        .cursor_pointer()
        .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
            this.apply(SessionUpdate::new().payment_method(Some(method)), cx)
        }))
        .child(
            v_flex()
                .flex_1()
                .gap_1()
                .child(
                    h_flex()
                        .gap_2()
                        .child(section_title(method.name()))
                        .when(method.is_popular(), |row| {
                            row.child(
                                div()
                                    .px_2()
                                    .rounded_md()
                                    .bg(rgb(ACCENT))
                                    .text_xs()
                                    .text_color(rgb(BADGE_TEXT))
                                    .child("Most Popular"),
                            )
                        }),
                )
                .child(muted(method.description())),
        )
        .when(selected, |card| {
            card.child(div().text_color(rgb(ACCENT)).child("●"))
        })
}
