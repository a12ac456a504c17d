use gpui::prelude::FluentBuilder;
use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ObjectFit, ParentElement,
    SharedString, StatefulInteractiveElement, Styled, StyledImage, div, img, px, rgb,
};
use gpui_component::{h_flex, v_flex};

use charter_core::{BookingSession, SessionUpdate, WizardStep, Yacht, yachts};

use super::step_frame;
use crate::components::{ACCENT, BookingWindow, money, muted};

const CARD_BORDER: u32 = 0xe5e7eb;
const COVER_HEIGHT: f32 = 160.;

pub fn render(
    session: &BookingSession,
    cx: &Context<BookingWindow>,
) -> impl IntoElement {
    let cards = yachts()
        .iter()
        .map(|yacht| yacht_card(yacht, session, cx));

    step_frame(WizardStep::SelectBoat, v_flex().gap_4().children(cards))
}

fn yacht_card(
    yacht: &'static Yacht,
    session: &BookingSession,
    cx: &Context<BookingWindow>,
) -> impl IntoElement {
    let selected = session.selected_boat == Some(yacht.id);
    let id = yacht.id;
    let price = format!("{}/{}", money(yacht.price), session.duration);

    v_flex()
        .id(SharedString::from(format!("yacht-{}", yacht.id.as_str())))
        .gap_1()
        .p_4()
        .rounded_md()
        .border_2()
        .border_color(rgb(if selected { ACCENT } else { CARD_BORDER }))
        .cursor_pointer()
        .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
            this.apply(SessionUpdate::new().selected_boat(Some(id)), cx)
        }))
        .child(
            img(yacht.cover_image())
                .w_full()
                .h(px(COVER_HEIGHT))
                .rounded_md()
                .object_fit(ObjectFit::Cover)
                .with_fallback(|| muted("Photo unavailable").into_any_element()),
        )
        .child(
            h_flex()
                .justify_between()
                .child(div().text_lg().font_weight(FontWeight::SEMIBOLD).child(yacht.name))
                .child(
                    div()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(rgb(ACCENT))
                        .child(price),
                ),
        )
        .child(muted(yacht.size))
        .child(div().text_sm().child(yacht.description))
        .when(selected, |card| {
            card.child(div().text_sm().text_color(rgb(ACCENT)).child("● Selected"))
        })
}
