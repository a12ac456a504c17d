use gpui::{
    AppContext, ClickEvent, Context, Entity, IntoElement, ParentElement, Styled, Subscription,
    Window, div, px, rgb,
};
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::{h_flex, v_flex};
use tracing::debug;

use charter_core::{BookingSession, ContactField, SessionUpdate, WizardStep};

use super::step_frame;
use crate::components::{BookingWindow, option_button, section_title};

const REMINDER_TEXT: u32 = 0xdc2626;

/// Text inputs for the contact step.
///
/// Input state lives for the whole window; every edit is copied into the
/// session so the step gate sees it immediately.
pub struct ContactForm {
    inputs: Vec<(ContactField, Entity<InputState>)>,
}

impl ContactForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<BookingWindow>,
    ) -> (Self, Vec<Subscription>) {
        let mut inputs = Vec::with_capacity(ContactField::ALL.len());
        let mut subscriptions = Vec::with_capacity(ContactField::ALL.len());

        for field in ContactField::ALL {
            let state = cx.new(|cx| InputState::new(window, cx).placeholder(field.placeholder()));
            subscriptions.push(cx.subscribe_in(
                &state,
                window,
                move |this: &mut BookingWindow,
                      state: &Entity<InputState>,
                      _: &InputEvent,
                      _window,
                      cx| {
                    let value = state.read(cx).value().to_string();
                    let contact = &this.wizard().session().contact_info;
                    if contact.field(field) == value {
                        return;
                    }
                    debug!(field = field.label(), "contact field edited");
                    let contact = contact.with_field(field, value);
                    this.apply(SessionUpdate::new().contact_info(contact), cx);
                },
            ));
            inputs.push((field, state));
        }

        (Self { inputs }, subscriptions)
    }

    /// Empties every input, used when the wizard is closed.
    pub fn clear(
        &self,
        window: &mut Window,
        cx: &mut Context<BookingWindow>,
    ) {
        for (_, state) in &self.inputs {
            state.update(cx, |state, cx| state.set_value("", window, cx));
        }
    }
}

pub fn render(
    form: &ContactForm,
    session: &BookingSession,
    reminder: Option<&'static str>,
    cx: &Context<BookingWindow>,
) -> impl IntoElement {
    let agreed = session.contact_info.agreed_to_terms;

    let fields = form.inputs.iter().map(|(field, state)| {
        v_flex()
            .gap_1()
            .child(section_title(field.label()))
            .child(Input::new(state))
    });

    let terms = h_flex()
        .gap_3()
        .items_center()
        .child(
            option_button(
                "agree-terms",
                if agreed { "✓" } else { " " },
                agreed,
                cx.listener(move |this, _: &ClickEvent, _window, cx| {
                    let contact = this.wizard().session().contact_info.with_terms(!agreed);
                    this.apply(SessionUpdate::new().contact_info(contact), cx)
                }),
            )
            .w(px(32.)),
        )
        .child(
            div()
                .text_sm()
                .child("I agree to the Terms & Conditions and Cancellation Policy"),
        );

    step_frame(
        WizardStep::ContactInfo,
        v_flex()
            .gap_4()
            .children(fields)
            .child(terms)
            .children(
                reminder.map(|text| div().text_sm().text_color(rgb(REMINDER_TEXT)).child(text)),
            ),
    )
}
