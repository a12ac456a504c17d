use gpui::{
    AnyElement, App, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Subscription, Window, div, px, relative, rgb,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{Disableable, h_flex, v_flex};
use tracing::{debug, info};

use charter_core::{BookingWizard, CalendarMonth, SessionUpdate, Transition, WizardStep};

#[cfg(not(target_os = "linux"))]
use crate::{Quit, quit};
use crate::{
    components::{ACCENT, MUTED_TEXT, make_button, muted},
    config::{AppConfig, CalendarConfig},
    views::{self, ContactForm},
};

const PROGRESS_TRACK: u32 = 0xe5e7eb;

/// Root view: the landing screen and, once opened, the booking wizard.
///
/// Owns the one [`BookingWizard`]; step views get it by reference and write
/// back through [`BookingWindow::apply`].
pub struct BookingWindow {
    wizard: BookingWizard,
    calendar: CalendarConfig,
    visible_month: CalendarMonth,
    contact: ContactForm,
    _subscriptions: Vec<Subscription>,
}

impl BookingWindow {
    pub fn new(
        config: &AppConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let (contact, mut subscriptions) = ContactForm::new(window, cx);

        subscriptions.push(cx.on_window_closed(|_cx: &mut App| {
            info!("booking window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        }));

        debug!(month = %config.calendar.initial_month, "booking window constructed");
        Self {
            wizard: BookingWizard::new(),
            calendar: config.calendar.clone(),
            visible_month: config.calendar.initial_month,
            contact,
            _subscriptions: subscriptions,
        }
    }

    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    /// Writes a partial session and re-renders. Empty updates are dropped.
    pub fn apply(
        &mut self,
        update: SessionUpdate,
        cx: &mut Context<Self>,
    ) {
        if update.is_empty() {
            return;
        }
        self.wizard.update(update);
        debug!(revision = self.wizard.store().revision(), "session changed");
        cx.notify();
    }

    /// Pages the date picker one month back or forward.
    pub fn shift_month(
        &mut self,
        forward: bool,
        cx: &mut Context<Self>,
    ) {
        self.visible_month = if forward {
            self.visible_month.next()
        } else {
            self.visible_month.previous()
        };
        debug!(month = %self.visible_month, "calendar paged");
        cx.notify();
    }

    fn open_wizard(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        self.wizard.open();
        self.enter_step();
        cx.notify();
    }

    fn close_wizard(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.wizard.close();
        self.visible_month = self.calendar.initial_month;
        self.contact.clear(window, cx);
        cx.notify();
    }

    fn go_next(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        if let Transition::Moved(_) = self.wizard.next() {
            self.enter_step();
        }
        cx.notify();
    }

    fn go_back(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        if self.wizard.prev().moved() {
            self.enter_step();
        }
        cx.notify();
    }

    fn enter_step(&mut self) {
        self.wizard
            .apply_step_defaults(&self.visible_month, self.calendar.default_day);
    }

    fn render_landing(
        &self,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .size_full()
            .gap_4()
            .items_center()
            .justify_center()
            .child(div().text_3xl().child("Luxury Yacht Charters"))
            .child(muted("Experience the ultimate maritime adventure"))
            .child(make_button(
                "book-now",
                "Book Now",
                cx.listener(|this, _: &ClickEvent, _window, cx| this.open_wizard(cx)),
            ))
    }

    fn render_header(
        &self,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        h_flex()
            .justify_between()
            .items_center()
            .p_4()
            .border_b_1()
            .child(
                Button::new("header-back")
                    .ghost()
                    .label("‹")
                    .disabled(self.wizard.step() == WizardStep::FIRST)
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.go_back(cx))),
            )
            .child(div().child("Book Your Charter"))
            .child(
                Button::new("close-wizard")
                    .ghost()
                    .label("✕")
                    .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                        this.close_wizard(window, cx)
                    })),
            )
    }

    fn render_progress(&self) -> impl IntoElement {
        let progress = self.wizard.progress();

        v_flex()
            .gap_2()
            .px_4()
            .py_3()
            .border_b_1()
            .child(
                h_flex()
                    .justify_between()
                    .child(muted(progress.label()))
                    .child(div().text_sm().child(self.wizard.step().title())),
            )
            .child(
                div()
                    .w_full()
                    .h(px(8.))
                    .rounded_full()
                    .bg(rgb(PROGRESS_TRACK))
                    .child(
                        div()
                            .h_full()
                            .w(relative(progress.fraction()))
                            .rounded_full()
                            .bg(rgb(ACCENT)),
                    ),
            )
    }

    fn render_step(
        &self,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let session = self.wizard.session();

        match self.wizard.step() {
            WizardStep::DateTime => {
                views::date_time::render(session, self.visible_month, cx).into_any_element()
            }
            WizardStep::GuestCount => views::guest_count::render(session, cx).into_any_element(),
            WizardStep::SelectBoat => views::select_boat::render(session, cx).into_any_element(),
            WizardStep::AddExtras => views::add_extras::render(session, cx).into_any_element(),
            WizardStep::ContactInfo => views::contact_info::render(
                &self.contact,
                session,
                self.wizard.blocking_reason(),
                cx,
            )
            .into_any_element(),
            WizardStep::Payment => views::payment::render(session, cx).into_any_element(),
            WizardStep::Confirmation => views::confirmation::render(session).into_any_element(),
        }
    }

    /// Back and Next. The terminal step has no footer.
    fn render_footer(
        &self,
        cx: &mut Context<Self>,
    ) -> Option<impl IntoElement> {
        if !self.wizard.shows_forward_control() {
            return None;
        }

        Some(
            h_flex()
                .justify_between()
                .p_4()
                .border_t_1()
                .child(
                    Button::new("footer-back")
                        .outline()
                        .label("Back")
                        .disabled(self.wizard.step() == WizardStep::FIRST)
                        .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.go_back(cx))),
                )
                .child(
                    Button::new("footer-next")
                        .primary()
                        .label("Next")
                        .disabled(!self.wizard.can_proceed())
                        .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.go_next(cx))),
                ),
        )
    }
}

impl Render for BookingWindow {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        if !self.wizard.is_open() {
            return self.render_landing(cx).into_any_element();
        }

        v_flex()
            .size_full()
            .child(self.render_header(cx))
            .child(self.render_progress())
            .child(
                div()
                    .id("step-body")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_6()
                    .child(self.render_step(cx)),
            )
            .children(self.render_footer(cx))
            .child(
                h_flex()
                    .justify_center()
                    .py_2()
                    .border_t_1()
                    .text_xs()
                    .text_color(rgb(MUTED_TEXT))
                    .child("Powered by CircuitAI"),
            )
            .into_any_element()
    }
}
