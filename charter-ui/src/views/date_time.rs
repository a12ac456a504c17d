use chrono::{Datelike, NaiveDate};
use gpui::{ClickEvent, Context, Div, IntoElement, ParentElement, SharedString, Styled, div, px};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{h_flex, v_flex};

use charter_core::{
    BookingSession, CalendarMonth, CharterDuration, SessionUpdate, StartTime, WEEKDAY_HEADERS,
    WizardStep,
};

use super::step_frame;
use crate::components::{BookingWindow, muted, option_button, section_title};

const CELL_WIDTH: f32 = 52.;

pub fn render(
    session: &BookingSession,
    month: CalendarMonth,
    cx: &Context<BookingWindow>,
) -> impl IntoElement {
    step_frame(
        WizardStep::DateTime,
        v_flex()
            .gap_8()
            .child(calendar(session, month, cx))
            .child(start_times(session, cx))
            .child(durations(session, cx)),
    )
}

fn calendar(
    session: &BookingSession,
    month: CalendarMonth,
    cx: &Context<BookingWindow>,
) -> Div {
    let header = h_flex()
        .justify_between()
        .items_center()
        .child(
            Button::new("month-prev")
                .ghost()
                .label("‹")
                .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.shift_month(false, cx))),
        )
        .child(section_title(month.label()))
        .child(
            Button::new("month-next")
                .ghost()
                .label("›")
                .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.shift_month(true, cx))),
        );

    let weekdays = h_flex().gap_1().children(
        WEEKDAY_HEADERS
            .iter()
            .map(|name| muted(*name).w(px(CELL_WIDTH)).flex().justify_center()),
    );

    let mut cells: Vec<Option<NaiveDate>> = vec![None; month.leading_blanks() as usize];
    cells.extend(month.days().map(Some));

    let weeks = cells
        .chunks(7)
        .map(|week| {
            h_flex()
                .gap_1()
                .children(week.iter().map(|cell| day_cell(*cell, session, cx)))
        })
        .collect::<Vec<_>>();

    v_flex().gap_2().child(header).child(weekdays).children(weeks)
}

fn day_cell(
    cell: Option<NaiveDate>,
    session: &BookingSession,
    cx: &Context<BookingWindow>,
) -> Div {
    let slot = div().w(px(CELL_WIDTH)).h(px(40.));
    let Some(date) = cell else {
        return slot;
    };

    let selected = session.selected_date == Some(date);
    slot.child(
        option_button(
            SharedString::from(format!("day-{}", date.day())),
            date.day().to_string(),
            selected,
            cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.apply(SessionUpdate::new().selected_date(Some(date)), cx)
            }),
        )
        .w_full(),
    )
}

fn start_times(
    session: &BookingSession,
    cx: &Context<BookingWindow>,
) -> Div {
    let buttons = StartTime::ALL.into_iter().map(|time| {
        option_button(
            SharedString::from(format!("time-{}", time.label())),
            time.label(),
            session.selected_time == time,
            cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.apply(SessionUpdate::new().selected_time(time), cx)
            }),
        )
        .w(px(130.))
    });

    v_flex()
        .gap_3()
        .child(section_title("Start Time"))
        .child(h_flex().flex_wrap().gap_2().children(buttons))
}

fn durations(
    session: &BookingSession,
    cx: &Context<BookingWindow>,
) -> Div {
    let buttons = CharterDuration::ALL.into_iter().map(|duration| {
        option_button(
            SharedString::from(format!("duration-{}", duration.hours())),
            duration.label(),
            session.duration == duration,
            cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.apply(SessionUpdate::new().duration(duration), cx)
            }),
        )
        .w(px(200.))
    });

    v_flex()
        .gap_3()
        .child(section_title("Charter Duration"))
        .child(h_flex().flex_wrap().gap_2().children(buttons))
}
