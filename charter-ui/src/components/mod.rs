pub mod window;

use gpui::{
    App, ClickEvent, Div, FontWeight, IntoElement, ParentElement, Pixels, SharedString, Size,
    Styled, Window, div, px, rgb,
};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{Sizable, h_flex, v_flex};
use rust_decimal::Decimal;

use charter_core::calculations::common::format_currency;

use crate::config::WindowConfig;

pub use window::BookingWindow;

pub const ACCENT: u32 = 0x2563eb;
pub const MUTED_TEXT: u32 = 0x6b7280;
pub const NOTE_BACKGROUND: u32 = 0xeff6ff;
pub const NOTE_TEXT: u32 = 0x1d4ed8;
pub const PANEL_BACKGROUND: u32 = 0xf9fafb;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self {
            size: Size {
                width: px(config.width),
                height: px(config.height),
            },
        }
    }
}

/// Primary call-to-action button.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w(px(140.))
        .label(label.into())
        .on_click(on_click)
}

/// A choice in a group of mutually exclusive or toggleable options.
/// Selected options are drawn filled, the rest outlined.
pub fn option_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    selected: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    let button = Button::new(id.into()).label(label.into()).on_click(on_click);
    if selected { button.primary() } else { button.outline() }
}

/// Whole-dollar money label.
pub fn money(amount: Decimal) -> SharedString {
    format_currency(amount).into()
}

pub fn section_title(text: impl Into<SharedString>) -> Div {
    div()
        .font_weight(FontWeight::SEMIBOLD)
        .child(text.into())
}

pub fn muted(text: impl Into<SharedString>) -> Div {
    div()
        .text_sm()
        .text_color(rgb(MUTED_TEXT))
        .child(text.into())
}

/// Tinted box used for acknowledgements, notices and subtotals.
pub fn callout() -> Div {
    div()
        .p_3()
        .rounded_md()
        .bg(rgb(NOTE_BACKGROUND))
        .text_sm()
        .text_color(rgb(NOTE_TEXT))
}

pub fn note(text: impl Into<SharedString>) -> Div {
    callout().child(text.into())
}

/// Label on the left, value on the right.
pub fn summary_row(
    label: impl Into<SharedString>,
    value: impl IntoElement,
) -> Div {
    h_flex()
        .justify_between()
        .items_center()
        .gap_2()
        .child(div().text_sm().child(label.into()))
        .child(value)
}

/// Titled, lightly shaded panel.
pub fn panel(title: impl Into<SharedString>) -> Div {
    v_flex()
        .gap_2()
        .p_4()
        .rounded_md()
        .border_1()
        .bg(rgb(PANEL_BACKGROUND))
        .child(section_title(title))
}
