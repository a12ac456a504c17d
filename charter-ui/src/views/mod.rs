//! One module per wizard step. Each renders a slice of the booking session
//! and writes changes back through the owning [`BookingWindow`].
//!
//! [`BookingWindow`]: crate::components::BookingWindow

pub mod add_extras;
pub mod confirmation;
pub mod contact_info;
pub mod date_time;
pub mod guest_count;
pub mod payment;
pub mod select_boat;

pub use contact_info::ContactForm;

use gpui::{Div, IntoElement, ParentElement, Styled, div};
use gpui_component::v_flex;

use charter_core::WizardStep;

/// Common frame of a step body: heading followed by the step's content.
fn step_frame(
    step: WizardStep,
    content: impl IntoElement,
) -> Div {
    v_flex()
        .gap_6()
        .child(div().text_2xl().child(step.heading()))
        .child(content)
}
