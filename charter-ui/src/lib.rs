pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod views;

use gpui::{App, actions};
pub use gui::{launch, setup_app};
use tracing::info;

actions!(charter_booking, [Quit]);

pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("quitting");
    cx.quit();
}
