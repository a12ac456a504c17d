use gpui::{
    AnyView, App, AppContext, Application, Bounds, KeyBinding, Menu, MenuItem, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::{
    Quit,
    components::{BookingWindow, WindowPreferences},
    config::AppConfig,
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // Must run before any gpui-component widget is built.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Charter Booking".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the booking window sized from `config`.
pub fn open_booking_window(
    config: &AppConfig,
    app_cx: &mut App,
) {
    let prefs = WindowPreferences::from(&config.window);
    let bounds = Bounds::centered(None, prefs.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        ..Default::default()
    };

    let opened = app_cx.open_window(options, |window, cx| {
        let view = cx.new(|cx| BookingWindow::new(config, window, cx));
        cx.new(|cx| Root::new(AnyView::from(view), window, cx))
    });

    match opened {
        Ok(_) => info!(width = ?prefs.size.width, height = ?prefs.size.height, "booking window opened"),
        Err(error) => error!(?error, "failed to open booking window"),
    }
}

/// Runs the gpui event loop until the user quits.
pub fn launch(config: AppConfig) {
    Application::new().run(move |app_cx: &mut App| {
        setup_app(app_cx);
        open_booking_window(&config, app_cx);
    });
}
