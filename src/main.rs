//! Application entry point.

use atelier::app::Atelier;
use gpui::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Atelier");

    let app = Application::new();
    app.run(move |cx| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(None, size(px(1280.0), px(860.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Atelier".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let window = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| Atelier::new(cx));
            cx.new(|cx| gpui_component::Root::new(Into::<AnyView>::into(view), window, cx))
        });

        match window {
            Ok(_) => cx.activate(true),
            Err(e) => {
                tracing::error!(error = %e, "Failed to open window");
                cx.quit();
            }
        }
    });
}
