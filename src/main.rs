mod components;
mod logging;

use std::sync::Arc;

use anyhow::Context as _;
use gpui::{
    AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use gpui_component::Root;
use lc_config::ConfigStore;
use lc_core::MainWindow;
use lc_launch::{JavaLauncher, LunarLayout};
use tracing::info;

use crate::components::LauncherView;

fn main() -> anyhow::Result<()> {
    logging::init();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start the tokio runtime")?;
    let store = ConfigStore::at_default_location()?;
    let launcher = Arc::new(JavaLauncher::new(
        runtime.handle().clone(),
        LunarLayout::from_home()?,
    ));

    let mut model = MainWindow::new(store, launcher);
    model.on_startup();

    let app = Application::new();

    app.run(move |cx| {
        // This must be called before using any GPUI Component features.
        gpui_component::init(cx);

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                info!("Last window closed, quitting");
                cx.quit();
            }
        })
        .detach();

        let options = WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some("Lunar Client".into()),
                ..Default::default()
            }),
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(800.), px(600.)),
                cx,
            ))),
            ..Default::default()
        };

        cx.spawn(async move |cx| {
            cx.open_window(options, |window, cx| {
                let view = cx.new(|cx| LauncherView::new(model, window, cx));

                // This first level on the window, should be a Root.
                cx.new(|cx| Root::new(view.into(), window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
