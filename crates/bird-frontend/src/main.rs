//! Drinking Bird main entry point

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "bird_frontend=debug,bird_renderer=debug,bird_core=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Drinking Bird");

    // The app refits the window once the display's pixel ratio is known
    let canvas = bird_frontend::AppConfig::embedded()
        .map(|config| config.renderer.canvas)
        .unwrap_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(canvas.render_size(1.0))
            .with_title("Drinking Bird"),
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "drinking-bird",
        native_options,
        Box::new(|cc| Ok(Box::new(bird_frontend::DrinkingBirdApp::new(cc)))),
    )
}

// WASM entry point
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::{JsCast, JsValue};

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    /// Create a canvas sized for the display and append it to `container`
    fn mount_canvas(
        window: &web_sys::Window,
        document: &web_sys::Document,
        container: &web_sys::Element,
    ) -> Result<web_sys::HtmlCanvasElement, JsValue> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(JsValue::from)?;

        let [width, height] = bird_frontend::AppConfig::embedded()
            .map(|config| config.renderer.canvas)
            .unwrap_or_default()
            .render_size(window.device_pixel_ratio() as f32);
        canvas.set_attribute("style", &format!("width:{width}px;height:{height}px"))?;

        container.append_child(&canvas)?;
        Ok(canvas)
    }

    fn show_start_error(container: &web_sys::Element, error: &str) {
        log::error!("Failed to start: {}", error);
        let html = bird_frontend::app::start_error_html(error);
        if let Err(e) = container.insert_adjacent_html("beforeend", &html) {
            log::error!("Failed to show error: {:?}", e);
        }
    }

    wasm_bindgen_futures::spawn_local(async {
        let Some(window) = web_sys::window() else {
            log::error!("No window to mount on");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document to mount on");
            return;
        };

        let Some(container) = document.get_element_by_id("container") else {
            log::error!("Failed to find #container element");
            return;
        };

        let canvas = match mount_canvas(&window, &document, &container) {
            Ok(canvas) => canvas,
            Err(e) => {
                show_start_error(&container, &format!("{:?}", e));
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(bird_frontend::DrinkingBirdApp::new(cc)))),
            )
            .await;

        if let Err(e) = start_result {
            show_start_error(&container, &format!("{:?}", e));
        }
    });
}
