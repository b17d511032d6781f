//! Main application module

mod fatal;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::panels::{ViewportPanel, show_debug_controls};
use crate::state::{
    CanvasFit, SharedAppState, SharedViewportState, ViewportState, create_shared_state,
};

pub use fatal::{FATAL_MESSAGE, FatalError, show_fatal_error, start_error_html};

/// Main application
pub struct DrinkingBirdApp {
    app_state: SharedAppState,
    viewport_state: Option<SharedViewportState>,
    viewport_panel: ViewportPanel,
    canvas_fit: CanvasFit,
    fatal_error: FatalError,
}

impl DrinkingBirdApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let fatal_error = FatalError::default();

        let config = AppConfig::embedded().unwrap_or_else(|e| {
            fatal_error.set(&e);
            AppConfig::default()
        });

        let app_state = create_shared_state(config.display);

        // Create viewport state if WGPU is available
        let viewport_state = match cc.wgpu_render_state.as_ref() {
            Some(render_state) => {
                fatal_error.watch_device(&render_state.device);
                let mut viewport = ViewportState::new(
                    render_state.device.clone(),
                    render_state.queue.clone(),
                    &config.renderer,
                    cc.egui_ctx.pixels_per_point(),
                );
                viewport.set_scene(app_state.lock().scene.scene());
                Some(Arc::new(Mutex::new(viewport)))
            }
            None => {
                fatal_error.set(AppError::NoRenderContext);
                None
            }
        };

        tracing::info!("Drinking bird viewer started");

        Self {
            app_state,
            viewport_state,
            viewport_panel: ViewportPanel::new(&config.renderer.camera),
            canvas_fit: CanvasFit::new(config.renderer.canvas),
            fatal_error,
        }
    }

    /// Resize the window when the display's pixel ratio changes
    fn fit_window(&mut self, ctx: &egui::Context) {
        let pixels_per_point = ctx.pixels_per_point();
        if let Some(size) = self.canvas_fit.request(pixels_per_point) {
            tracing::debug!(pixels_per_point, ?size, "Fitting window to canvas");
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
        }
    }

    /// Apply toggle changes and upload the scene when it was rebuilt
    fn update_scene(&self) {
        let mut state = self.app_state.lock();
        if state.update()
            && let Some(viewport_state) = &self.viewport_state
        {
            viewport_state.lock().set_scene(state.scene.scene());
        }
    }
}

impl eframe::App for DrinkingBirdApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if let Some(error) = self.fatal_error.get() {
            show_fatal_error(ctx, &error);
            return;
        }

        self.fit_window(ctx);
        show_debug_controls(ctx, &mut self.app_state.lock().toggles);
        self.update_scene();

        let render_state = frame.wgpu_render_state();
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if let (Some(render_state), Some(viewport_state)) =
                    (render_state, &self.viewport_state)
                {
                    self.viewport_panel.ui(ui, render_state, viewport_state);
                }
            });

        // Continuous frame loop
        ctx.request_repaint();
    }
}
