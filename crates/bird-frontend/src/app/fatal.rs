//! Unrecoverable error screen

use std::sync::Arc;

use parking_lot::Mutex;

/// Message shown above the error when drawing is impossible
pub const FATAL_MESSAGE: &str =
    "Your program encountered an unrecoverable error, can not draw on canvas. Error was:";

/// First unrecoverable error, shared with the GPU error callback
#[derive(Clone, Default)]
pub struct FatalError(Arc<Mutex<Option<String>>>);

impl FatalError {
    /// Record an error. Only the first one is kept.
    pub fn set(&self, error: impl ToString) {
        let mut slot = self.0.lock();
        if slot.is_none() {
            let error = error.to_string();
            tracing::error!(%error, "{}", FATAL_MESSAGE);
            *slot = Some(error);
        }
    }

    /// The recorded error, if any
    pub fn get(&self) -> Option<String> {
        self.0.lock().clone()
    }

    /// Route uncaptured device errors here
    pub fn watch_device(&self, device: &wgpu::Device) {
        let fatal = self.clone();
        device.on_uncaptured_error(Box::new(move |error| {
            fatal.set(crate::error::AppError::Device(error.to_string()));
        }));
    }
}

/// Markup appended to the page container when the app fails to start
pub fn start_error_html(error: &str) -> String {
    format!("{FATAL_MESSAGE}<br/><br/>{error}")
}

/// Fill the window with the error text
pub fn show_fatal_error(ctx: &egui::Context, error: &str) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(FATAL_MESSAGE);
            ui.colored_label(ui.visuals().error_fg_color, error);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_error() {
        let fatal = FatalError::default();
        assert!(fatal.get().is_none());
        fatal.set("lost device");
        fatal.clone().set("second");
        assert_eq!(fatal.get().as_deref(), Some("lost device"));
    }

    #[test]
    fn test_start_error_html() {
        let html = start_error_html("WebGL not supported");
        assert!(html.starts_with(FATAL_MESSAGE));
        assert!(html.ends_with("<br/><br/>WebGL not supported"));
    }
}
