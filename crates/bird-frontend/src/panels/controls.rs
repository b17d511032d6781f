//! Debug controls window

use bird_core::{DisplayToggle, DisplayToggles};

/// Floating window with one checkbox per debug helper.
pub fn show_debug_controls(ctx: &egui::Context, toggles: &mut DisplayToggles) {
    let mut changed = Vec::new();

    egui::Window::new("Debug")
        .anchor(egui::Align2::RIGHT_TOP, [-8.0, 8.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            for toggle in DisplayToggle::ALL {
                if ui
                    .checkbox(toggles.get_mut(toggle), toggle.label())
                    .changed()
                {
                    changed.push(toggle);
                }
            }
        });

    if !changed.is_empty() {
        tracing::debug!(?changed, "Display toggles changed");
    }
}
