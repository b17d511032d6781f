//! 3D Viewport panel

use bird_renderer::CameraConfig;

use crate::state::{SharedViewportState, physical_size};

/// 3D viewport panel
pub struct ViewportPanel {
    orbit_sensitivity: f32,
    pan_sensitivity: f32,
    zoom_sensitivity: f32,
}

impl ViewportPanel {
    pub fn new(camera: &CameraConfig) -> Self {
        Self {
            orbit_sensitivity: camera.orbit_sensitivity,
            pan_sensitivity: camera.pan_sensitivity,
            zoom_sensitivity: camera.zoom_sensitivity,
        }
    }

    /// Draw the rendered scene and apply camera input.
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        render_state: &egui_wgpu::RenderState,
        viewport_state: &SharedViewportState,
    ) {
        let available_size = ui.available_size();
        let pixels_per_point = ui.ctx().pixels_per_point();
        let (width, height) = physical_size(available_size, pixels_per_point);

        if width == 0 || height == 0 {
            return;
        }

        // Ensure texture and render
        let texture_id = {
            let mut state = viewport_state.lock();
            let mut egui_renderer = render_state.renderer.write();
            let tex_id = state.ensure_texture(width, height, &mut egui_renderer);
            state.render();
            tex_id
        };

        // Display the rendered texture
        let response = ui.add(
            egui::Image::new(egui::load::SizedTexture::new(
                texture_id,
                [available_size.x, available_size.y],
            ))
            .sense(egui::Sense::click_and_drag()),
        );

        let mut vp_state = viewport_state.lock();
        let camera = vp_state.renderer.camera_mut();
        let shift = ui.input(|i| i.modifiers.shift);

        // Middle drag, or shift with any drag, pans
        let panning = response.dragged_by(egui::PointerButton::Middle)
            || (shift
                && (response.dragged_by(egui::PointerButton::Primary)
                    || response.dragged_by(egui::PointerButton::Secondary)));

        if panning {
            let delta = response.drag_delta();
            camera.pan(delta.x, delta.y, self.pan_sensitivity);
        } else if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Secondary)
        {
            let delta = response.drag_delta();
            camera.orbit(
                -delta.x * self.orbit_sensitivity,
                delta.y * self.orbit_sensitivity,
            );
        }

        // Zoom with scroll
        if response.hovered() {
            let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll_delta != 0.0 {
                camera.zoom(scroll_delta * 0.01, self.zoom_sensitivity);
            }
        }
    }
}
