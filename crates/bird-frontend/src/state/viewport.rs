//! Viewport rendering state

use std::sync::Arc;

use parking_lot::Mutex;

use bird_core::Scene;
use bird_renderer::{CanvasConfig, Renderer, RendererConfig};

/// Render texture for viewport
struct RenderTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    egui_texture_id: egui::TextureId,
    width: u32,
    height: u32,
}

/// Viewport rendering state
pub struct ViewportState {
    pub renderer: Renderer,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
    render_texture: Option<RenderTexture>,
}

impl ViewportState {
    /// Create a new viewport state
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        config: &RendererConfig,
        pixels_per_point: f32,
    ) -> Self {
        let (width, height) = physical_size(
            canvas_points(&config.canvas, pixels_per_point),
            pixels_per_point,
        );
        let renderer = Renderer::new(
            &device,
            bird_renderer::constants::viewport::TARGET_FORMAT,
            width,
            height,
            config,
        );
        Self {
            renderer,
            device,
            queue,
            render_texture: None,
        }
    }

    /// Ensure the render texture matches the requested size
    pub fn ensure_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> egui::TextureId {
        let width = width.max(1);
        let height = height.max(1);

        if let Some(rt) = &self.render_texture
            && rt.width == width
            && rt.height == height
        {
            return rt.egui_texture_id;
        }

        // Free old texture if exists
        if let Some(old) = self.render_texture.take() {
            egui_renderer.free_texture(&old.egui_texture_id);
        }

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Viewport Render Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.renderer.format(),
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Register with egui
        let egui_texture_id =
            egui_renderer.register_native_texture(&self.device, &view, wgpu::FilterMode::Linear);

        self.renderer.resize(&self.device, width, height);

        self.render_texture = Some(RenderTexture {
            texture,
            view,
            egui_texture_id,
            width,
            height,
        });

        egui_texture_id
    }

    /// Upload a freshly assembled scene
    pub fn set_scene(&mut self, scene: &Scene) {
        self.renderer.set_scene(&self.device, &self.queue, scene);
    }

    /// Render the 3D scene to the texture
    pub fn render(&mut self) {
        let Some(ref rt) = self.render_texture else {
            return;
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Render Encoder"),
            });

        self.renderer.render(&mut encoder, &rt.view, &self.queue);

        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

/// Shared viewport state
pub type SharedViewportState = Arc<Mutex<ViewportState>>;

/// Logical size of the canvas on a display with `pixels_per_point`
pub fn canvas_points(canvas: &CanvasConfig, pixels_per_point: f32) -> egui::Vec2 {
    let [width, height] = canvas.render_size(pixels_per_point);
    egui::vec2(width, height)
}

/// Pixel size of a region of `size` points
pub fn physical_size(size: egui::Vec2, pixels_per_point: f32) -> (u32, u32) {
    let width = (size.x * pixels_per_point).round().max(0.0) as u32;
    let height = (size.y * pixels_per_point).round().max(0.0) as u32;
    (width, height)
}

/// Keeps the window sized to the canvas as the pixel ratio changes
pub struct CanvasFit {
    canvas: CanvasConfig,
    fitted_for: Option<f32>,
}

impl CanvasFit {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self {
            canvas,
            fitted_for: None,
        }
    }

    /// New window size in points, or `None` if already fitted for `pixels_per_point`
    pub fn request(&mut self, pixels_per_point: f32) -> Option<egui::Vec2> {
        if self.fitted_for == Some(pixels_per_point) {
            return None;
        }
        self.fitted_for = Some(pixels_per_point);
        Some(canvas_points(&self.canvas, pixels_per_point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_keeps_physical_size_on_hidpi() {
        let canvas = CanvasConfig::default();
        let points = canvas_points(&canvas, 2.0);
        assert_eq!(points, egui::vec2(423.0, 247.0));
        assert_eq!(physical_size(points, 2.0), (846, 494));

        let points = canvas_points(&canvas, 1.0);
        assert_eq!(points, egui::vec2(846.0, 494.0));
        assert_eq!(physical_size(points, 1.0), (846, 494));
    }

    #[test]
    fn test_physical_size_rounds() {
        assert_eq!(physical_size(egui::vec2(100.4, 50.6), 1.5), (151, 76));
        assert_eq!(physical_size(egui::Vec2::ZERO, 2.0), (0, 0));
    }

    #[test]
    fn test_fit_requests_once_per_pixel_ratio() {
        let mut fit = CanvasFit::new(CanvasConfig::default());
        assert_eq!(fit.request(2.0), Some(egui::vec2(423.0, 247.0)));
        assert_eq!(fit.request(2.0), None);
        assert_eq!(fit.request(1.0), Some(egui::vec2(846.0, 494.0)));
        assert_eq!(fit.request(1.0), None);
    }
}
