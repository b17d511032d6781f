//! Main renderer combining all sub-renderers.
//!
//! The [`Renderer`] owns the camera, the lighting uniform and the GPU copy of
//! the current scene. Scenes are uploaded wholesale with
//! [`Renderer::set_scene`]; nothing is patched in place.

mod camera_controller;
mod gpu_resources;
mod lighting_system;
mod render_pass;
mod scene_manager;

pub use camera_controller::CameraController;
pub use lighting_system::LightingSystem;
pub use scene_manager::SceneManager;

use bird_core::Scene;

use crate::camera::Camera;
use crate::config::RendererConfig;
use crate::constants::viewport::DEPTH_FORMAT;
use crate::sub_renderers::{LineRenderer, MeshData, MeshRenderer};

use gpu_resources::{create_depth_texture, create_msaa_texture};
use render_pass::{MainPassParams, render_main_pass};

/// Mesh entry with bind group.
pub struct MeshEntry {
    /// Mesh data including vertex/index buffers and instance data.
    pub data: MeshData,
    /// Bind group for instance-specific uniforms.
    pub bind_group: wgpu::BindGroup,
}

/// Main renderer combining all sub-renderers.
pub struct Renderer {
    camera_controller: CameraController,
    lighting_system: LightingSystem,
    scene_manager: SceneManager,

    #[allow(dead_code)]
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    #[allow(dead_code)]
    msaa_texture: Option<wgpu::Texture>,
    msaa_view: Option<wgpu::TextureView>,

    mesh_renderer: MeshRenderer,
    line_renderer: LineRenderer,

    clear_color: wgpu::Color,
    format: wgpu::TextureFormat,
    sample_count: u32,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Create a renderer drawing into targets of `format`.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        config: &RendererConfig,
    ) -> Self {
        let sample_count = config.viewport.sample_count();
        let camera_controller = CameraController::new(device, width, height, &config.camera);

        let (depth_texture, depth_view) = create_depth_texture(device, width, height, sample_count);
        let (msaa_texture, msaa_view) =
            create_msaa_texture(device, format, width, height, sample_count).unzip();

        let mesh_renderer = MeshRenderer::new(
            device,
            format,
            DEPTH_FORMAT,
            sample_count,
            camera_controller.bind_group_layout(),
            camera_controller.buffer(),
        );
        let line_renderer = LineRenderer::new(
            device,
            format,
            DEPTH_FORMAT,
            sample_count,
            camera_controller.bind_group_layout(),
            camera_controller.buffer(),
            mesh_renderer.light_bind_group_layout(),
        );
        let lighting_system = LightingSystem::new(device, mesh_renderer.light_bind_group_layout());

        tracing::info!(?format, sample_count, width, height, "Renderer created");

        Self {
            camera_controller,
            lighting_system,
            scene_manager: SceneManager::new(),
            depth_texture,
            depth_view,
            msaa_texture,
            msaa_view,
            mesh_renderer,
            line_renderer,
            clear_color: wgpu::Color::BLACK,
            format,
            sample_count,
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Get a reference to the camera.
    pub fn camera(&self) -> &Camera {
        self.camera_controller.camera()
    }

    /// Get a mutable reference to the camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        self.camera_controller.camera_mut()
    }

    /// Resize render targets. No-op when the size is unchanged.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;

        let (depth_texture, depth_view) =
            create_depth_texture(device, width, height, self.sample_count);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;

        let (msaa_texture, msaa_view) =
            create_msaa_texture(device, self.format, width, height, self.sample_count).unzip();
        self.msaa_texture = msaa_texture;
        self.msaa_view = msaa_view;

        self.camera_controller.update_aspect(width, height);
        tracing::debug!(width, height, "Render targets resized");
    }

    /// Get the surface format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Replace everything on the GPU with `scene`.
    pub fn set_scene(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, scene: &Scene) {
        self.scene_manager.replace(device, &self.mesh_renderer, scene);

        self.lighting_system.set_from_scene(scene);
        self.lighting_system.update(queue);

        let [r, g, b] = scene.background.to_linear();
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };

        tracing::debug!(
            meshes = self.scene_manager.mesh_count(),
            lines = self.scene_manager.line_count(),
            directional_lights = self.lighting_system.uniform().directional_count(),
            fog = self.lighting_system.uniform().fog_enabled(),
            "Scene set"
        );
    }

    /// Render one frame into `view`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        queue: &wgpu::Queue,
    ) {
        self.camera_controller.update(queue);

        render_main_pass(
            encoder,
            view,
            &MainPassParams {
                lighting: &self.lighting_system,
                scene: &self.scene_manager,
                mesh_renderer: &self.mesh_renderer,
                line_renderer: &self.line_renderer,
                depth_view: &self.depth_view,
                msaa_view: self.msaa_view.as_ref(),
                clear_color: self.clear_color,
            },
        );
    }
}
