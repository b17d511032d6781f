//! Camera state and its uniform buffer.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::camera::Camera;
use crate::config::CameraConfig;
use crate::pipeline::uniform_bind_group_layout;

/// Owns the camera, its GPU buffer and the bind group layout shared by all
/// pipelines.
pub struct CameraController {
    camera: Camera,
    buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraController {
    /// Create a camera from the configuration.
    pub fn new(device: &wgpu::Device, width: u32, height: u32, config: &CameraConfig) -> Self {
        let mut camera = Camera::from_position_target(
            Vec3::from_array(config.position),
            Vec3::from_array(config.target),
            config.fov_degrees,
            aspect(width, height),
        );
        camera.set_near(config.near_plane);
        camera.set_far(config.far_plane);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout =
            uniform_bind_group_layout(device, "Camera", wgpu::ShaderStages::VERTEX_FRAGMENT);

        Self {
            camera,
            buffer,
            bind_group_layout,
        }
    }

    /// Get a reference to the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get a mutable reference to the camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Camera uniform buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Camera bind group layout.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Update aspect ratio from the viewport size.
    pub fn update_aspect(&mut self, width: u32, height: u32) {
        self.camera.update_aspect(aspect(width, height));
    }

    /// Upload the camera uniform.
    pub fn update(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.camera.uniform()]));
    }
}

fn aspect(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
