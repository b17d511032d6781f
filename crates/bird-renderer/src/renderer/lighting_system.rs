//! Lighting and fog resources for the renderer.

use wgpu::util::DeviceExt;

use bird_core::Scene;

use crate::light::LightUniform;
use crate::pipeline::uniform_bind_group;

/// Manages the light uniform derived from the current scene.
pub struct LightingSystem {
    /// CPU copy of the packed lights and fog.
    uniform: LightUniform,
    /// GPU buffer for light uniforms.
    light_buffer: wgpu::Buffer,
    /// Bind group shared by the mesh and line pipelines.
    light_bind_group: wgpu::BindGroup,
}

impl LightingSystem {
    /// Create a lighting system with no lights and no fog.
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let uniform = LightUniform::default();
        let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Light Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let light_bind_group = uniform_bind_group(device, layout, &light_buffer, "Light");

        Self {
            uniform,
            light_buffer,
            light_bind_group,
        }
    }

    /// Get the light bind group.
    pub fn light_bind_group(&self) -> &wgpu::BindGroup {
        &self.light_bind_group
    }

    /// Current light uniform.
    pub fn uniform(&self) -> &LightUniform {
        &self.uniform
    }

    /// Take lights and fog from the scene.
    pub fn set_from_scene(&mut self, scene: &Scene) {
        self.uniform = LightUniform::from_scene(scene);
    }

    /// Update the light buffer on the GPU.
    pub fn update(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.light_buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
