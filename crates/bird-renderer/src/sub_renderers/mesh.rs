//! Mesh renderer with Lambert and unlit shading

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use bird_core::{Placement, Shading};

use crate::pipeline::{PipelineConfig, create_camera_bind_group, uniform_bind_group_layout};
use crate::vertex::MeshVertex;

/// Per-mesh uniform: transform, color and shading model
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// Model transformation matrix.
    pub model: [[f32; 4]; 4],
    /// Linear RGB color and opacity.
    pub color: [f32; 4],
    /// Shading model (0 = Lambert, 1 = unlit).
    pub shading: u32,
    /// Padding for alignment.
    pub _pad: [u32; 3],
}

impl MeshInstance {
    /// Instance data for a placement
    pub fn from_placement(placement: &Placement) -> Self {
        let material = placement.material;
        Self {
            model: placement.transform().to_cols_array_2d(),
            color: material.color.to_linear_rgba(material.opacity),
            shading: match material.shading {
                Shading::Lambert => 0,
                Shading::Basic => 1,
            },
            _pad: [0; 3],
        }
    }
}

/// GPU mesh data
pub struct MeshData {
    /// Placement name, for logging.
    pub name: &'static str,
    /// Vertex buffer containing mesh geometry.
    pub vertex_buffer: wgpu::Buffer,
    /// Index buffer for indexed drawing.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices.
    pub index_count: u32,
    /// Instance data (transform, color, shading).
    pub instance: MeshInstance,
    /// GPU buffer for instance data.
    pub instance_buffer: wgpu::Buffer,
    /// Whether the mesh blends with what is behind it.
    pub transparent: bool,
}

impl MeshData {
    /// Tessellate a placement and upload it
    pub fn from_placement(device: &wgpu::Device, placement: &Placement) -> Self {
        let (positions, normals, indices) = placement.geometry.mesh();
        let vertices = MeshVertex::interleave(&positions, &normals);

        tracing::debug!(
            name = placement.name,
            vertices = vertices.len(),
            indices = indices.len(),
            "Uploading mesh"
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance = MeshInstance::from_placement(placement);
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Instance Buffer"),
            contents: bytemuck::cast_slice(&[instance]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            name: placement.name,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            instance,
            instance_buffer,
            transparent: placement.material.is_transparent(),
        }
    }
}

/// Mesh renderer
///
/// Opaque meshes are drawn with depth writes; transparent meshes use a second
/// pipeline that blends and only tests depth.
pub struct MeshRenderer {
    opaque_pipeline: wgpu::RenderPipeline,
    transparent_pipeline: wgpu::RenderPipeline,
    camera_bind_group: wgpu::BindGroup,
    instance_bind_group_layout: wgpu::BindGroupLayout,
    light_bind_group_layout: wgpu::BindGroupLayout,
}

impl MeshRenderer {
    /// Creates a new mesh renderer.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        sample_count: u32,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let camera_bind_group =
            create_camera_bind_group(device, camera_bind_group_layout, camera_buffer, "Mesh");

        let instance_bind_group_layout = uniform_bind_group_layout(
            device,
            "Mesh Instance",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let light_bind_group_layout =
            uniform_bind_group_layout(device, "Light", wgpu::ShaderStages::VERTEX_FRAGMENT);

        // camera, instance, light
        let layouts = [
            camera_bind_group_layout,
            &instance_bind_group_layout,
            &light_bind_group_layout,
        ];
        let shader = include_str!("../shaders/mesh.wgsl");

        let opaque_pipeline = PipelineConfig::new("Mesh", shader, format, depth_format, &layouts)
            .with_vertex_layouts(vec![MeshVertex::layout()])
            .with_blend(Some(wgpu::BlendState::REPLACE))
            .with_sample_count(sample_count)
            .build(device);

        let transparent_pipeline =
            PipelineConfig::new("Transparent Mesh", shader, format, depth_format, &layouts)
                .with_vertex_layouts(vec![MeshVertex::layout()])
                .with_depth(false, wgpu::CompareFunction::Less)
                .with_sample_count(sample_count)
                .build(device);

        Self {
            opaque_pipeline,
            transparent_pipeline,
            camera_bind_group,
            instance_bind_group_layout,
            light_bind_group_layout,
        }
    }

    /// Get the light bind group layout
    pub fn light_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.light_bind_group_layout
    }

    /// Create bind group for a mesh instance
    pub fn create_instance_bind_group(
        &self,
        device: &wgpu::Device,
        mesh: &MeshData,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Mesh Instance Bind Group"),
            layout: &self.instance_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: mesh.instance_buffer.as_entire_binding(),
            }],
        })
    }

    /// Render one mesh with lighting and fog
    pub fn render(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        mesh: &MeshData,
        instance_bind_group: &wgpu::BindGroup,
        light_bind_group: &wgpu::BindGroup,
    ) {
        let pipeline = if mesh.transparent {
            &self.transparent_pipeline
        } else {
            &self.opaque_pipeline
        };
        render_pass.set_pipeline(pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_bind_group(1, instance_bind_group, &[]);
        render_pass.set_bind_group(2, light_bind_group, &[]);
        render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bird_core::material::{basic, sphere_material};
    use bird_core::{Group, geometry::sphere};
    use glam::Vec3;

    #[test]
    fn test_instance_layout_matches_shader() {
        // mat4 + vec4 + u32, rounded up to 16 bytes
        assert_eq!(std::mem::size_of::<MeshInstance>(), 96);
    }

    #[test]
    fn test_instance_from_placement() {
        let placement = Placement::new(
            "bulb",
            Group::Body,
            sphere(58.0),
            sphere_material(),
            Vec3::new(0.0, 160.0, 0.0),
        );
        let instance = MeshInstance::from_placement(&placement);
        assert_eq!(instance.shading, 0);
        assert_eq!(instance.color[3], 1.0);
        // Translation lives in the last column
        assert_eq!(instance.model[3][1], 160.0);
        // 0xA00000 has no green or blue
        assert_eq!(instance.color[1], 0.0);
    }

    #[test]
    fn test_basic_material_is_unlit() {
        let placement = Placement::new(
            "ground",
            Group::Helper,
            sphere(1.0),
            basic(0xFFFFFF, 0.5),
            Vec3::ZERO,
        );
        let instance = MeshInstance::from_placement(&placement);
        assert_eq!(instance.shading, 1);
        assert_eq!(instance.color[3], 0.5);
    }
}
