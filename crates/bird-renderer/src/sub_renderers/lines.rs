//! Line renderer for the reference grids

use wgpu::util::DeviceExt;

use bird_core::LineSet;

use crate::pipeline::{PipelineConfig, create_camera_bind_group};
use crate::vertex::PositionColorVertex;

/// Vertices for a line set, two per segment
pub fn line_vertices(lines: &LineSet) -> Vec<PositionColorVertex> {
    let color = lines.color.to_linear();
    lines
        .segments
        .iter()
        .flat_map(|[start, end]| {
            [
                PositionColorVertex {
                    position: start.to_array(),
                    color,
                },
                PositionColorVertex {
                    position: end.to_array(),
                    color,
                },
            ]
        })
        .collect()
}

/// GPU vertex buffer for one line set
pub struct LineData {
    /// Line set name, for logging.
    pub name: &'static str,
    /// Vertex buffer (line list).
    pub vertex_buffer: wgpu::Buffer,
    /// Number of vertices.
    pub vertex_count: u32,
}

impl LineData {
    /// Upload a line set
    pub fn from_line_set(device: &wgpu::Device, lines: &LineSet) -> Self {
        let vertices = line_vertices(lines);
        tracing::debug!(
            name = lines.name,
            vertices = vertices.len(),
            "Uploading lines"
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Line Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            name: lines.name,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        }
    }
}

/// Line renderer
pub struct LineRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
}

impl LineRenderer {
    /// Creates a new line renderer sharing the light layout of the mesh renderer.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        sample_count: u32,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
        light_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let bind_group =
            create_camera_bind_group(device, camera_bind_group_layout, camera_buffer, "Line");

        let pipeline = PipelineConfig::new(
            "Line",
            include_str!("../shaders/line.wgsl"),
            format,
            depth_format,
            &[camera_bind_group_layout, light_bind_group_layout],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .with_sample_count(sample_count)
        .build(device);

        Self {
            pipeline,
            bind_group,
        }
    }

    /// Render one line set
    pub fn render(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        lines: &LineData,
        light_bind_group: &wgpu::BindGroup,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_bind_group(1, light_bind_group, &[]);
        render_pass.set_vertex_buffer(0, lines.vertex_buffer.slice(..));
        render_pass.draw(0..lines.vertex_count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bird_core::helpers::{GridOrientation, grid};

    #[test]
    fn test_two_vertices_per_segment() {
        let lines = grid(1000.0, 0.01, GridOrientation::X);
        let vertices = line_vertices(&lines);
        assert_eq!(vertices.len(), lines.segments.len() * 2);
        assert!(vertices.iter().all(|v| v.color == [0.0, 0.0, 0.0]));
        assert_eq!(vertices[0].position, lines.segments[0][0].to_array());
        assert_eq!(vertices[1].position, lines.segments[0][1].to_array());
    }
}
