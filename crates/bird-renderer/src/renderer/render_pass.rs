//! Render pass execution.

use crate::sub_renderers::{LineRenderer, MeshRenderer};

use super::{LightingSystem, SceneManager};

/// Main pass parameters.
pub struct MainPassParams<'a> {
    /// Lighting system.
    pub lighting: &'a LightingSystem,
    /// Uploaded scene.
    pub scene: &'a SceneManager,
    /// Mesh renderer.
    pub mesh_renderer: &'a MeshRenderer,
    /// Line renderer.
    pub line_renderer: &'a LineRenderer,
    /// Depth view.
    pub depth_view: &'a wgpu::TextureView,
    /// MSAA view (if MSAA is enabled).
    pub msaa_view: Option<&'a wgpu::TextureView>,
    /// Clear color (scene background, linear).
    pub clear_color: wgpu::Color,
}

/// Execute the main render pass.
///
/// Draw order: opaque meshes, grid lines, then transparent meshes.
pub fn render_main_pass(
    encoder: &mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    params: &MainPassParams<'_>,
) {
    let ops = wgpu::Operations {
        load: wgpu::LoadOp::Clear(params.clear_color),
        store: wgpu::StoreOp::Store,
    };
    let color_attachment = match params.msaa_view {
        // Render to the multisample texture, resolve to the output
        Some(msaa_view) => wgpu::RenderPassColorAttachment {
            view: msaa_view,
            resolve_target: Some(view),
            ops,
        },
        None => wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops,
        },
    };

    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Main Render Pass"),
        color_attachments: &[Some(color_attachment)],
        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
            view: params.depth_view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }),
        timestamp_writes: None,
        occlusion_query_set: None,
    });

    let light_bind_group = params.lighting.light_bind_group();

    for entry in params.scene.opaque() {
        params.mesh_renderer.render(
            &mut render_pass,
            &entry.data,
            &entry.bind_group,
            light_bind_group,
        );
    }

    for lines in params.scene.lines() {
        params
            .line_renderer
            .render(&mut render_pass, lines, light_bind_group);
    }

    for entry in params.scene.transparent() {
        params.mesh_renderer.render(
            &mut render_pass,
            &entry.data,
            &entry.bind_group,
            light_bind_group,
        );
    }
}
