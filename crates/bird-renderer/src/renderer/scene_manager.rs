//! GPU copy of the current scene.

use bird_core::Scene;

use crate::sub_renderers::{LineData, MeshData, MeshRenderer};

use super::MeshEntry;

/// Holds the uploaded meshes and line sets of one scene.
///
/// The contents are only ever replaced as a whole.
#[derive(Default)]
pub struct SceneManager {
    /// Opaque meshes, in scene order.
    opaque: Vec<MeshEntry>,
    /// Transparent meshes, drawn after everything else.
    transparent: Vec<MeshEntry>,
    lines: Vec<LineData>,
}

impl SceneManager {
    /// Create an empty scene manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every GPU buffer and upload `scene`.
    pub fn replace(&mut self, device: &wgpu::Device, mesh_renderer: &MeshRenderer, scene: &Scene) {
        self.clear();

        for placement in &scene.meshes {
            let data = MeshData::from_placement(device, placement);
            let bind_group = mesh_renderer.create_instance_bind_group(device, &data);
            let entry = MeshEntry { data, bind_group };
            if entry.data.transparent {
                self.transparent.push(entry);
            } else {
                self.opaque.push(entry);
            }
        }

        self.lines = scene
            .lines
            .iter()
            .map(|lines| LineData::from_line_set(device, lines))
            .collect();

        tracing::debug!(
            opaque = self.opaque.len(),
            transparent = self.transparent.len(),
            lines = self.lines.len(),
            "Scene uploaded"
        );
    }

    /// Drop all GPU resources.
    pub fn clear(&mut self) {
        self.opaque.clear();
        self.transparent.clear();
        self.lines.clear();
    }

    /// Opaque mesh entries.
    pub fn opaque(&self) -> impl Iterator<Item = &MeshEntry> {
        self.opaque.iter()
    }

    /// Transparent mesh entries.
    pub fn transparent(&self) -> impl Iterator<Item = &MeshEntry> {
        self.transparent.iter()
    }

    /// Uploaded line sets.
    pub fn lines(&self) -> impl Iterator<Item = &LineData> {
        self.lines.iter()
    }

    /// Number of uploaded meshes.
    pub fn mesh_count(&self) -> usize {
        self.opaque.len() + self.transparent.len()
    }

    /// Number of uploaded line sets.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
