//! Built-in sub-renderers.
//!
//! - [`mesh::MeshRenderer`]: lit and unlit triangle meshes
//! - [`lines::LineRenderer`]: reference grid lines

pub mod lines;
pub mod mesh;

pub use lines::{LineData, LineRenderer};
pub use mesh::{MeshData, MeshInstance, MeshRenderer};
