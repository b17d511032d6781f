//! Drinking Bird Core
//!
//! Scene description for the drinking bird model, independent of any GPU API.
//!
//! This crate provides:
//! - The blueprint of dimensions the model is derived from
//! - Primitive mesh generation (box, plane, cylinder, sphere)
//! - The layout builder placing every part of the bird
//! - Debug helpers (ground, grids, axes) and their display toggles
//! - Scene assembly with a rebuild-on-change state machine

pub mod assembler;
pub mod blueprint;
pub mod constants;
pub mod display;
pub mod geometry;
pub mod helpers;
pub mod layout;
pub mod material;
pub mod placement;
pub mod primitive;
pub mod scene;

// Re-exports for convenience
pub use assembler::{AssemblerPhase, SceneState, assemble_scene};
pub use blueprint::Blueprint;
pub use display::{DisplayToggle, DisplayToggles};
pub use geometry::Geometry;
pub use helpers::GridOrientation;
pub use layout::{build_body, build_drinking_bird, build_head, build_support};
pub use material::{Color, Material, Shading};
pub use placement::{Group, Placement};
pub use primitive::MeshData;
pub use scene::{Fog, Light, LineSet, Scene};
