//! Drinking Bird Renderer
//!
//! WGPU-based rendering of a [`bird_core::Scene`].
//!
//! # Module Structure
//!
//! ```text
//! bird-renderer/
//! ├── camera.rs        # Perspective orbit camera
//! ├── config.rs        # RON renderer configuration
//! ├── light.rs         # Light and fog uniform packing
//! ├── pipeline.rs      # Pipeline utilities
//! ├── sub_renderers/   # Mesh and line renderers
//! ├── vertex.rs        # Vertex formats
//! └── renderer/        # Main Renderer
//! ```

pub mod camera;
pub mod config;
pub mod constants;
pub mod light;
pub mod pipeline;
pub mod renderer;
pub mod sub_renderers;
pub mod vertex;

pub use camera::{Camera, CameraUniform};
pub use config::{CameraConfig, CanvasConfig, ConfigError, RendererConfig, ViewportConfig};
pub use light::LightUniform;
pub use renderer::Renderer;
pub use sub_renderers::{LineRenderer, MeshRenderer};
