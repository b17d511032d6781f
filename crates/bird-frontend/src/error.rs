//! Application errors

use thiserror::Error;

/// Errors that stop the viewer from drawing
#[derive(Debug, Error)]
pub enum AppError {
    /// eframe was started without a wgpu render state
    #[error("no WebGPU/WebGL render context available")]
    NoRenderContext,
    /// The embedded configuration is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ron::error::SpannedError),
    /// The GPU device reported an error
    #[error("GPU device error: {0}")]
    Device(String),
}
