//! Renderer configuration structures
//!
//! Settings for the canvas, the viewport and the camera. Every section falls
//! back to its defaults when missing, so a partial RON document is valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{camera, canvas, viewport};

/// Errors raised while reading or writing a configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The RON document could not be parsed
    #[error("invalid renderer config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The configuration could not be serialized
    #[error("failed to serialize renderer config: {0}")]
    Serialize(#[from] ron::Error),
}

/// Canvas size configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width in logical pixels
    pub width: f32,
    /// Height in logical pixels
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: canvas::WIDTH,
            height: canvas::HEIGHT,
        }
    }
}

impl CanvasConfig {
    /// Canvas size divided by the device pixel ratio
    ///
    /// A non-positive ratio is treated as 1.
    pub fn render_size(&self, pixel_ratio: f32) -> [f32; 2] {
        let ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        [self.width / ratio, self.height / ratio]
    }
}

/// Viewport rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// MSAA sample count (1 = disabled, 4)
    pub msaa_sample_count: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            msaa_sample_count: viewport::SAMPLE_COUNT,
        }
    }
}

impl ViewportConfig {
    /// Sample count the GPU is guaranteed to support
    pub fn sample_count(&self) -> u32 {
        if self.msaa_sample_count <= 1 { 1 } else { 4 }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
    /// Initial eye position
    pub position: [f32; 3],
    /// Initial look-at target
    pub target: [f32; 3],
    /// Pan sensitivity multiplier
    pub pan_sensitivity: f32,
    /// Zoom sensitivity multiplier
    pub zoom_sensitivity: f32,
    /// Orbit sensitivity multiplier
    pub orbit_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: camera::DEFAULT_FOV_DEGREES,
            near_plane: camera::DEFAULT_NEAR,
            far_plane: camera::DEFAULT_FAR,
            position: camera::DEFAULT_POSITION,
            target: camera::DEFAULT_TARGET,
            pan_sensitivity: camera::PAN_SCALE,
            zoom_sensitivity: camera::ZOOM_SCALE,
            orbit_sensitivity: camera::ORBIT_SCALE,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Canvas settings
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
}

impl RendererConfig {
    /// Parse a configuration from a RON document
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    /// Serialize the configuration as pretty-printed RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RendererConfig::default();
        assert_eq!(config.canvas.width, 846.0);
        assert_eq!(config.canvas.height, 494.0);
        assert_eq!(config.viewport.sample_count(), 4);
        assert_eq!(config.camera.fov_degrees, 45.0);
        assert_eq!(config.camera.position, [-480.0, 659.0, -619.0]);
        assert_eq!(config.camera.target, [4.0, 301.0, 92.0]);
    }

    #[test]
    fn test_render_size_divides_by_pixel_ratio() {
        let canvas = CanvasConfig::default();
        assert_eq!(canvas.render_size(1.0), [846.0, 494.0]);
        assert_eq!(canvas.render_size(2.0), [423.0, 247.0]);
        assert_eq!(canvas.render_size(0.0), [846.0, 494.0]);
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut config = RendererConfig::default();
        config.camera.fov_degrees = 60.0;
        config.viewport.msaa_sample_count = 1;

        let text = config.to_ron().unwrap();
        let parsed = RendererConfig::from_ron(&text).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.viewport.sample_count(), 1);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = RendererConfig::from_ron("(camera: (fov_degrees: 30.0))").unwrap();
        assert_eq!(config.camera.fov_degrees, 30.0);
        assert_eq!(config.camera.near_plane, 1.0);
        assert_eq!(config.canvas, CanvasConfig::default());
    }

    #[test]
    fn test_malformed_document() {
        let err = RendererConfig::from_ron("(camera: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unsupported_sample_count_falls_back() {
        let viewport = ViewportConfig {
            msaa_sample_count: 8,
        };
        assert_eq!(viewport.sample_count(), 4);
    }
}
