//! Viewer configuration, embedded at compile time

use serde::{Deserialize, Serialize};

use bird_core::DisplayToggles;
use bird_renderer::RendererConfig;

use crate::error::AppError;

/// Configuration shipped with the binary
pub const EMBEDDED_CONFIG: &str = include_str!("../assets/viewer.ron");

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial debug helper visibility
    pub display: DisplayToggles,
    /// Canvas, viewport and camera settings
    pub renderer: RendererConfig,
}

impl AppConfig {
    /// Parse a configuration document
    pub fn from_ron(source: &str) -> Result<Self, AppError> {
        Ok(ron::from_str(source)?)
    }

    /// The configuration embedded in the binary
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_ron(EMBEDDED_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::embedded().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_ron("(display: (axes: true))").unwrap();
        assert!(config.display.axes);
        assert!(config.display.ground);
        assert_eq!(config.renderer, RendererConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let result = AppConfig::from_ron("(display: 3)");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
