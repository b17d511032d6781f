//! Rendering constants
//!
//! Default values used when no configuration overrides them.

/// Camera default parameters
pub mod camera {
    /// Default field of view in degrees
    pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
    /// Default near clipping plane
    pub const DEFAULT_NEAR: f32 = 1.0;
    /// Default far clipping plane
    pub const DEFAULT_FAR: f32 = 40000.0;
    /// Default eye position
    pub const DEFAULT_POSITION: [f32; 3] = [-480.0, 659.0, -619.0];
    /// Default point the camera looks at
    pub const DEFAULT_TARGET: [f32; 3] = [4.0, 301.0, 92.0];
    /// Minimum pitch angle in degrees
    pub const MIN_PITCH_DEGREES: f32 = -89.0;
    /// Maximum pitch angle in degrees
    pub const MAX_PITCH_DEGREES: f32 = 89.0;
    /// Orbit sensitivity (radians per pixel)
    pub const ORBIT_SCALE: f32 = 0.005;
    /// Pan sensitivity multiplier
    pub const PAN_SCALE: f32 = 0.002;
    /// Zoom sensitivity multiplier
    pub const ZOOM_SCALE: f32 = 0.1;
    /// Minimum orbit distance
    pub const MIN_DISTANCE: f32 = 10.0;
    /// Maximum orbit distance
    pub const MAX_DISTANCE: f32 = 20000.0;
}

/// Canvas defaults, in logical pixels
pub mod canvas {
    /// Canvas width before the pixel ratio is applied
    pub const WIDTH: f32 = 846.0;
    /// Canvas height before the pixel ratio is applied
    pub const HEIGHT: f32 = 494.0;
}

/// Viewport rendering constants
pub mod viewport {
    /// Default MSAA sample count
    pub const SAMPLE_COUNT: u32 = 4;
    /// Color format of the offscreen target. The sRGB format encodes the
    /// linear shader output on store.
    pub const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
    /// Depth buffer format
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
}

/// Lighting limits
pub mod lighting {
    /// Directional lights packed into the light uniform
    pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;
}
