//! Global constants for bird-core

/// Default number of radial segments for cylinder mesh generation
pub const CYLINDER_SEGMENTS: u32 = 32;

/// Default number of latitude segments for sphere mesh generation
pub const SPHERE_LAT_SEGMENTS: u32 = 16;

/// Default number of longitude segments for sphere mesh generation
pub const SPHERE_LON_SEGMENTS: u32 = 32;

/// Scene background color
pub const BACKGROUND_COLOR: u32 = 0xAAAAAA;

/// Linear fog settings (color, near, far)
pub mod fog {
    pub const COLOR: u32 = 0x808080;
    pub const NEAR: f32 = 3000.0;
    pub const FAR: f32 = 6000.0;
}

/// Light rig used by every assembled scene
pub mod lights {
    pub const AMBIENT_COLOR: u32 = 0x222222;
    pub const KEY_COLOR: u32 = 0xFFFFFF;
    pub const KEY_INTENSITY: f32 = 1.0;
    pub const KEY_POSITION: [f32; 3] = [200.0, 400.0, 500.0];
    pub const FILL_COLOR: u32 = 0xFFFFFF;
    pub const FILL_INTENSITY: f32 = 1.0;
    pub const FILL_POSITION: [f32; 3] = [-400.0, 200.0, -300.0];
}

/// Debug helper dimensions
pub mod helpers {
    /// Side length of the ground plane and of every grid
    pub const GROUND_SIZE: f32 = 1000.0;
    /// Grid divisions per unit of length
    pub const GRID_SCALE: f32 = 0.01;
    pub const AXIS_LENGTH: f32 = 300.0;
    pub const AXIS_RADIUS: f32 = 2.0;
    pub const AXIS_TESSELLATION: u32 = 50;
    pub const GROUND_COLOR: u32 = 0xFFFFFF;
    pub const GROUND_OPACITY: f32 = 0.5;
    /// Ground sits just below y = 0 so it does not z-fight with the base slab
    pub const GROUND_OFFSET: f32 = -0.2;
    pub const GRID_COLOR: u32 = 0x000000;
    pub const X_AXIS_COLOR: u32 = 0xFF0000;
    pub const Y_AXIS_COLOR: u32 = 0x00FF00;
    pub const Z_AXIS_COLOR: u32 = 0x0000FF;
}
