//! Materials and colors

/// 24-bit sRGB color stored as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xFFFFFF);
    pub const BLACK: Self = Self(0x000000);

    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0xFF_FFFF)
    }

    /// sRGB channels in 0..=1
    pub fn to_srgb(self) -> [f32; 3] {
        let r = ((self.0 >> 16) & 0xFF) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xFF) as f32 / 255.0;
        let b = (self.0 & 0xFF) as f32 / 255.0;
        [r, g, b]
    }

    /// Linear-light channels, for shading in linear space
    pub fn to_linear(self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }

    pub fn to_linear_rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_linear();
        [r, g, b, alpha]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Shading model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    /// Diffuse-only lighting
    Lambert,
    /// Unlit, flat color
    Basic,
}

/// Paintable surface: shading model, color and opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub shading: Shading,
    pub color: Color,
    pub opacity: f32,
}

impl Material {
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

pub fn lambert(hex: u32) -> Material {
    Material {
        shading: Shading::Lambert,
        color: Color::from_hex(hex),
        opacity: 1.0,
    }
}

pub fn basic(hex: u32, opacity: f32) -> Material {
    Material {
        shading: Shading::Basic,
        color: Color::from_hex(hex),
        opacity: opacity.clamp(0.0, 1.0),
    }
}

/// Head and bulb (red)
pub fn sphere_material() -> Material {
    lambert(0xA00000)
}

/// Spine, brim and hat (blue)
pub fn cylinder_material() -> Material {
    lambert(0x0000D0)
}

/// Base, legs and feet (orange)
pub fn cube_material() -> Material {
    lambert(0xF07020)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels() {
        assert_eq!(Color::from_hex(0xFF0000).to_srgb(), [1.0, 0.0, 0.0]);
        assert_eq!(Color::from_hex(0x0000FF).to_srgb(), [0.0, 0.0, 1.0]);
        assert_eq!(Color::from_hex(0x1_00FF00), Color(0x00FF00));
    }

    #[test]
    fn test_linear_conversion() {
        assert_eq!(Color::WHITE.to_linear(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0]);
        let [r, _, _] = Color::from_hex(0x808080).to_linear();
        assert!((r - 0.2159).abs() < 0.001);
    }

    #[test]
    fn test_model_materials() {
        assert_eq!(sphere_material().color, Color(0xA00000));
        assert_eq!(cylinder_material().color, Color(0x0000D0));
        assert_eq!(cube_material().color, Color(0xF07020));
        assert_eq!(cube_material().shading, Shading::Lambert);
        assert!(!cube_material().is_transparent());
    }

    #[test]
    fn test_basic_clamps_opacity() {
        assert_eq!(basic(0xFFFFFF, 2.0).opacity, 1.0);
        assert!(basic(0xFFFFFF, 0.5).is_transparent());
    }
}
