//! Blueprint dimensions of the drinking bird
//!
//! All lengths are in blueprint units and taken from the formal drawing of
//! the toy. Everything the layout builder places is derived from these.

/// Fixed dimensions of the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blueprint {
    /// Height of the spine cylinder
    pub body_length: f32,
    /// Height of the spine base (and of the bulb center) above the floor
    pub body_elevation: f32,
    pub spine_diameter: f32,
    pub bulb_diameter: f32,
    pub head_diameter: f32,
    pub brim_diameter: f32,
    pub brim_thickness: f32,
    /// Distance from the head center to the bottom of the brim
    pub brim_gap: f32,
    pub hat_diameter: f32,
    pub hat_height: f32,

    /// Foot length in front of the leg
    pub foot_front: f32,
    pub leg_width: f32,
    /// Foot length behind the leg
    pub foot_back: f32,
    pub base_height: f32,
    /// Lateral distance from the center plane to the inner face of a leg
    pub leg_offset: f32,
    /// Thickness of legs and feet
    pub frame_thickness: f32,
    pub foot_height: f32,
    /// Leg height above the top of the foot
    pub leg_height: f32,
}

impl Blueprint {
    /// The drinking bird as drawn in the reference blueprint
    pub const DRINKING_BIRD: Self = Self {
        body_length: 390.0,
        body_elevation: 160.0,
        spine_diameter: 48.0,
        bulb_diameter: 116.0,
        head_diameter: 104.0,
        brim_diameter: 142.0,
        brim_thickness: 10.0,
        brim_gap: 40.0,
        hat_diameter: 80.0,
        hat_height: 70.0,

        foot_front: 20.0,
        leg_width: 64.0,
        foot_back: 110.0,
        base_height: 4.0,
        leg_offset: 77.0,
        frame_thickness: 6.0,
        foot_height: 52.0,
        leg_height: 334.0,
    };

    /// Length of the base slab and the feet along X
    pub fn base_width(&self) -> f32 {
        self.foot_front + self.leg_width + self.foot_back
    }

    /// Depth of the base slab along Z
    pub fn base_depth(&self) -> f32 {
        2.0 * self.leg_offset
    }

    /// X center of the base and feet, so that the legs end up centered on the origin
    pub fn frame_center_x(&self) -> f32 {
        (self.foot_front + self.leg_width / 2.0) - self.base_width() / 2.0
    }

    /// Lateral (Z) center of the left leg and foot; the right side is mirrored
    pub fn frame_z(&self) -> f32 {
        self.leg_offset + self.frame_thickness / 2.0
    }

    /// Leg height measured from the floor
    pub fn full_leg_height(&self) -> f32 {
        self.leg_height + self.foot_height
    }

    /// Y of the top of the spine, where the head is centered
    pub fn spine_top(&self) -> f32 {
        self.body_elevation + self.body_length
    }

    /// Y of the bottom of the hat brim
    pub fn brim_base(&self) -> f32 {
        self.spine_top() + self.brim_gap
    }

    /// Y of the top of the hat, the highest point of the model
    pub fn hat_top(&self) -> f32 {
        self.brim_base() + self.brim_thickness + self.hat_height
    }
}

impl Default for Blueprint {
    fn default() -> Self {
        Self::DRINKING_BIRD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_dimensions() {
        let bp = Blueprint::DRINKING_BIRD;
        assert_eq!(bp.base_width(), 194.0);
        assert_eq!(bp.base_depth(), 154.0);
        assert_eq!(bp.frame_center_x(), -45.0);
        assert_eq!(bp.frame_z(), 80.0);
        assert_eq!(bp.full_leg_height(), 386.0);
    }

    #[test]
    fn test_vertical_stack() {
        let bp = Blueprint::default();
        assert_eq!(bp.spine_top(), 550.0);
        assert_eq!(bp.brim_base(), 590.0);
        assert_eq!(bp.hat_top(), 670.0);
    }
}
