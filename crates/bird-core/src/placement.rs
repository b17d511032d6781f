//! Primitive placements: a shape, its material and where it sits

use glam::{Mat4, Quat, Vec3};

use crate::geometry::Geometry;
use crate::material::Material;

/// Logical group a placement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Base, legs and feet
    Support,
    /// Spine and bulb
    Body,
    /// Head, brim and hat
    Head,
    /// Ground plane and axis arrows
    Helper,
}

/// A single drawable shape instance with resolved geometry, material and pose
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub name: &'static str,
    pub group: Group,
    pub geometry: Geometry,
    pub material: Material,
    /// World position of the geometry's center
    pub position: Vec3,
    pub rotation: Quat,
}

impl Placement {
    pub fn new(
        name: &'static str,
        group: Group,
        geometry: Geometry,
        material: Material,
        position: Vec3,
    ) -> Self {
        Self {
            name,
            group,
            geometry,
            material,
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Model matrix (rotation, then translation)
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Y of the top of the shape (ignores rotation)
    pub fn top(&self) -> f32 {
        self.position.y + self.geometry.half_height()
    }

    /// Y of the bottom of the shape (ignores rotation)
    pub fn bottom(&self) -> f32 {
        self.position.y - self.geometry.half_height()
    }
}
