//! Geometry descriptors
//!
//! A [`Geometry`] is an immutable description of a primitive shape. It only
//! turns into vertex data when [`Geometry::mesh`] is called, so the layout
//! builder can stay cheap and comparable.

use crate::constants::{CYLINDER_SEGMENTS, SPHERE_LAT_SEGMENTS, SPHERE_LON_SEGMENTS};
use crate::primitive::{
    MeshData, generate_box_mesh, generate_cylinder_mesh_with_segments, generate_plane_mesh,
    generate_sphere_mesh_with_segments,
};

/// Primitive shape with its dimensions and tessellation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        open_ended: bool,
    },
    Cube {
        width: f32,
        height: f32,
        depth: f32,
    },
    Plane {
        width: f32,
        depth: f32,
    },
}

impl Geometry {
    /// Half of the extent along Y
    pub fn half_height(&self) -> f32 {
        match *self {
            Geometry::Sphere { radius, .. } => radius,
            Geometry::Cylinder { height, .. } | Geometry::Cube { height, .. } => height / 2.0,
            Geometry::Plane { .. } => 0.0,
        }
    }

    /// Tessellate into vertices, normals and indices centered on the origin
    pub fn mesh(&self) -> MeshData {
        match *self {
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => generate_sphere_mesh_with_segments(radius, height_segments, width_segments),
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                open_ended,
            } => generate_cylinder_mesh_with_segments(
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                open_ended,
            ),
            Geometry::Cube {
                width,
                height,
                depth,
            } => generate_box_mesh([width, height, depth]),
            Geometry::Plane { width, depth } => generate_plane_mesh(width, depth),
        }
    }
}

/// Sphere with the default 32 x 16 tessellation
pub fn sphere(radius: f32) -> Geometry {
    Geometry::Sphere {
        radius,
        width_segments: SPHERE_LON_SEGMENTS,
        height_segments: SPHERE_LAT_SEGMENTS,
    }
}

/// Closed cylinder with the default 32 radial segments
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32) -> Geometry {
    cylinder_with_segments(radius_top, radius_bottom, height, CYLINDER_SEGMENTS, false)
}

pub fn cylinder_with_segments(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
    open_ended: bool,
) -> Geometry {
    Geometry::Cylinder {
        radius_top,
        radius_bottom,
        height,
        radial_segments,
        open_ended,
    }
}

pub fn cube(width: f32, height: f32, depth: f32) -> Geometry {
    Geometry::Cube {
        width,
        height,
        depth,
    }
}

pub fn plane(width: f32, depth: f32) -> Geometry {
    Geometry::Plane { width, depth }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::mesh_extents;

    #[test]
    fn test_factories_use_default_tessellation() {
        assert_eq!(
            sphere(52.0),
            Geometry::Sphere {
                radius: 52.0,
                width_segments: 32,
                height_segments: 16
            }
        );
        match cylinder(71.0, 71.0, 10.0) {
            Geometry::Cylinder {
                radial_segments,
                open_ended,
                ..
            } => {
                assert_eq!(radial_segments, 32);
                assert!(!open_ended);
            }
            other => panic!("expected cylinder, got {other:?}"),
        }
    }

    #[test]
    fn test_mesh_matches_descriptor() {
        let (vertices, _, _) = cube(64.0, 386.0, 6.0).mesh();
        let (min, max) = mesh_extents(&vertices);
        assert_eq!(max[1] - min[1], 386.0);

        let (vertices, _, _) = sphere(58.0).mesh();
        assert_eq!(vertices.len(), 17 * 33);
    }

    #[test]
    fn test_half_height() {
        assert_eq!(sphere(52.0).half_height(), 52.0);
        assert_eq!(cylinder(40.0, 40.0, 70.0).half_height(), 35.0);
        assert_eq!(cube(1.0, 4.0, 1.0).half_height(), 2.0);
        assert_eq!(plane(10.0, 10.0).half_height(), 0.0);
    }
}
