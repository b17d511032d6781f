//! Debug helpers: ground plane, reference grids and coordinate axes

use glam::{Quat, Vec3};

use crate::constants::helpers as constants;
use crate::geometry::{cylinder_with_segments, plane};
use crate::material::{Color, basic, lambert};
use crate::placement::{Group, Placement};
use crate::scene::LineSet;

/// Which reference grid to draw, named after the axis the GUI toggle uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridOrientation {
    /// Grid in the XZ plane (the floor)
    X,
    /// Grid in the YZ plane
    Y,
    /// Grid in the XY plane
    Z,
}

impl GridOrientation {
    fn name(self) -> &'static str {
        match self {
            GridOrientation::X => "xz grid",
            GridOrientation::Y => "yz grid",
            GridOrientation::Z => "xy grid",
        }
    }

    /// Map in-plane coordinates to world space
    fn to_world(self, u: f32, v: f32) -> Vec3 {
        match self {
            GridOrientation::X => Vec3::new(u, 0.0, v),
            GridOrientation::Y => Vec3::new(0.0, u, v),
            GridOrientation::Z => Vec3::new(u, v, 0.0),
        }
    }
}

/// Semi-transparent square ground plane of side `size`
pub fn ground(size: f32) -> Placement {
    Placement::new(
        "ground",
        Group::Helper,
        plane(size, size),
        basic(constants::GROUND_COLOR, constants::GROUND_OPACITY),
        Vec3::new(0.0, constants::GROUND_OFFSET, 0.0),
    )
}

/// Square grid of side `size` centered on the origin with `size * scale` divisions
pub fn grid(size: f32, scale: f32, orientation: GridOrientation) -> LineSet {
    let divisions = ((size * scale).round() as u32).max(1);
    let step = size / divisions as f32;
    let half = size / 2.0;

    let mut segments = Vec::with_capacity(2 * (divisions as usize + 1));
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        segments.push([
            orientation.to_world(-half, offset),
            orientation.to_world(half, offset),
        ]);
        segments.push([
            orientation.to_world(offset, -half),
            orientation.to_world(offset, half),
        ]);
    }

    LineSet {
        name: orientation.name(),
        color: Color::from_hex(constants::GRID_COLOR),
        segments,
    }
}

/// Red/green/blue shafts with arrow heads along +X, +Y and +Z
pub fn axes(length: f32, radius: f32, tessellation: u32) -> Vec<Placement> {
    let arrow_size = 4.0 * radius;
    let shaft = cylinder_with_segments(radius, radius, length, tessellation, true);
    let arrow = cylinder_with_segments(0.0, arrow_size, arrow_size, tessellation, true);

    let axes: [(&'static str, &'static str, Vec3, u32); 3] = [
        ("x axis", "x arrow", Vec3::X, constants::X_AXIS_COLOR),
        ("y axis", "y arrow", Vec3::Y, constants::Y_AXIS_COLOR),
        ("z axis", "z arrow", Vec3::Z, constants::Z_AXIS_COLOR),
    ];

    let mut placements = Vec::with_capacity(6);
    for (shaft_name, arrow_name, direction, color) in axes {
        let rotation = Quat::from_rotation_arc(Vec3::Y, direction);
        let material = lambert(color);

        placements.push(
            Placement::new(
                shaft_name,
                Group::Helper,
                shaft,
                material,
                direction * (length / 2.0 - 1.0),
            )
            .with_rotation(rotation),
        );
        placements.push(
            Placement::new(
                arrow_name,
                Group::Helper,
                arrow,
                material,
                direction * (length - 1.0 + arrow_size / 2.0),
            )
            .with_rotation(rotation),
        );
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Shading;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_lines() {
        let lines = grid(1000.0, 0.01, GridOrientation::X);
        // 11 lines in each direction
        assert_eq!(lines.segments.len(), 22);
        for [a, b] in &lines.segments {
            assert_eq!(a.y, 0.0);
            assert_eq!(b.y, 0.0);
            assert_relative_eq!(a.distance(*b), 1000.0);
        }
    }

    #[test]
    fn test_grid_planes() {
        let yz = grid(1000.0, 0.01, GridOrientation::Y);
        assert!(yz.segments.iter().flatten().all(|p| p.x == 0.0));
        assert_eq!(yz.name, "yz grid");

        let xy = grid(1000.0, 0.01, GridOrientation::Z);
        assert!(xy.segments.iter().flatten().all(|p| p.z == 0.0));
        assert_eq!(xy.name, "xy grid");
    }

    #[test]
    fn test_ground() {
        let ground = ground(1000.0);
        assert_eq!(ground.material.shading, Shading::Basic);
        assert!(ground.material.is_transparent());
        assert!(ground.position.y < 0.0);
    }

    #[test]
    fn test_axes_point_along_each_axis() {
        let axes = axes(300.0, 2.0, 50);
        assert_eq!(axes.len(), 6);

        let x_axis = &axes[0];
        assert_relative_eq!(x_axis.position.x, 149.0);
        let tip = x_axis.rotation * Vec3::Y;
        assert_relative_eq!(tip.x, 1.0, epsilon = 1e-6);

        let z_arrow = &axes[5];
        assert_relative_eq!(z_arrow.position.z, 303.0);
        let tip = z_arrow.rotation * Vec3::Y;
        assert_relative_eq!(tip.z, 1.0, epsilon = 1e-6);

        assert_eq!(axes[2].rotation, Quat::IDENTITY);
        assert_eq!(axes[2].material.color, Color(0x00FF00));
    }
}
