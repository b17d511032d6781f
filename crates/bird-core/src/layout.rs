//! Layout builder for the drinking bird
//!
//! Pure functions of a [`Blueprint`]: every call returns the same placements.
//! Vertical positions are stacked additively, support -> body -> bulb -> head
//! -> brim -> hat, so the pieces touch without gaps.

use glam::Vec3;

use crate::blueprint::Blueprint;
use crate::geometry::{cube, cylinder, sphere};
use crate::material::{cube_material, cylinder_material, sphere_material};
use crate::placement::{Group, Placement};

/// Base slab, plus a leg and a foot on each side of the center plane
///
/// The left side sits at +Z, the right side mirrors it at -Z.
pub fn build_support(bp: &Blueprint) -> Vec<Placement> {
    let material = cube_material();
    let center_x = bp.frame_center_x();
    let side_z = bp.frame_z();

    let base = Placement::new(
        "base",
        Group::Support,
        cube(bp.base_width(), bp.base_height, bp.base_depth()),
        material,
        Vec3::new(center_x, bp.base_height / 2.0, 0.0),
    );

    let foot = cube(bp.base_width(), bp.foot_height, bp.frame_thickness);
    let leg = cube(bp.leg_width, bp.full_leg_height(), bp.frame_thickness);
    let foot_y = bp.foot_height / 2.0;
    let leg_y = bp.full_leg_height() / 2.0;

    vec![
        base,
        Placement::new(
            "left foot",
            Group::Support,
            foot,
            material,
            Vec3::new(center_x, foot_y, side_z),
        ),
        Placement::new(
            "left leg",
            Group::Support,
            leg,
            material,
            Vec3::new(0.0, leg_y, side_z),
        ),
        Placement::new(
            "right foot",
            Group::Support,
            foot,
            material,
            Vec3::new(center_x, foot_y, -side_z),
        ),
        Placement::new(
            "right leg",
            Group::Support,
            leg,
            material,
            Vec3::new(0.0, leg_y, -side_z),
        ),
    ]
}

/// Spine cylinder standing on the support, and the bulb at its base
pub fn build_body(bp: &Blueprint) -> Vec<Placement> {
    let spine_radius = bp.spine_diameter / 2.0;

    vec![
        Placement::new(
            "spine",
            Group::Body,
            cylinder(spine_radius, spine_radius, bp.body_length),
            cylinder_material(),
            Vec3::new(0.0, bp.body_elevation + bp.body_length / 2.0, 0.0),
        ),
        Placement::new(
            "bulb",
            Group::Body,
            sphere(bp.bulb_diameter / 2.0),
            sphere_material(),
            Vec3::new(0.0, bp.body_elevation, 0.0),
        ),
    ]
}

/// Head on top of the spine, brim above it and the hat on the brim
pub fn build_head(bp: &Blueprint) -> Vec<Placement> {
    let brim_radius = bp.brim_diameter / 2.0;
    let hat_radius = bp.hat_diameter / 2.0;

    vec![
        Placement::new(
            "head",
            Group::Head,
            sphere(bp.head_diameter / 2.0),
            sphere_material(),
            Vec3::new(0.0, bp.spine_top(), 0.0),
        ),
        Placement::new(
            "brim",
            Group::Head,
            cylinder(brim_radius, brim_radius, bp.brim_thickness),
            cylinder_material(),
            Vec3::new(0.0, bp.brim_base() + bp.brim_thickness / 2.0, 0.0),
        ),
        Placement::new(
            "hat",
            Group::Head,
            cylinder(hat_radius, hat_radius, bp.hat_height),
            cylinder_material(),
            Vec3::new(
                0.0,
                bp.brim_base() + bp.brim_thickness + bp.hat_height / 2.0,
                0.0,
            ),
        ),
    ]
}

/// Every placement of the model: support, body, then head
pub fn build_drinking_bird(bp: &Blueprint) -> Vec<Placement> {
    let mut placements = build_support(bp);
    placements.extend(build_body(bp));
    placements.extend(build_head(bp));
    placements
}
