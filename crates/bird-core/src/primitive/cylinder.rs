//! Cylinder and cone mesh generation (axis along Y)

use std::f32::consts::PI;

use super::MeshData;

/// Generate a (possibly tapered) cylinder along the Y axis
///
/// A cone is a cylinder with `radius_top == 0`. Caps with zero radius and all
/// caps of an open-ended cylinder are skipped.
pub fn generate_cylinder_mesh_with_segments(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
    open_ended: bool,
) -> MeshData {
    let segments = segments.max(3);
    let half_height = height / 2.0;
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Side normals lean outward by the taper slope
    let slope = if height != 0.0 {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };

    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        let (sin, cos) = theta.sin_cos();
        let normal = glam::Vec3::new(cos, slope, sin).normalize_or_zero().to_array();

        vertices.push([radius_bottom * cos, -half_height, radius_bottom * sin]);
        normals.push(normal);

        vertices.push([radius_top * cos, half_height, radius_top * sin]);
        normals.push(normal);
    }

    for i in 0..segments {
        let bottom = i * 2;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;
        indices.extend_from_slice(&[bottom, top, next_bottom]);
        indices.extend_from_slice(&[top, next_top, next_bottom]);
    }

    if open_ended {
        return (vertices, normals, indices);
    }

    if radius_top > 0.0 {
        add_cap(
            &mut vertices,
            &mut normals,
            &mut indices,
            radius_top,
            half_height,
            segments,
        );
    }

    if radius_bottom > 0.0 {
        add_cap(
            &mut vertices,
            &mut normals,
            &mut indices,
            radius_bottom,
            -half_height,
            segments,
        );
    }

    (vertices, normals, indices)
}

/// Append a disc cap at height `y`, facing away from the cylinder center
fn add_cap(
    vertices: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    indices: &mut Vec<u32>,
    radius: f32,
    y: f32,
    segments: u32,
) {
    let facing_up = y > 0.0;
    let normal = if facing_up {
        [0.0, 1.0, 0.0]
    } else {
        [0.0, -1.0, 0.0]
    };

    let center = vertices.len() as u32;
    vertices.push([0.0, y, 0.0]);
    normals.push(normal);

    let rim_start = vertices.len() as u32;
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        let (sin, cos) = theta.sin_cos();
        vertices.push([radius * cos, y, radius * sin]);
        normals.push(normal);
    }

    for i in 0..segments {
        let rim = rim_start + i;
        if facing_up {
            indices.extend_from_slice(&[center, rim + 1, rim]);
        } else {
            indices.extend_from_slice(&[center, rim, rim + 1]);
        }
    }
}
