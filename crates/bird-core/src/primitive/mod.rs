//! Primitive mesh generation
//!
//! Generates vertices, normals, and indices for basic shapes, all centered on
//! their own origin with Y up:
//! - Box (rectangular prism) and horizontal plane
//! - Cylinder / cone (axis along Y, optional end caps)
//! - Sphere (UV sphere, poles on Y)

mod box_mesh;
mod cylinder;
mod sphere;

pub use box_mesh::{generate_box_mesh, generate_plane_mesh};
pub use cylinder::generate_cylinder_mesh_with_segments;
pub use sphere::generate_sphere_mesh_with_segments;

/// Mesh data: vertices, normals, and triangle indices
pub type MeshData = (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<u32>);

/// Axis-aligned extents (min, max) of a vertex list
pub fn mesh_extents(vertices: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    if vertices.is_empty() {
        return ([0.0; 3], [0.0; 3]);
    }

    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for v in vertices {
        for i in 0..3 {
            min[i] = min[i].min(v[i]);
            max[i] = max[i].max(v[i]);
        }
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_of(vertices: &[[f32; 3]]) -> [f32; 3] {
        let (min, max) = mesh_extents(vertices);
        [max[0] - min[0], max[1] - min[1], max[2] - min[2]]
    }

    #[test]
    fn test_box_mesh() {
        let (vertices, normals, indices) = generate_box_mesh([1.0, 1.0, 1.0]);
        assert_eq!(vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(normals.len(), 24);
        assert_eq!(indices.len(), 36); // 6 faces * 2 triangles * 3 indices
    }

    #[test]
    fn test_box_dimensions() {
        let (vertices, _, _) = generate_box_mesh([194.0, 4.0, 154.0]);
        let size = size_of(&vertices);
        assert!((size[0] - 194.0).abs() < 0.001);
        assert!((size[1] - 4.0).abs() < 0.001);
        assert!((size[2] - 154.0).abs() < 0.001);
    }

    #[test]
    fn test_box_normals_point_outward() {
        let (vertices, normals, _) = generate_box_mesh([2.0, 2.0, 2.0]);
        for (v, n) in vertices.iter().zip(&normals) {
            let dot = v[0] * n[0] + v[1] * n[1] + v[2] * n[2];
            assert!(dot > 0.0);
        }
    }

    #[test]
    fn test_plane_mesh() {
        let (vertices, normals, indices) = generate_plane_mesh(1000.0, 1000.0);
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        assert!(normals.iter().all(|n| *n == [0.0, 1.0, 0.0]));
        assert_eq!(size_of(&vertices), [1000.0, 0.0, 1000.0]);
    }

    #[test]
    fn test_cylinder_mesh() {
        let (vertices, normals, indices) =
            generate_cylinder_mesh_with_segments(0.5, 0.5, 1.0, 32, false);
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len(), normals.len());
        assert!(!indices.is_empty());
        assert!(indices.len() % 3 == 0);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn test_cylinder_runs_along_y() {
        let (vertices, _, _) = generate_cylinder_mesh_with_segments(24.0, 24.0, 390.0, 32, false);
        let size = size_of(&vertices);
        assert!((size[0] - 48.0).abs() < 0.01);
        assert!((size[1] - 390.0).abs() < 0.01);
        assert!((size[2] - 48.0).abs() < 0.01);
    }

    #[test]
    fn test_open_cone_has_no_caps() {
        let segments = 8;
        let (vertices, _, indices) =
            generate_cylinder_mesh_with_segments(0.0, 8.0, 8.0, segments, true);
        assert_eq!(vertices.len() as u32, (segments + 1) * 2);
        assert_eq!(indices.len() as u32, segments * 6);

        let closed = generate_cylinder_mesh_with_segments(0.0, 8.0, 8.0, segments, false);
        // Only the bottom cap is added for a cone
        assert_eq!(closed.2.len() as u32, segments * 6 + segments * 3);
    }

    #[test]
    fn test_sphere_mesh() {
        let (vertices, normals, indices) = generate_sphere_mesh_with_segments(1.0, 16, 32);
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len(), normals.len());
        assert!(!indices.is_empty());
        assert!(indices.len() % 3 == 0);
    }

    #[test]
    fn test_sphere_poles_on_y() {
        let (vertices, _, _) = generate_sphere_mesh_with_segments(58.0, 16, 32);
        assert_eq!(vertices.len(), 17 * 33);
        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        assert!((first[1] - 58.0).abs() < 0.001);
        assert!((last[1] + 58.0).abs() < 0.001);
    }

    #[test]
    fn test_extents_of_empty_mesh() {
        assert_eq!(mesh_extents(&[]), ([0.0; 3], [0.0; 3]));
    }
}
