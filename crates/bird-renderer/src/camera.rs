//! Orbit camera for the 3D viewport (Y up)

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::constants::camera as constants;

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Projection * view
    pub view_proj: [[f32; 4]; 4],
    /// World to view space
    pub view: [[f32; 4]; 4],
    /// View to clip space
    pub proj: [[f32; 4]; 4],
    /// Eye position (w = 1)
    pub eye: [f32; 4],
}

/// Perspective camera orbiting around a target point
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Point the camera looks at and orbits around
    pub target: Vec3,
    /// World up vector
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Width / height
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    // Orbit state, derived from position and target
    /// Angle around the Y axis, measured from +X toward +Z
    pub yaw: f32,
    /// Elevation above the XZ plane
    pub pitch: f32,
    /// Distance from target to eye
    pub distance: f32,
}

impl Camera {
    /// Create a camera at the default viewpoint
    pub fn new(aspect: f32) -> Self {
        Self::from_position_target(
            Vec3::from_array(constants::DEFAULT_POSITION),
            Vec3::from_array(constants::DEFAULT_TARGET),
            constants::DEFAULT_FOV_DEGREES,
            aspect,
        )
    }

    /// Create a camera at `position` looking at `target`
    pub fn from_position_target(
        position: Vec3,
        target: Vec3,
        fov_degrees: f32,
        aspect: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            target,
            up: Vec3::Y,
            fov: fov_degrees.to_radians(),
            aspect,
            near: constants::DEFAULT_NEAR,
            far: constants::DEFAULT_FAR,
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
        };
        camera.update_orbit_from_position();
        camera
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(
            constants::MIN_PITCH_DEGREES.to_radians(),
            constants::MAX_PITCH_DEGREES.to_radians(),
        );
        self.update_position_from_orbit();
    }

    /// Pan the camera (move target in the view plane)
    pub fn pan(&mut self, delta_x: f32, delta_y: f32, sensitivity: f32) {
        let forward = (self.target - self.position).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();

        let scale = self.distance * sensitivity;
        self.target += right * (-delta_x * scale) + up * (delta_y * scale);
        self.update_position_from_orbit();
    }

    /// Zoom the camera; positive `delta` moves closer
    pub fn zoom(&mut self, delta: f32, sensitivity: f32) {
        self.distance = (self.distance * (1.0 - delta * sensitivity))
            .clamp(constants::MIN_DISTANCE, constants::MAX_DISTANCE);
        self.update_position_from_orbit();
    }

    /// Get field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Set near clipping plane
    pub fn set_near(&mut self, near: f32) {
        self.near = near.max(0.001);
    }

    /// Set far clipping plane
    pub fn set_far(&mut self, far: f32) {
        self.far = far.max(self.near + 1.0);
    }

    fn update_orbit_from_position(&mut self) {
        let offset = self.position - self.target;
        self.distance = offset.length().max(f32::EPSILON);
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin();
        self.yaw = offset.z.atan2(offset.x);
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.sin();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        let view_proj = proj * view;

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-2);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-2);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-2);
    }

    #[test]
    fn test_default_viewpoint() {
        let camera = Camera::new(846.0 / 494.0);
        assert_eq!(camera.position, Vec3::new(-480.0, 659.0, -619.0));
        assert_eq!(camera.target, Vec3::new(4.0, 301.0, 92.0));
        assert_eq!(camera.up, Vec3::Y);
        assert_relative_eq!(camera.fov_degrees(), 45.0, epsilon = 1e-4);
        assert_eq!(camera.near, 1.0);
        assert_eq!(camera.far, 40000.0);
    }

    #[test]
    fn test_orbit_state_reproduces_position() {
        let mut camera = Camera::new(1.0);
        let position = camera.position;
        // A zero orbit recomputes the position from yaw/pitch/distance
        camera.orbit(0.0, 0.0);
        assert_vec_eq(camera.position, position);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = Camera::new(1.0);
        let distance = camera.position.distance(camera.target);
        camera.orbit(0.7, -0.2);
        assert_relative_eq!(
            camera.position.distance(camera.target),
            distance,
            epsilon = 1e-2
        );
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch <= 89.0_f32.to_radians());
        assert!(camera.position.y > camera.target.y);
    }

    #[test]
    fn test_zoom_changes_distance() {
        let mut camera = Camera::new(1.0);
        let before = camera.distance;
        camera.zoom(1.0, 0.1);
        assert_relative_eq!(camera.distance, before * 0.9, epsilon = 1e-2);

        camera.zoom(-1000.0, 0.1);
        assert_eq!(camera.distance, constants::MAX_DISTANCE);
    }

    #[test]
    fn test_pan_moves_target_and_eye_together() {
        let mut camera = Camera::new(1.0);
        let offset = camera.position - camera.target;
        camera.pan(10.0, 5.0, 0.002);
        assert_ne!(camera.target, Vec3::new(4.0, 301.0, 92.0));
        assert_vec_eq(camera.position - camera.target, offset);
    }

    #[test]
    fn test_uniform_eye() {
        let camera = Camera::new(1.0);
        let uniform = camera.uniform();
        assert_eq!(uniform.eye, [-480.0, 659.0, -619.0, 1.0]);
    }
}
