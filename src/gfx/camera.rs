//! Camera abstraction producing a view matrix.
//!
//! The camera holds a position and three Euler angles and keeps a cached
//! view matrix that is recomputed synchronously on every write, so a
//! render driver can read [`Camera::matrix`] at any point in a frame.
//!
//! The view matrix expresses the camera's own movement as the inverse
//! motion of the world: the translation is negated and each axis
//! rotation enters with its angle negated. Angles are degrees, matching
//! every other rotation field in the kernel.

use crate::math::Mat4;

/// A position/rotation pair with a cached view matrix.
#[derive(Clone, Debug)]
pub struct Camera {
    position: [f32; 3],
    rotation: [f32; 3],
    matrix: Mat4,
}

impl Camera {
    /// Creates a camera at the origin with no rotation.
    pub fn new() -> Self {
        let mut camera = Self {
            position: [0.0; 3],
            rotation: [0.0; 3],
            matrix: Mat4::identity(),
        };
        camera.update_matrix();
        camera
    }

    /// The camera's world position.
    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    /// The camera's Euler rotation in degrees.
    pub fn rotation(&self) -> [f32; 3] {
        self.rotation
    }

    /// Moves the camera, synchronously recomputing the view matrix.
    pub fn set_position(&mut self, position: [f32; 3]) {
        self.position = position;
        self.update_matrix();
    }

    /// Rotates the camera (Euler degrees), synchronously recomputing the
    /// view matrix.
    pub fn set_rotation(&mut self, rotation: [f32; 3]) {
        self.rotation = rotation;
        self.update_matrix();
    }

    /// The current view matrix.
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Points the camera at a target position: pitch from the vertical
    /// displacement, yaw from the horizontal displacement. Roll is left
    /// at zero.
    pub fn look_at(&mut self, target: [f32; 3]) {
        let dx = target[0] - self.position[0];
        let dy = target[1] - self.position[1];
        let dz = target[2] - self.position[2];

        let pitch = dy.atan2((dx * dx + dz * dz).sqrt()).to_degrees();
        let yaw = (-dx).atan2(-dz).to_degrees();
        self.set_rotation([pitch, yaw, 0.0]);
    }

    fn update_matrix(&mut self) {
        let [x, y, z] = self.position;
        let [rx, ry, rz] = self.rotation;

        // Inverse of the camera's own transform: negated translation,
        // negated rotation angles.
        let translation = Mat4::translation(-x, -y, -z);
        let rotation_x = Mat4::rotation(-rx, 1.0, 0.0, 0.0);
        let rotation_y = Mat4::rotation(-ry, 0.0, 1.0, 0.0);
        let rotation_z = Mat4::rotation(-rz, 0.0, 0.0, 1.0);

        let rotation = rotation_x.multiply(&rotation_y).multiply(&rotation_z);
        self.matrix = translation.multiply(&rotation);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
