//! Transform component for scene objects.

use glam::{Mat4, Quat, Vec3};

use crate::ray::Aabb;

/// Position, rotation, and scale of one scene object.
///
/// Rotation is stored as Euler angles in degrees: pitch about X, yaw about
/// Y, roll about Z. The model matrix applies yaw outermost (`Ry * Rx * Rz`);
/// swapping that order changes the rotated axes for any combination of
/// non-zero angles, so it is part of the contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Euler angles in degrees (pitch = X, yaw = Y, roll = Z)
    pub rotation: Vec3,
    /// Per-axis scale factor
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a transform at the origin with unit scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given Euler rotation in degrees.
    pub fn with_rotation_degrees(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation as a quaternion, yaw-pitch-roll order.
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_rotation_y(self.rotation.y.to_radians())
            * Quat::from_rotation_x(self.rotation.x.to_radians())
            * Quat::from_rotation_z(self.rotation.z.to_radians())
    }

    /// Model matrix `T * R * S`.
    ///
    /// Always succeeds. Zero scale is legal and yields a singular matrix;
    /// callers that need an inverse must handle that themselves.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
    }

    /// Axis-aligned pick bounds, `position ± scale / 2`.
    ///
    /// Rotation is ignored: pick boxes stay axis-aligned even for rotated
    /// objects. A zero scale component produces a flat slab on that axis,
    /// which is still a valid box.
    pub fn bounding_box(&self) -> Aabb {
        let half_extents = self.scale.abs() * 0.5;
        Aabb::new(self.position - half_extents, self.position + half_extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn mat4_approx_eq(a: Mat4, b: Mat4) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() < EPSILON)
    }

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn unrotated_unit_scale_is_pure_translation() {
        let position = Vec3::new(3.0, -2.0, 7.5);
        let t = Transform::new().with_position(position);
        assert_eq!(t.matrix(), Mat4::from_translation(position));
    }

    #[test]
    fn rotation_composes_yaw_pitch_roll() {
        let t = Transform::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation_degrees(Vec3::new(30.0, 45.0, 60.0))
            .with_scale(Vec3::new(1.0, 2.0, 0.5));

        // T * Ry * Rx * Rz * S, spelled out matrix by matrix.
        let expected = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_rotation_y(45.0_f32.to_radians())
            * Mat4::from_rotation_x(30.0_f32.to_radians())
            * Mat4::from_rotation_z(60.0_f32.to_radians())
            * Mat4::from_scale(Vec3::new(1.0, 2.0, 0.5));

        assert!(
            mat4_approx_eq(t.matrix(), expected),
            "expected {expected:?}, got {:?}",
            t.matrix()
        );
    }

    #[test]
    fn yaw_is_applied_outermost() {
        // Yaw and pitch both 90 degrees: pitch (about X) leaves +X alone,
        // then the outer yaw carries it to -Z.
        let t = Transform::new().with_rotation_degrees(Vec3::new(90.0, 90.0, 0.0));
        let rotated = t.rotation_quat() * Vec3::X;
        assert!((rotated - Vec3::NEG_Z).length() < EPSILON, "got {rotated:?}");
    }

    #[test]
    fn zero_scale_is_legal_but_singular() {
        let t = Transform::new().with_scale(Vec3::ZERO);
        let matrix = t.matrix();
        assert_eq!(matrix.determinant(), 0.0);
        assert!(matrix.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn bounding_box_is_position_plus_minus_half_scale() {
        let t = Transform::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::new(2.0, 4.0, 6.0));
        let aabb = t.bounding_box();
        assert_eq!(aabb.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn bounding_box_ignores_rotation() {
        let t = Transform::new().with_scale(Vec3::new(2.0, 1.0, 1.0));
        let rotated = t.with_rotation_degrees(Vec3::new(0.0, 90.0, 0.0));
        assert_eq!(t.bounding_box(), rotated.bounding_box());
    }

    #[test]
    fn flat_bounding_box_from_zero_scale_axis() {
        let t = Transform::new().with_scale(Vec3::new(1.0, 0.0, 1.0));
        let aabb = t.bounding_box();
        assert_eq!(aabb.min.y, aabb.max.y);
    }
}
