//! Camera state: pose, orientation, and a validated perspective projection.

use glam::{Mat4, Vec3};

use crate::error::SceneError;

/// Pitch limit when constrained; at exactly +/-90 degrees the look-at
/// basis degenerates against the world up.
const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Default movement speed in units per second.
const DEFAULT_MOVEMENT_SPEED: f32 = 2.5;

/// Default mouse look sensitivity in degrees per input unit.
const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;

/// Validated perspective projection parameters.
///
/// Construction rejects anything that would produce a singular or
/// nonsensical projection matrix, so a held value is always usable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Perspective {
    /// Validate and build perspective parameters.
    ///
    /// # Errors
    /// Rejects a field of view outside (0, 180) degrees, a non-positive or
    /// non-finite aspect ratio, and clip planes violating `0 < near < far`.
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Result<Self, SceneError> {
        if !(fov_y_degrees.is_finite() && fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
            return Err(SceneError::InvalidFov(fov_y_degrees));
        }
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(SceneError::InvalidAspect(aspect));
        }
        if !(near.is_finite() && far.is_finite() && near > 0.0 && far > near) {
            return Err(SceneError::InvalidClipPlanes { near, far });
        }
        Ok(Self {
            fov_y_degrees,
            aspect,
            near,
            far,
        })
    }

    /// Projection matrix (right-handed).
    ///
    /// No backend-specific convention is baked in here; a Vulkan-style Y
    /// flip belongs to the concrete draw sink. Picking unprojects through
    /// this exact matrix, so the two always agree.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Vertical field of view in degrees.
    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clip distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip distance.
    pub fn far(&self) -> f32 {
        self.far
    }
}

/// How the camera derives its view direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    /// Look from the camera position toward a fixed world-space target.
    LookAt {
        /// Target point in world space
        target: Vec3,
    },
    /// First-person yaw/pitch in degrees.
    ///
    /// Yaw rotates about world Y (yaw of -90 looks down -Z), pitch about
    /// the local X axis.
    FirstPerson {
        /// Yaw angle in degrees
        yaw: f32,
        /// Pitch angle in degrees
        pitch: f32,
    },
}

/// A camera with a validated projection and an orthonormal view basis.
///
/// The basis (`front`, `right`, `up`) is recomputed on every orientation
/// change: `right` is derived against the fixed world up, then `up`
/// against `right`, which keeps all three mutually orthogonal even at
/// steep pitch.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Movement speed in units per second
    pub movement_speed: f32,
    /// Mouse look sensitivity in degrees per input unit
    pub mouse_sensitivity: f32,
    orientation: Orientation,
    projection: Perspective,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
}

impl Camera {
    /// First-person camera at `position` with the given projection.
    pub fn first_person(position: Vec3, yaw: f32, pitch: f32, projection: Perspective) -> Self {
        Self::with_orientation(position, Orientation::FirstPerson { yaw, pitch }, projection)
    }

    /// Camera at `position` looking at a fixed world-space target.
    pub fn look_at(position: Vec3, target: Vec3, projection: Perspective) -> Self {
        Self::with_orientation(position, Orientation::LookAt { target }, projection)
    }

    fn with_orientation(position: Vec3, orientation: Orientation, projection: Perspective) -> Self {
        let mut camera = Self {
            position,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            orientation,
            projection,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::Y,
        };
        camera.update_vectors();
        camera
    }

    /// Current orientation mode.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current projection parameters.
    pub fn projection(&self) -> Perspective {
        self.projection
    }

    /// Replace the perspective parameters.
    ///
    /// Callers own keeping the aspect ratio in sync with the viewport;
    /// skipping that on a resize leaves the projection stale.
    ///
    /// # Errors
    /// Same validation as [`Perspective::new`].
    pub fn set_perspective(
        &mut self,
        fov_y_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<(), SceneError> {
        self.projection = Perspective::new(fov_y_degrees, aspect, near, far)?;
        Ok(())
    }

    /// Update the aspect ratio, keeping the other projection parameters.
    ///
    /// # Errors
    /// Rejects a non-positive or non-finite aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) -> Result<(), SceneError> {
        self.projection = Perspective::new(
            self.projection.fov_y_degrees,
            aspect,
            self.projection.near,
            self.projection.far,
        )?;
        Ok(())
    }

    /// Point the camera at a fixed world-space target; stays in look-at
    /// mode until the next mouse movement.
    pub fn set_target(&mut self, target: Vec3) {
        self.orientation = Orientation::LookAt { target };
        self.update_vectors();
    }

    /// View direction, unit length.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Camera-local right axis, unit length.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Camera-local up axis, unit length.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// View matrix: look-at from the position along the current front.
    pub fn view_matrix(&self) -> Mat4 {
        match self.orientation {
            Orientation::LookAt { target } => Mat4::look_at_rh(self.position, target, self.up),
            Orientation::FirstPerson { .. } => {
                Mat4::look_at_rh(self.position, self.position + self.front, self.up)
            }
        }
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Move along the camera-local axes.
    ///
    /// `direction` is a request vector in camera-local axes (x = right,
    /// y = up, z = forward), typically with each component in {-1, 0, +1};
    /// combinations are fine. The step is `movement_speed * delta_time`
    /// along each requested axis of the current basis.
    pub fn process_keyboard(&mut self, direction: Vec3, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        self.position += self.front * direction.z * velocity;
        self.position += self.right * direction.x * velocity;
        self.position += self.up * direction.y * velocity;
        // In look-at mode the front depends on the position.
        self.update_vectors();
    }

    /// Apply a pointer delta to yaw and pitch.
    ///
    /// Deltas are scaled by `mouse_sensitivity` (degrees per input unit)
    /// and added to yaw/pitch. With `constrain_pitch` the pitch is clamped
    /// to +/-89 degrees so the view basis never degenerates at the poles.
    /// A look-at camera converts its current front direction to yaw/pitch
    /// first and continues in first-person mode, so the view does not jump.
    pub fn process_mouse_movement(&mut self, delta_x: f32, delta_y: f32, constrain_pitch: bool) {
        let (mut yaw, mut pitch) = match self.orientation {
            Orientation::FirstPerson { yaw, pitch } => (yaw, pitch),
            Orientation::LookAt { .. } => front_to_yaw_pitch(self.front),
        };

        yaw += delta_x * self.mouse_sensitivity;
        pitch += delta_y * self.mouse_sensitivity;
        if constrain_pitch {
            pitch = pitch.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        }

        self.orientation = Orientation::FirstPerson { yaw, pitch };
        self.update_vectors();
    }

    /// Recompute the orthonormal basis from the current orientation.
    ///
    /// A degenerate front (look-at target sitting on the camera position,
    /// or an unconstrained pitch aligned with world up) keeps the previous
    /// basis rather than poisoning it with NaN.
    fn update_vectors(&mut self) {
        let front = match self.orientation {
            Orientation::FirstPerson { yaw, pitch } => {
                let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
                Vec3::new(
                    yaw.cos() * pitch.cos(),
                    pitch.sin(),
                    yaw.sin() * pitch.cos(),
                )
            }
            Orientation::LookAt { target } => target - self.position,
        };

        let Some(front) = front.try_normalize() else {
            return;
        };
        let Some(right) = front.cross(self.world_up).try_normalize() else {
            return;
        };
        self.front = front;
        self.right = right;
        self.up = right.cross(front).normalize();
    }
}

/// Decompose a unit front vector into yaw/pitch degrees.
fn front_to_yaw_pitch(front: Vec3) -> (f32, f32) {
    let pitch = front.y.clamp(-1.0, 1.0).asin().to_degrees();
    let yaw = front.z.atan2(front.x).to_degrees();
    (yaw, pitch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn projection() -> Perspective {
        Perspective::new(45.0, 16.0 / 9.0, 0.1, 100.0).expect("valid projection")
    }

    #[test]
    fn rejects_invalid_fov() {
        for fov in [0.0, -45.0, 180.0, 250.0, f32::NAN] {
            assert!(
                matches!(
                    Perspective::new(fov, 1.0, 0.1, 100.0),
                    Err(SceneError::InvalidFov(_))
                ),
                "fov {fov} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_invalid_aspect() {
        for aspect in [0.0, -1.5, f32::INFINITY] {
            assert!(matches!(
                Perspective::new(45.0, aspect, 0.1, 100.0),
                Err(SceneError::InvalidAspect(_))
            ));
        }
    }

    #[test]
    fn rejects_invalid_clip_planes() {
        for (near, far) in [(0.0, 100.0), (-1.0, 100.0), (10.0, 10.0), (10.0, 1.0)] {
            assert!(matches!(
                Perspective::new(45.0, 1.0, near, far),
                Err(SceneError::InvalidClipPlanes { .. })
            ));
        }
    }

    #[test]
    fn basis_is_orthonormal_across_yaw_and_pitch() {
        for yaw in [-180.0_f32, -90.0, -30.0, 0.0, 45.0, 120.0] {
            for pitch in [-85.0_f32, -45.0, 0.0, 30.0, 85.0] {
                let camera = Camera::first_person(Vec3::ZERO, yaw, pitch, projection());
                let (front, right, up) = (camera.front(), camera.right(), camera.up());

                assert!((front.length() - 1.0).abs() < EPSILON, "yaw {yaw} pitch {pitch}");
                assert!((right.length() - 1.0).abs() < EPSILON, "yaw {yaw} pitch {pitch}");
                assert!((up.length() - 1.0).abs() < EPSILON, "yaw {yaw} pitch {pitch}");
                assert!(front.dot(right).abs() < EPSILON, "yaw {yaw} pitch {pitch}");
                assert!(front.dot(up).abs() < EPSILON, "yaw {yaw} pitch {pitch}");
                assert!(right.dot(up).abs() < EPSILON, "yaw {yaw} pitch {pitch}");
            }
        }
    }

    #[test]
    fn yaw_minus_ninety_looks_down_negative_z() {
        let camera = Camera::first_person(Vec3::ZERO, -90.0, 0.0, projection());
        assert!((camera.front() - Vec3::NEG_Z).length() < EPSILON);
        assert!((camera.right() - Vec3::X).length() < EPSILON);
        assert!((camera.up() - Vec3::Y).length() < EPSILON);
    }

    #[test]
    fn constrained_pitch_never_exceeds_limit() {
        let mut camera = Camera::first_person(Vec3::ZERO, -90.0, 0.0, projection());
        for _ in 0..50 {
            camera.process_mouse_movement(0.0, 1000.0, true);
            let Orientation::FirstPerson { pitch, .. } = camera.orientation() else {
                panic!("camera should stay in first-person mode");
            };
            assert!(pitch <= PITCH_LIMIT_DEGREES);
        }
        // And symmetrically downward.
        for _ in 0..50 {
            camera.process_mouse_movement(0.0, -1000.0, true);
            let Orientation::FirstPerson { pitch, .. } = camera.orientation() else {
                panic!("camera should stay in first-person mode");
            };
            assert!(pitch >= -PITCH_LIMIT_DEGREES);
        }
    }

    #[test]
    fn keyboard_moves_along_the_basis() {
        let mut camera = Camera::first_person(Vec3::ZERO, -90.0, 0.0, projection());
        camera.movement_speed = 2.0;
        camera.process_keyboard(Vec3::new(0.0, 0.0, 1.0), 0.5);
        assert!((camera.position - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);

        camera.process_keyboard(Vec3::new(1.0, 1.0, 0.0), 0.5);
        assert!((camera.position - Vec3::new(1.0, 1.0, -1.0)).length() < EPSILON);
    }

    #[test]
    fn look_at_front_points_at_the_target() {
        let camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, projection());
        assert!((camera.front() - Vec3::NEG_Z).length() < EPSILON);
    }

    #[test]
    fn look_at_follows_position_when_moving() {
        let mut camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, projection());
        camera.process_keyboard(Vec3::new(1.0, 0.0, 0.0), 1.0);
        let expected = (Vec3::ZERO - camera.position).normalize();
        assert!((camera.front() - expected).length() < EPSILON);
    }

    #[test]
    fn mouse_movement_converts_look_at_to_first_person() {
        let mut camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, projection());
        let front_before = camera.front();
        camera.process_mouse_movement(0.0, 0.0, true);
        assert!(matches!(
            camera.orientation(),
            Orientation::FirstPerson { .. }
        ));
        // A zero delta must not jump the view.
        assert!((camera.front() - front_before).length() < EPSILON);
    }

    #[test]
    fn degenerate_look_at_target_keeps_previous_basis() {
        let mut camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, projection());
        let front_before = camera.front();
        camera.set_target(camera.position);
        assert_eq!(camera.front(), front_before);
        assert!(camera.front().is_finite());
    }

    #[test]
    fn view_matrix_inverse_translation_is_the_position() {
        let position = Vec3::new(3.0, 1.0, -2.0);
        let camera = Camera::first_person(position, -60.0, 20.0, projection());
        let recovered = camera.view_matrix().inverse().col(3).truncate();
        assert!((recovered - position).length() < 1e-4);
    }

    #[test]
    fn set_aspect_keeps_other_parameters() {
        let mut camera = Camera::first_person(Vec3::ZERO, -90.0, 0.0, projection());
        camera.set_aspect(2.0).expect("valid aspect");
        let projection = camera.projection();
        assert_eq!(projection.aspect(), 2.0);
        assert_eq!(projection.fov_y_degrees(), 45.0);
        assert_eq!(projection.near(), 0.1);
        assert_eq!(projection.far(), 100.0);
    }

    #[test]
    fn set_aspect_rejects_nonsense() {
        let mut camera = Camera::first_person(Vec3::ZERO, -90.0, 0.0, projection());
        assert!(camera.set_aspect(0.0).is_err());
        assert_eq!(camera.projection().aspect(), 16.0 / 9.0);
    }
}
