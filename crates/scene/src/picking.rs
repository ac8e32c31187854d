//! Screen-space object picking.
//!
//! Converts a pointer position into a world-space ray and resolves the
//! closest object whose bounds the ray enters.

use glam::Vec4;

use crate::camera::Camera;
use crate::ray::Ray;
use crate::transform::Transform;

/// A resolved pick: which object, and how far along the ray it was hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    /// Index of the object in the registry it was picked from
    pub index: usize,
    /// Parametric entry distance along the (unit-length) ray direction
    pub distance: f32,
}

/// Cast a world-space ray from a pointer position.
///
/// `pointer` is in pixels with the origin at the top-left of the viewport;
/// `width` and `height` are the current viewport size in pixels and must
/// match the aspect ratio the camera projects with. The returned ray
/// starts at the camera position with a normalized direction.
///
/// Pure given its inputs; costs two 4x4 matrix inversions per call, which
/// is fine at per-click rates.
pub fn ray_from_screen(camera: &Camera, pointer: (f32, f32), width: f32, height: f32) -> Ray {
    // Pixel rows grow downward while NDC grows upward, so Y flips.
    let x = 2.0 * pointer.0 / width - 1.0;
    let y = 1.0 - 2.0 * pointer.1 / height;

    // A clip-space point on the near plane.
    let clip = Vec4::new(x, y, -1.0, 1.0);

    // Clip -> eye. Forcing z = -1, w = 0 turns the near-plane point into
    // a direction instead of a second point.
    let mut eye = camera.projection_matrix().inverse() * clip;
    eye.z = -1.0;
    eye.w = 0.0;

    // Eye -> world.
    let inverse_view = camera.view_matrix().inverse();
    let direction = (inverse_view * eye).truncate().normalize();

    // The translation column of the inverse view is the camera position.
    let origin = inverse_view.col(3).truncate();

    Ray::new(origin, direction)
}

/// Resolve a pick ray against every object's derived bounds.
///
/// Linear scan in registry order, strict `<` against the running minimum:
/// the first-encountered object wins ties exactly. Objects the ray misses,
/// or that sit entirely behind its origin, contribute nothing; `None`
/// means the pick hit empty space, which is a normal outcome.
///
/// O(n) with no spatial acceleration — fine for small registries, a known
/// scaling limit beyond that.
pub fn pick_closest(ray: &Ray, objects: &[Transform]) -> Option<PickHit> {
    let mut closest: Option<PickHit> = None;
    for (index, object) in objects.iter().enumerate() {
        if let Some(distance) = object.bounding_box().intersect_ray(ray)
            && closest.is_none_or(|hit| distance < hit.distance)
        {
            closest = Some(PickHit { index, distance });
        }
    }
    closest
}
