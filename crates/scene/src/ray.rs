//! Rays and axis-aligned bounding boxes.

use glam::Vec3;

/// A ray with a world-space origin and direction.
///
/// The direction does not need to be normalized; intersection distances
/// are parametric in whatever length the direction has.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin in world space
    pub origin: Vec3,
    /// Ray direction, not necessarily unit length
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from an origin and a direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point along the ray at parametric distance `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box.
///
/// Holds `min <= max` componentwise. A box that is flat on one or more
/// axes (`min == max`) is a valid slab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.cmple(max).all(), "Aabb min must not exceed max");
        Self { min, max }
    }

    /// Box centered at `center` with the given half extents per axis.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Slab-method ray intersection.
    ///
    /// Returns the parametric entry distance of the first hit at or in
    /// front of the ray origin, or `None` on a miss. A direction component
    /// of exactly zero makes the ray parallel to that axis's pair of
    /// planes; the box can then only be hit if the origin already lies
    /// between them. The running interval starts at `[0, +inf)`, so boxes
    /// entirely behind the origin are rejected. An origin inside the box
    /// reports an entry distance of zero.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let dir = ray.direction[axis];
            let origin = ray.origin[axis];
            if dir != 0.0 {
                let mut t1 = (self.min[axis] - origin) / dir;
                let mut t2 = (self.max[axis] - origin) / dir;
                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                }
                t_min = t_min.max(t1);
                t_max = t_max.min(t2);
                if t_min > t_max {
                    return None;
                }
            } else if origin < self.min[axis] || origin > self.max[axis] {
                return None;
            }
        }

        Some(t_min)
    }
}
