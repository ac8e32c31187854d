//! The scene object registry.

use crate::transform::Transform;

/// Ordered collection of scene objects.
///
/// An object's index is its identity for picking, and indices are stable
/// for the lifetime of the frame loop: objects are appended at startup and
/// the only bulk mutation is replacing the whole sequence.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<Transform>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object, returning its index.
    pub fn push(&mut self, object: Transform) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Replace the entire object sequence.
    ///
    /// Indices handed out before this call no longer identify the same
    /// objects.
    pub fn replace(&mut self, objects: Vec<Transform>) {
        self.objects = objects;
    }

    /// All objects in registry order.
    pub fn objects(&self) -> &[Transform] {
        &self.objects
    }

    /// The object at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Transform> {
        self.objects.get(index)
    }

    /// Mutable access to the object at `index`, if it exists.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Transform> {
        self.objects.get_mut(index)
    }

    /// Iterate mutably over all objects, for per-frame animation.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Transform> {
        self.objects.iter_mut()
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn push_hands_out_stable_indices() {
        let mut scene = Scene::new();
        let first = scene.push(Transform::new());
        let second = scene.push(Transform::new().with_position(Vec3::X));
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(scene.get(second).map(|t| t.position), Some(Vec3::X));
    }

    #[test]
    fn replace_swaps_the_whole_sequence() {
        let mut scene = Scene::new();
        let _ = scene.push(Transform::new());
        scene.replace(vec![
            Transform::new().with_position(Vec3::Y),
            Transform::new().with_position(Vec3::Z),
        ]);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get(0).map(|t| t.position), Some(Vec3::Y));
    }

    #[test]
    fn iter_mut_reaches_every_object() {
        let mut scene = Scene::new();
        let _ = scene.push(Transform::new());
        let _ = scene.push(Transform::new());
        for object in scene.iter_mut() {
            object.rotation.y += 10.0;
        }
        assert!(scene.objects().iter().all(|t| t.rotation.y == 10.0));
    }
}
