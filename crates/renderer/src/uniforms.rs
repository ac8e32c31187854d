//! GPU-layout uniform data for draw sinks.
//!
//! A concrete backend uploads these buffers as-is, so the structures use
//! `#[repr(C)]` with explicit padding and implement `Pod`/`Zeroable` for
//! safe byte casting.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Per-frame camera data.
///
/// # Memory Layout
///
/// - Offset 0: view matrix (64 bytes)
/// - Offset 64: projection matrix (64 bytes)
/// - Offset 128: view-projection matrix (64 bytes)
/// - Offset 192: camera position (12 bytes)
/// - Offset 204: padding (4 bytes)
/// - Total size: 208 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct CameraUniforms {
    /// View matrix (world to view space).
    pub view: Mat4,
    /// Projection matrix (view to clip space).
    pub projection: Mat4,
    /// Combined view-projection matrix.
    pub view_projection: Mat4,
    /// Camera world position.
    pub camera_position: Vec3,
    /// Padding for 16-byte alignment.
    pub _padding: f32,
}

impl CameraUniforms {
    /// Size of the struct in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Build camera uniforms from matrices and position.
    pub fn new(view: Mat4, projection: Mat4, camera_position: Vec3) -> Self {
        Self {
            view,
            projection,
            view_projection: projection * view,
            camera_position,
            _padding: 0.0,
        }
    }
}

/// Per-object data.
///
/// # Memory Layout
///
/// - Offset 0: model matrix (64 bytes)
/// - Offset 64: normal matrix (64 bytes)
/// - Total size: 128 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct ObjectUniforms {
    /// Model matrix (object to world space).
    pub model: Mat4,
    /// Normal matrix, the inverse transpose of the model matrix.
    pub normal_matrix: Mat4,
}

impl ObjectUniforms {
    /// Size of the struct in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Build object uniforms from a model matrix.
    ///
    /// A singular model (zero scale) has no inverse; the normal matrix
    /// falls back to identity instead of NaN.
    pub fn new(model: Mat4) -> Self {
        const EPSILON: f32 = 1e-6;
        let normal_matrix = if model.determinant().abs() < EPSILON {
            Mat4::IDENTITY
        } else {
            model.inverse().transpose()
        };
        Self {
            model,
            normal_matrix,
        }
    }
}
