//! Scene-specific error types.

use thiserror::Error;

/// Errors raised when scene components are built from invalid parameters.
///
/// Geometry-level operations (intersection, picking) never fail; only
/// configuration-level constructors validate and reject.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SceneError {
    /// Field of view outside the open interval (0, 180) degrees
    #[error("Invalid field of view: {0} degrees (must be within (0, 180))")]
    InvalidFov(f32),

    /// Non-positive or non-finite aspect ratio
    #[error("Invalid aspect ratio: {0} (must be positive and finite)")]
    InvalidAspect(f32),

    /// Clip planes violating `0 < near < far`
    #[error("Invalid clip planes: near = {near}, far = {far} (require 0 < near < far)")]
    InvalidClipPlanes {
        /// Rejected near clip distance
        near: f32,
        /// Rejected far clip distance
        far: f32,
    },
}
