//! Draw submission boundary.
//!
//! The scene core emits one `(model, view, projection)` triple per object
//! per frame; everything behind [`DrawSink`] — pipelines, swapchains,
//! shader compilation — is a concrete backend's business and stays out of
//! this workspace.

pub mod sink;
pub mod uniforms;

pub use sink::{DrawCommand, DrawSink, RecordingSink, UniformSink, draw_scene};
pub use uniforms::{CameraUniforms, ObjectUniforms};
