//! Draw sinks and the per-frame draw pass.

use glam::Mat4;
use tracing::trace;

use groove_scene::{Camera, Transform};

use crate::uniforms::{CameraUniforms, ObjectUniforms};

/// One object's draw submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    /// Model matrix of the submitted object
    pub model: Mat4,
    /// View matrix in effect for the frame
    pub view: Mat4,
    /// Projection matrix in effect for the frame
    pub projection: Mat4,
}

/// Receives one `(model, view, projection)` triple per object per frame.
///
/// The core has no knowledge of the sink's internal pipeline; a concrete
/// implementation may batch, cull, or upload however it likes.
pub trait DrawSink {
    /// Called once at the start of every frame, before any `draw`.
    fn begin_frame(&mut self);

    /// Submit one object for this frame.
    fn draw(&mut self, model: Mat4, view: Mat4, projection: Mat4);

    /// Called once after every object has been submitted.
    fn end_frame(&mut self);
}

/// Draw every object in registry order.
///
/// The camera matrices are computed once per frame; each object
/// contributes its own model matrix.
pub fn draw_scene(camera: &Camera, objects: &[Transform], sink: &mut impl DrawSink) {
    let view = camera.view_matrix();
    let projection = camera.projection_matrix();

    sink.begin_frame();
    for object in objects {
        sink.draw(object.matrix(), view, projection);
    }
    sink.end_frame();
}

/// Sink that records raw draw commands.
///
/// Used by tests and headless runs to observe exactly what a frame
/// submitted.
#[derive(Debug, Default)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded for the most recent frame, in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of completed frames.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl DrawSink for RecordingSink {
    fn begin_frame(&mut self) {
        self.commands.clear();
    }

    fn draw(&mut self, model: Mat4, view: Mat4, projection: Mat4) {
        self.commands.push(DrawCommand {
            model,
            view,
            projection,
        });
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

/// Sink that stages GPU-layout uniforms, the way a backend would upload
/// them: one [`CameraUniforms`] per frame, one [`ObjectUniforms`] per
/// submission.
#[derive(Debug, Default)]
pub struct UniformSink {
    camera: CameraUniforms,
    objects: Vec<ObjectUniforms>,
}

impl UniformSink {
    /// Create an empty uniform sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera uniforms staged for the current frame.
    pub fn camera(&self) -> &CameraUniforms {
        &self.camera
    }

    /// Object uniforms staged for the current frame, in draw order.
    pub fn objects(&self) -> &[ObjectUniforms] {
        &self.objects
    }
}

impl DrawSink for UniformSink {
    fn begin_frame(&mut self) {
        self.objects.clear();
    }

    fn draw(&mut self, model: Mat4, view: Mat4, projection: Mat4) {
        if self.objects.is_empty() {
            // The camera position comes back out of the view matrix, the
            // same way picking recovers its ray origin.
            let position = view.inverse().col(3).truncate();
            self.camera = CameraUniforms::new(view, projection, position);
        }
        self.objects.push(ObjectUniforms::new(model));
    }

    fn end_frame(&mut self) {
        trace!("Staged {} object uniforms", self.objects.len());
    }
}
