//! Platform abstraction layer for the Groove engine.
//!
//! This crate provides platform-specific functionality:
//! - Window management via winit (the viewport provider)
//! - Input handling (keyboard, mouse)

mod input;
mod window;

pub use input::{InputState, KeyCode, MouseButton};
pub use window::Window;

// Re-export winit types that users might need
pub use winit::event::WindowEvent;
pub use winit::event_loop::EventLoop;
