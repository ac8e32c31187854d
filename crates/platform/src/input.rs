//! Input state for keyboard and mouse.

use std::collections::HashSet;

pub use winit::keyboard::KeyCode;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left (primary) button
    Left,
    /// Right (secondary) button
    Right,
    /// Middle (wheel) button
    Middle,
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Left,
        }
    }
}

/// Tracks keyboard and mouse state across a frame.
///
/// Pointer and scroll deltas accumulate over however many device events
/// arrive within one frame, and are cleared by [`end_frame`] once the
/// frame has consumed them. Deltas are never carried across frames, so a
/// look-mode toggle cannot release a stale accumulated jump into the
/// camera.
///
/// [`end_frame`]: InputState::end_frame
#[derive(Debug, Default)]
pub struct InputState {
    /// Currently pressed keys
    pressed_keys: HashSet<KeyCode>,
    /// Keys that went down this frame
    just_pressed_keys: HashSet<KeyCode>,
    /// Keys that went up this frame
    just_released_keys: HashSet<KeyCode>,

    /// Currently pressed mouse buttons
    pressed_buttons: HashSet<MouseButton>,
    /// Buttons that went down this frame
    just_pressed_buttons: HashSet<MouseButton>,
    /// Buttons that went up this frame
    just_released_buttons: HashSet<MouseButton>,

    /// Last reported pointer position in pixels
    pointer_position: (f32, f32),
    /// Pointer movement accumulated this frame
    pointer_delta: (f32, f32),
    /// Scroll accumulated this frame
    scroll_delta: (f32, f32),
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call once per frame, after the frame has
    /// consumed the deltas and edge flags.
    pub fn end_frame(&mut self) {
        self.just_pressed_keys.clear();
        self.just_released_keys.clear();
        self.just_pressed_buttons.clear();
        self.just_released_buttons.clear();
        self.pointer_delta = (0.0, 0.0);
        self.scroll_delta = (0.0, 0.0);
    }

    /// Handle a key press event. OS key-repeat events are absorbed: only
    /// a genuine edge sets the just-pressed flag.
    pub fn on_key_pressed(&mut self, key: KeyCode) {
        if self.pressed_keys.insert(key) {
            let _ = self.just_pressed_keys.insert(key);
        }
    }

    /// Handle a key release event.
    pub fn on_key_released(&mut self, key: KeyCode) {
        if self.pressed_keys.remove(&key) {
            let _ = self.just_released_keys.insert(key);
        }
    }

    /// Handle a mouse button press event.
    pub fn on_button_pressed(&mut self, button: MouseButton) {
        if self.pressed_buttons.insert(button) {
            let _ = self.just_pressed_buttons.insert(button);
        }
    }

    /// Handle a mouse button release event.
    pub fn on_button_released(&mut self, button: MouseButton) {
        if self.pressed_buttons.remove(&button) {
            let _ = self.just_released_buttons.insert(button);
        }
    }

    /// Handle pointer movement. Multiple moves within one frame accumulate
    /// into a single delta.
    pub fn on_pointer_moved(&mut self, x: f32, y: f32) {
        let (old_x, old_y) = self.pointer_position;
        self.pointer_position = (x, y);
        self.pointer_delta.0 += x - old_x;
        self.pointer_delta.1 += y - old_y;
    }

    /// Handle scroll input; accumulates within the frame.
    pub fn on_scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.scroll_delta.0 += delta_x;
        self.scroll_delta.1 += delta_y;
    }

    /// Check if a key is currently pressed.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check if a key went down this frame.
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    /// Check if a key went up this frame.
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.just_released_keys.contains(&key)
    }

    /// Check if a mouse button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Check if a mouse button went down this frame.
    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.just_pressed_buttons.contains(&button)
    }

    /// Check if a mouse button went up this frame.
    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.just_released_buttons.contains(&button)
    }

    /// Current pointer position in pixels, top-left origin.
    pub fn pointer_position(&self) -> (f32, f32) {
        self.pointer_position
    }

    /// Pointer movement accumulated this frame.
    pub fn pointer_delta(&self) -> (f32, f32) {
        self.pointer_delta
    }

    /// Scroll accumulated this frame.
    pub fn scroll_delta(&self) -> (f32, f32) {
        self.scroll_delta
    }
}
