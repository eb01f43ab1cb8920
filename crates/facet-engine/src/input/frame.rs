use std::collections::HashSet;

use super::types::{Key, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down; `InputFrame` holds what
/// changed since the last rendered frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went down this frame. OS key-repeats are not included.
    pub keys_pressed: HashSet<Key>,

    /// Keys that auto-repeated this frame while held.
    pub keys_repeated: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,

    /// Pointer travel while the left button was held, logical px.
    pub drag: (f32, f32),

    /// Accumulated vertical wheel motion in lines.
    pub wheel_lines: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_repeated.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.drag = (0.0, 0.0);
        self.wheel_lines = 0.0;
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Pressed or auto-repeated; for actions that should keep firing
    /// while the key is held.
    pub fn pressed_or_repeated(&self, key: Key) -> bool {
        self.pressed(key) || self.keys_repeated.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys_pressed.is_empty()
            && self.keys_repeated.is_empty()
            && self.keys_released.is_empty()
            && self.buttons_pressed.is_empty()
            && self.buttons_released.is_empty()
            && self.drag == (0.0, 0.0)
            && self.wheel_lines == 0.0
    }
}
