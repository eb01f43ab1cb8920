use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState};

/// Current input state for the window.
///
/// Holds "is down" information and current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Avoid stuck keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                if let Some((px, py)) = self.pointer_pos {
                    if self.buttons_down.contains(&MouseButton::Left) {
                        frame.drag.0 += x - px;
                        frame.drag.1 += y - py;
                    }
                }
                self.pointer_pos = Some((x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, repeat } => {
                match state {
                    KeyState::Pressed => {
                        let inserted = self.keys_down.insert(key);
                        if repeat {
                            frame.keys_repeated.insert(key);
                        } else if inserted {
                            frame.keys_pressed.insert(key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(&key) {
                            frame.keys_released.insert(key);
                        }
                    }
                }
            }

            InputEvent::PointerButton { button, state } => match state {
                MouseButtonState::Pressed => {
                    if self.buttons_down.insert(button) {
                        frame.buttons_pressed.insert(button);
                    }
                }
                MouseButtonState::Released => {
                    if self.buttons_down.remove(&button) {
                        frame.buttons_released.insert(button);
                    }
                }
            },

            InputEvent::MouseWheel(delta) => {
                frame.wheel_lines += delta.lines_y();
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    fn button(state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton {
            button: MouseButton::Left,
            state,
        }
    }

    #[test]
    fn press_and_release_are_recorded_once() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, key(Key::W, KeyState::Pressed, false));
        s.apply_event(&mut f, key(Key::W, KeyState::Pressed, false));
        assert!(f.pressed(Key::W));
        assert!(s.key_down(Key::W));

        s.apply_event(&mut f, key(Key::W, KeyState::Released, false));
        assert!(f.keys_released.contains(&Key::W));
        assert!(!s.key_down(Key::W));
    }

    #[test]
    fn key_repeat_is_not_a_fresh_press() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::Equal, KeyState::Pressed, false));
        f.clear();

        s.apply_event(&mut f, key(Key::Equal, KeyState::Pressed, true));
        assert!(!f.pressed(Key::Equal));
        assert!(f.pressed_or_repeated(Key::Equal));
        assert!(!f.is_empty());
    }

    #[test]
    fn repeat_after_focus_loss_stays_a_repeat() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::Space, KeyState::Pressed, false));
        s.apply_event(&mut f, InputEvent::Focused(false));
        f.clear();

        s.apply_event(&mut f, key(Key::Space, KeyState::Pressed, true));
        assert!(!f.pressed(Key::Space));
        assert!(s.key_down(Key::Space));
    }

    #[test]
    fn drag_accumulates_only_while_left_held() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, InputEvent::PointerMoved { x: 10.0, y: 10.0 });
        s.apply_event(&mut f, InputEvent::PointerMoved { x: 20.0, y: 10.0 });
        assert_eq!(f.drag, (0.0, 0.0));

        s.apply_event(&mut f, button(MouseButtonState::Pressed));
        s.apply_event(&mut f, InputEvent::PointerMoved { x: 25.0, y: 13.0 });
        s.apply_event(&mut f, InputEvent::PointerMoved { x: 30.0, y: 11.0 });
        assert_eq!(f.drag, (10.0, 1.0));

        s.apply_event(&mut f, button(MouseButtonState::Released));
        s.apply_event(&mut f, InputEvent::PointerMoved { x: 90.0, y: 90.0 });
        assert_eq!(f.drag, (10.0, 1.0));
    }

    #[test]
    fn re_entering_pointer_does_not_jump() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, InputEvent::PointerMoved { x: 0.0, y: 0.0 });
        s.apply_event(&mut f, button(MouseButtonState::Pressed));
        s.apply_event(&mut f, InputEvent::PointerLeft);
        s.apply_event(&mut f, InputEvent::PointerMoved { x: 500.0, y: 500.0 });
        assert_eq!(f.drag, (0.0, 0.0));
    }

    #[test]
    fn wheel_sums_lines_and_pixels() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 }));
        s.apply_event(&mut f, InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: 80.0 }));
        assert_eq!(f.wheel_lines, 3.0);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::Space, KeyState::Pressed, false));
        s.apply_event(&mut f, button(MouseButtonState::Pressed));
        s.apply_event(&mut f, InputEvent::Focused(false));
        assert!(s.keys_down.is_empty());
        assert!(!s.button_down(MouseButton::Left));
    }

    #[test]
    fn clear_resets_frame() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::R, KeyState::Pressed, false));
        s.apply_event(&mut f, InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: -2.0 }));
        assert!(!f.is_empty());
        f.clear();
        assert!(f.is_empty());
    }
}
