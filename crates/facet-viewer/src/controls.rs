use facet_engine::core::AppControl;
use facet_engine::driver::{FrameDriver, MotionProfile};
use facet_engine::geometry::Solid;
use facet_engine::input::{InputFrame, InputState, Key};

use crate::scene::Scene;

/// Speed change per `+`/`-` press.
pub const SPEED_STEP: f32 = 0.25;
/// Orbit per frame while an arrow key is held, radians.
pub const ARROW_ORBIT_STEP: f32 = 0.03;
/// Orbit per logical pixel of left-drag, radians.
pub const DRAG_ORBIT_PER_PX: f32 = 0.01;
/// Eye distance factor per wheel line towards the solid.
pub const ZOOM_PER_LINE: f32 = 0.9;

/// A user intent decoded from one frame of input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Select(Solid),
    NextSolid,
    PrevSolid,
    ToggleFill,
    ToggleAutoRotate,
    Faster,
    Slower,
    RandomPalette,
    DefaultPalette,
    Orbit { yaw: f32, pitch: f32 },
    Zoom(f32),
    Quit,
}

/// Decodes this frame's input into actions, in a fixed order.
pub fn collect(input: &InputState, frame: &InputFrame) -> Vec<Action> {
    let mut actions = Vec::new();

    if frame.pressed(Key::Escape) {
        actions.push(Action::Quit);
        return actions;
    }

    if frame.pressed(Key::Tab) {
        actions.push(if input.modifiers.shift {
            Action::PrevSolid
        } else {
            Action::NextSolid
        });
    }

    for key in [Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4, Key::Digit5] {
        if frame.pressed(key) {
            if let Some(solid) = key.digit_index().and_then(Solid::from_index) {
                actions.push(Action::Select(solid));
            }
        }
    }

    if frame.pressed(Key::W) {
        actions.push(Action::ToggleFill);
    }
    if frame.pressed(Key::Space) {
        actions.push(Action::ToggleAutoRotate);
    }
    // Speed keys auto-repeat while held; everything above is edge-triggered.
    if frame.pressed_or_repeated(Key::Equal) || frame.pressed_or_repeated(Key::NumpadAdd) {
        actions.push(Action::Faster);
    }
    if frame.pressed_or_repeated(Key::Minus) || frame.pressed_or_repeated(Key::NumpadSubtract) {
        actions.push(Action::Slower);
    }
    if frame.pressed(Key::R) {
        actions.push(Action::RandomPalette);
    }
    if frame.pressed(Key::Backspace) {
        actions.push(Action::DefaultPalette);
    }

    let mut yaw = frame.drag.0 * DRAG_ORBIT_PER_PX;
    let mut pitch = frame.drag.1 * DRAG_ORBIT_PER_PX;
    if input.key_down(Key::ArrowLeft) {
        yaw -= ARROW_ORBIT_STEP;
    }
    if input.key_down(Key::ArrowRight) {
        yaw += ARROW_ORBIT_STEP;
    }
    if input.key_down(Key::ArrowUp) {
        pitch += ARROW_ORBIT_STEP;
    }
    if input.key_down(Key::ArrowDown) {
        pitch -= ARROW_ORBIT_STEP;
    }
    if yaw != 0.0 || pitch != 0.0 {
        actions.push(Action::Orbit { yaw, pitch });
    }

    if frame.wheel_lines != 0.0 {
        actions.push(Action::Zoom(ZOOM_PER_LINE.powf(frame.wheel_lines)));
    }

    actions
}

/// Applies one action to the driver and scene.
pub fn apply(action: Action, driver: &mut FrameDriver, scene: &mut Scene) -> AppControl {
    match action {
        Action::Quit => return AppControl::Exit,
        Action::Select(solid) => select(solid, driver, scene),
        Action::NextSolid => select(scene.solid().next(), driver, scene),
        Action::PrevSolid => select(scene.solid().prev(), driver, scene),
        Action::ToggleFill => {
            let fill = driver.toggle_fill();
            log::info!("fill mode: {fill}");
        }
        Action::ToggleAutoRotate => {
            let on = driver.toggle_auto_rotate();
            log::info!("auto-rotate: {}", if on { "on" } else { "off" });
        }
        Action::Faster => {
            let speed = driver.adjust_speed(SPEED_STEP);
            log::debug!("speed {speed:.2}");
        }
        Action::Slower => {
            let speed = driver.adjust_speed(-SPEED_STEP);
            log::debug!("speed {speed:.2}");
        }
        Action::RandomPalette => scene.randomize_palette(),
        Action::DefaultPalette => scene.reset_palette(),
        Action::Orbit { yaw, pitch } => driver.camera_mut().orbit(yaw, pitch),
        Action::Zoom(factor) => driver.camera_mut().zoom(factor),
    }
    AppControl::Continue
}

fn select(solid: Solid, driver: &mut FrameDriver, scene: &mut Scene) {
    if scene.select(solid) {
        driver.set_profile(MotionProfile::for_solid(solid));
        log::info!("showing {solid}");
    }
}
