//! Per-frame render loop state.
//!
//! The driver is platform-agnostic. It owns `RenderState`, turns it into an
//! MVP matrix once per tick and hands the GPU layer a `FrameCommands` value
//! describing the single indexed draw for that frame. Nothing here touches
//! wgpu, so the whole loop is testable without a device.

mod camera;
mod commands;
mod frame_driver;
mod profile;
mod state;
mod uniforms;

pub use camera::Camera;
pub use commands::{FillMode, FrameCommands};
pub use frame_driver::{
    model_matrix, DriverConfig, DriverPhase, FrameDriver, DEFAULT_ROTATION_STEP, MAX_SPEED,
};
pub use profile::MotionProfile;
pub use state::RenderState;
pub use uniforms::Uniforms;

/// Host-facing render loop contract.
///
/// The host calls both methods serially from the thread that owns the display
/// surface; implementations need no synchronization.
pub trait RenderLoop {
    /// Surface size changed (physical pixels).
    fn on_resize(&mut self, width: u32, height: u32);

    /// Display tick. `None` means the frame is skipped.
    fn on_tick(&mut self) -> Option<FrameCommands>;
}
