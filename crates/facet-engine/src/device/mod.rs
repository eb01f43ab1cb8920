//! GPU device + surface management.
//!
//! Created once per window at startup:
//! - the wgpu Instance/Adapter/Device/Queue
//! - the configured Surface (swapchain) and a matching depth target
//! - per-frame acquisition, submission and presentation

mod error;
mod frame;
mod gpu;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::{Gpu, GpuInit};
pub use surface::{choose_present_mode, choose_surface_format, surface_error_action};
