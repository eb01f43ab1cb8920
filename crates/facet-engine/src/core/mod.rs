//! Core engine-facing contracts.
//!
//! The stable interface between the window runtime and the application
//! driving it: lifecycle callbacks plus a per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, RenderOutcome, WindowCtx};
