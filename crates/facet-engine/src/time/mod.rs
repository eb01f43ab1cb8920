//! Frame timing.
//!
//! - one `FrameClock` per window; `tick()` once per redraw yields `FrameTime`
//! - `FrameStats` folds frame times into a periodic frames-per-second figure

mod frame_clock;
mod stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use stats::FrameStats;
