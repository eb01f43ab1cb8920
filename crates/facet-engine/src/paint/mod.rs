//! Color representation shared by the driver and renderers.

pub mod color;

pub use color::Color;
