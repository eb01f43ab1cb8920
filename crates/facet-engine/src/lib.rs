//! Facet engine crate.
//!
//! Owns the platform + GPU runtime pieces behind the wireframe solid viewer:
//! geometry tables, the per-frame driver, the wgpu device layer and the
//! window runtime that ties them to a display.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod geometry;
pub mod driver;
pub mod render;
pub mod paint;
