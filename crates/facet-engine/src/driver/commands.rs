use std::fmt;

use super::Uniforms;
use crate::paint::Color;

/// Rasterization of the solid's triangles.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FillMode {
    /// Triangle edges only.
    #[default]
    Wireframe,
    /// Filled, depth-tested faces.
    Solid,
}

impl FillMode {
    pub fn toggled(self) -> Self {
        match self {
            FillMode::Wireframe => FillMode::Solid,
            FillMode::Solid => FillMode::Wireframe,
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FillMode::Wireframe => "wireframe",
            FillMode::Solid => "solid",
        })
    }
}

/// Everything the GPU layer needs to record one frame: a uniform upload and
/// one indexed draw over the current mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameCommands {
    pub uniforms: Uniforms,
    pub fill: FillMode,
    pub clear: Color,
    /// 1-based count of ticks that produced commands.
    pub frame: u64,
}
