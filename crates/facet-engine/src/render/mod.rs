//! GPU rendering subsystem.
//!
//! `WireframeRenderer` consumes the driver's `FrameCommands` and issues one
//! indexed draw per frame. It owns its GPU resources (pipelines, buffers).
//!
//! Convention:
//! - Model space is the unit circumradius sphere around the origin.
//! - The vertex shader multiplies by a single MVP uniform.

mod ctx;
mod depth;
pub mod shader;
pub mod wireframe;

pub use ctx::{RenderCtx, RenderTarget};
pub use depth::DepthTarget;
pub use shader::ShaderAsset;
pub use wireframe::{WireframeRenderer, WireframeStrategy};
