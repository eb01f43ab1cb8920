use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Window handle and metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Physical drawable size as `(width, height)`.
    pub fn physical_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// What happened to the frame passed to `FrameCtx::render`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderOutcome {
    /// Commands submitted and the image presented.
    Presented,
    /// No image this tick: the surface was unavailable or the draw
    /// callback declined.
    Skipped,
    /// The surface failed irrecoverably.
    Fatal,
}

impl RenderOutcome {
    /// `Fatal` becomes an error so the runtime exits with it.
    pub fn control(self) -> anyhow::Result<AppControl> {
        match self {
            RenderOutcome::Fatal => anyhow::bail!("surface failed irrecoverably"),
            _ => Ok(AppControl::Continue),
        }
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires the next surface image, lets `draw` record into it and
    /// presents the result.
    ///
    /// `draw` returns `false` to skip the frame; the image is then released
    /// without presenting.
    pub fn render<F>(&mut self, draw: F) -> RenderOutcome
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>) -> bool,
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => RenderOutcome::Fatal,
                    _ => RenderOutcome::Skipped,
                };
            }
        };

        let drawn = {
            let rctx = self.gpu.render_ctx();
            let mut target =
                RenderTarget::new(&mut frame.encoder, &frame.view, self.gpu.depth_view());
            draw(&rctx, &mut target)
        };

        if !drawn {
            self.gpu.discard(frame);
            return RenderOutcome::Skipped;
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);
        RenderOutcome::Presented
    }
}
