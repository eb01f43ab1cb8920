use anyhow::Context;
use facet_engine::core::{App, AppControl, FrameCtx, RenderOutcome};
use facet_engine::device::Gpu;
use facet_engine::driver::{FrameDriver, RenderLoop};
use facet_engine::render::{RenderCtx, WireframeRenderer};
use facet_engine::time::FrameStats;

use crate::cli::Cli;
use crate::controls;
use crate::scene::Scene;

/// The interactive viewer: one solid, spun by the frame driver.
pub struct ViewerApp {
    driver: FrameDriver,
    renderer: WireframeRenderer,
    scene: Scene,
    stats: FrameStats,
    title: String,
}

impl ViewerApp {
    pub fn new(cli: &Cli) -> Self {
        Self {
            driver: FrameDriver::new(cli.driver_config()),
            renderer: WireframeRenderer::new(),
            scene: Scene::new(cli.solid, cli.seed),
            stats: FrameStats::default(),
            title: String::new(),
        }
    }

    fn upload_if_stale(&mut self, ctx: &RenderCtx<'_>) -> anyhow::Result<()> {
        if !self.scene.take_dirty() {
            return Ok(());
        }
        let mesh = self
            .scene
            .build_mesh()
            .with_context(|| format!("invalid {} mesh", self.scene.solid()))?;
        self.renderer.upload_mesh(ctx, &mesh)?;
        Ok(())
    }

    fn window_title(&self) -> String {
        let mut title = format!(
            "facet - {} - {} - speed {:.2}",
            self.scene.solid(),
            self.driver.fill(),
            self.driver.speed()
        );
        if !self.driver.auto_rotate() {
            title.push_str(" (paused)");
        }
        title
    }
}

impl App for ViewerApp {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> anyhow::Result<()> {
        let ctx = gpu.render_ctx();
        self.renderer.prepare(&ctx);
        self.upload_if_stale(&ctx)?;
        self.driver.mark_ready();

        log::info!(
            "ready: {} on {:?}, {:?}",
            self.scene.solid(),
            gpu.surface_format(),
            gpu.present_mode()
        );
        Ok(())
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.driver.on_resize(width, height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> anyhow::Result<AppControl> {
        for action in controls::collect(ctx.input, ctx.input_frame) {
            if controls::apply(action, &mut self.driver, &mut self.scene) == AppControl::Exit {
                return Ok(AppControl::Exit);
            }
        }

        self.upload_if_stale(&ctx.gpu.render_ctx())?;

        let title = self.window_title();
        if title != self.title {
            ctx.window.set_title(&title);
            self.title = title;
        }

        let (driver, renderer) = (&mut self.driver, &mut self.renderer);
        let outcome = ctx.render(|rctx, target| match driver.on_tick() {
            Some(commands) => {
                renderer.render(rctx, target, &commands);
                true
            }
            None => false,
        });

        if outcome == RenderOutcome::Presented {
            if let Some(fps) = self.stats.record(&ctx.time) {
                log::debug!(
                    "{fps:.1} fps, frame {}, angle {:.3}",
                    self.driver.frames(),
                    self.driver.state().rotation_angle
                );
            }
        }

        outcome.control()
    }
}
