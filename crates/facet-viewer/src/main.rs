//! Desktop viewer for the Platonic solids.
//!
//! Opens one window and spins the selected solid every display tick.
//! See `--help` for flags; keys: Tab / 1-5 solid, W fill, Space pause,
//! +/- speed, R / Backspace palette, arrows or drag orbit, wheel zoom, Esc quit.

mod app;
mod cli;
mod controls;
mod scene;

use facet_engine::logging::{init_logging, LoggingConfig};
use facet_engine::window::Runtime;

use crate::app::ViewerApp;

fn main() -> anyhow::Result<()> {
    let cli = cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    log::info!(
        "facet-viewer {}: {} ({}, speed {})",
        env!("CARGO_PKG_VERSION"),
        cli.solid,
        cli.fill,
        cli.speed
    );

    let app = ViewerApp::new(&cli);
    Runtime::run(cli.runtime_config(), cli.gpu_init(), app)
}
