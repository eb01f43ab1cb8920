use clap::Parser;
use facet_engine::device::GpuInit;
use facet_engine::driver::{DriverConfig, FillMode, MotionProfile, MAX_SPEED};
use facet_engine::geometry::{Solid, UnknownSolid};
use facet_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

#[derive(Parser, Debug)]
#[command(
    name = "facet-viewer",
    author,
    version,
    about = "Spinning wireframe Platonic solids"
)]
pub struct Cli {
    /// Solid shown at startup: tetrahedron, cube, octahedron, dodecahedron or icosahedron.
    #[arg(
        long,
        value_name = "NAME",
        env = "FACET_SOLID",
        value_parser = parse_solid,
        default_value = "octahedron"
    )]
    pub solid: Solid,

    /// Rasterization: `wireframe` or `solid`.
    #[arg(long, value_name = "MODE", value_parser = parse_fill, default_value = "wireframe")]
    pub fill: FillMode,

    /// Rotation speed multiplier in [0, 5].
    #[arg(long, value_name = "FACTOR", value_parser = parse_speed, default_value_t = 1.0)]
    pub speed: f32,

    /// Start with auto-rotation off.
    #[arg(long)]
    pub paused: bool,

    /// Initial window size in logical pixels (e.g. `1280x720`).
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size, default_value = "800x800")]
    pub size: WindowSize,

    /// Swap behavior: `fifo`, `mailbox`, `immediate` or `auto`.
    #[arg(
        long,
        value_name = "MODE",
        value_parser = parse_present_mode,
        default_value = "fifo"
    )]
    pub present_mode: wgpu::PresentMode,

    /// Seed for the random palette generator.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Log filter in env_logger syntax; overrides `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Cli {
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            profile: MotionProfile::for_solid(self.solid),
            fill: self.fill,
            auto_rotate: !self.paused,
            speed: self.speed,
            ..DriverConfig::default()
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: format!("facet - {}", self.solid),
            initial_size: LogicalSize::new(self.size.width as f64, self.size.height as f64),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            present_mode: self.present_mode,
            ..GpuInit::default()
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_solid(value: &str) -> Result<Solid, String> {
    value.parse().map_err(|e: UnknownSolid| e.to_string())
}

pub fn parse_fill(value: &str) -> Result<FillMode, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("fill mode must not be empty".to_string());
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "wireframe" | "wire" | "lines" => Ok(FillMode::Wireframe),
        "solid" | "fill" | "filled" => Ok(FillMode::Solid),
        other => Err(format!("unknown fill mode '{other}'; expected wireframe or solid")),
    }
}

pub fn parse_speed(value: &str) -> Result<f32, String> {
    let speed: f32 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid speed '{}'", value.trim()))?;

    if !speed.is_finite() || !(0.0..=MAX_SPEED).contains(&speed) {
        return Err(format!("speed {speed} out of range; expected 0 to {MAX_SPEED}"));
    }
    Ok(speed)
}

pub fn parse_size(value: &str) -> Result<WindowSize, String> {
    let trimmed = value.trim();
    let (w, h) = trimmed
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("invalid size '{trimmed}'; expected WIDTHxHEIGHT"))?;

    let width: u32 = w
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{}'", w.trim()))?;
    let height: u32 = h
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{}'", h.trim()))?;

    if width == 0 || height == 0 {
        return Err("window size must be non-zero".to_string());
    }
    Ok(WindowSize { width, height })
}

pub fn parse_present_mode(value: &str) -> Result<wgpu::PresentMode, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("present mode must not be empty".to_string());
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "fifo" | "vsync" => Ok(wgpu::PresentMode::Fifo),
        "mailbox" => Ok(wgpu::PresentMode::Mailbox),
        "immediate" | "novsync" => Ok(wgpu::PresentMode::Immediate),
        "auto" => Ok(wgpu::PresentMode::AutoVsync),
        other => Err(format!(
            "unknown present mode '{other}'; expected fifo, mailbox, immediate or auto"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_octahedron_viewer() {
        let cli = Cli::try_parse_from(["facet-viewer"]).unwrap();
        assert_eq!(cli.solid, Solid::Octahedron);
        assert_eq!(cli.fill, FillMode::Wireframe);
        assert_eq!(cli.speed, 1.0);
        assert!(!cli.paused);
        assert_eq!(cli.size, WindowSize { width: 800, height: 800 });
        assert_eq!(cli.present_mode, wgpu::PresentMode::Fifo);
    }

    #[test]
    fn flags_flow_into_configs() {
        let cli = Cli::try_parse_from([
            "facet-viewer",
            "--solid",
            "d20",
            "--fill",
            "solid",
            "--speed",
            "2.5",
            "--paused",
            "--size",
            "1280x720",
            "--present-mode",
            "mailbox",
        ])
        .unwrap();

        let driver = cli.driver_config();
        assert_eq!(driver.profile, MotionProfile::for_solid(Solid::Icosahedron));
        assert_eq!(driver.fill, FillMode::Solid);
        assert_eq!(driver.speed, 2.5);
        assert!(!driver.auto_rotate);

        let runtime = cli.runtime_config();
        assert_eq!(runtime.initial_size, LogicalSize::new(1280.0, 720.0));
        assert!(runtime.title.contains("icosahedron"));

        assert_eq!(cli.gpu_init().present_mode, wgpu::PresentMode::Mailbox);
    }

    #[test]
    fn unknown_solid_is_rejected() {
        assert!(Cli::try_parse_from(["facet-viewer", "--solid", "torus"]).is_err());
        assert!(parse_solid("torus").unwrap_err().contains("torus"));
    }

    #[test]
    fn fill_aliases() {
        assert_eq!(parse_fill("Wire"), Ok(FillMode::Wireframe));
        assert_eq!(parse_fill("filled"), Ok(FillMode::Solid));
        assert!(parse_fill("").is_err());
        assert!(parse_fill("dots").is_err());
    }

    #[test]
    fn speed_range_is_enforced() {
        assert_eq!(parse_speed("0"), Ok(0.0));
        assert_eq!(parse_speed(" 5 "), Ok(5.0));
        assert!(parse_speed("5.5").is_err());
        assert!(parse_speed("-1").is_err());
        assert!(parse_speed("NaN").is_err());
        assert!(parse_speed("fast").is_err());
    }

    #[test]
    fn size_parsing() {
        assert_eq!(parse_size("640x480"), Ok(WindowSize { width: 640, height: 480 }));
        assert_eq!(parse_size("640X480"), Ok(WindowSize { width: 640, height: 480 }));
        assert!(parse_size("640").is_err());
        assert!(parse_size("0x480").is_err());
        assert!(parse_size("ax480").is_err());
    }

    #[test]
    fn present_modes() {
        assert_eq!(parse_present_mode("immediate"), Ok(wgpu::PresentMode::Immediate));
        assert_eq!(parse_present_mode("AUTO"), Ok(wgpu::PresentMode::AutoVsync));
        assert!(parse_present_mode("triple").is_err());
    }
}
