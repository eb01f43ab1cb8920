use std::time::Duration;

use super::FrameTime;

/// Rolling frames-per-second over fixed reporting windows.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window: Duration,
    elapsed: f32,
    frames: u32,
    last_fps: Option<f32>,
}

impl FrameStats {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            elapsed: 0.0,
            frames: 0,
            last_fps: None,
        }
    }

    /// Adds one frame. Returns the average FPS when a window closes.
    pub fn record(&mut self, time: &FrameTime) -> Option<f32> {
        self.record_dt(time.dt)
    }

    pub fn record_dt(&mut self, dt: f32) -> Option<f32> {
        self.elapsed += dt;
        self.frames += 1;

        if self.elapsed < self.window.as_secs_f32() {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed;
        self.elapsed = 0.0;
        self.frames = 0;
        self.last_fps = Some(fps);
        Some(fps)
    }

    /// Most recent completed window.
    pub fn fps(&self) -> Option<f32> {
        self.last_fps
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_window() {
        let mut stats = FrameStats::new(Duration::from_secs(1));
        let mut reports = Vec::new();
        for _ in 0..300 {
            if let Some(fps) = stats.record_dt(1.0 / 120.0) {
                reports.push(fps);
            }
        }
        assert_eq!(reports.len(), 2);
        for fps in reports {
            assert!((fps - 120.0).abs() < 1.0, "{fps}");
        }
    }

    #[test]
    fn nothing_before_first_window() {
        let mut stats = FrameStats::default();
        assert_eq!(stats.record_dt(0.5), None);
        assert_eq!(stats.fps(), None);
    }
}
