/// Mutable per-loop state.
///
/// Written only by the resize and tick entry points of `FrameDriver`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderState {
    /// Accumulated rotation in radians. Never wrapped; it only feeds `sin`/`cos`.
    pub rotation_angle: f32,
    /// Surface width over height.
    pub aspect_ratio: f32,
}

impl RenderState {
    /// Recomputes the aspect ratio; a zero height is treated as 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect_ratio = width as f32 / height.max(1) as f32;
    }

    pub fn advance(&mut self, step: f32) {
        self.rotation_angle += step;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            rotation_angle: 0.0,
            aspect_ratio: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_divides_width_by_height() {
        let mut s = RenderState::default();
        s.resize(1600, 800);
        assert_eq!(s.aspect_ratio, 2.0);
    }

    #[test]
    fn zero_height_uses_one() {
        let mut s = RenderState::default();
        s.resize(640, 0);
        assert_eq!(s.aspect_ratio, 640.0);
        assert!(s.aspect_ratio.is_finite());
    }

    #[test]
    fn resize_leaves_angle_alone() {
        let mut s = RenderState { rotation_angle: 1.25, aspect_ratio: 1.0 };
        s.resize(300, 200);
        assert_eq!(s.rotation_angle, 1.25);
    }

    #[test]
    fn advance_does_not_wrap() {
        let mut s = RenderState { rotation_angle: 6.2, aspect_ratio: 1.0 };
        s.advance(0.5);
        assert!(s.rotation_angle > std::f32::consts::TAU);
    }
}
