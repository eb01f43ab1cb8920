use glam::Mat4;

use super::{Camera, FillMode, FrameCommands, MotionProfile, RenderLoop, RenderState, Uniforms};

/// Rotation added per tick at speed 1.0, in radians.
pub const DEFAULT_ROTATION_STEP: f32 = 0.008;

/// Upper bound for the speed multiplier.
pub const MAX_SPEED: f32 = 5.0;

/// Initial driver settings.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub profile: MotionProfile,
    pub fill: FillMode,
    /// When false the angle holds still between ticks.
    pub auto_rotate: bool,
    pub rotation_step: f32,
    /// Multiplier applied to `rotation_step`, clamped to `[0, MAX_SPEED]`.
    pub speed: f32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            profile: MotionProfile::default(),
            fill: FillMode::Wireframe,
            auto_rotate: true,
            rotation_step: DEFAULT_ROTATION_STEP,
            speed: 1.0,
        }
    }
}

/// Driver lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DriverPhase {
    /// GPU resources not built yet; ticks are skipped.
    Uninitialized,
    /// Pipeline and buffers exist; no frame produced yet.
    Ready,
    /// Steady state.
    Rendering,
}

fn clamp_speed(speed: f32) -> Option<f32> {
    speed.is_finite().then(|| speed.clamp(0.0, MAX_SPEED))
}

/// Model matrix: Y rotation by `angle` composed with X rotation by
/// `angle * x_ratio`. One scalar drives both axes.
pub fn model_matrix(angle: f32, x_ratio: f32) -> Mat4 {
    Mat4::from_rotation_y(angle) * Mat4::from_rotation_x(angle * x_ratio)
}

/// Owns `RenderState` and produces per-tick `FrameCommands`.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    state: RenderState,
    camera: Camera,
    profile: MotionProfile,
    fill: FillMode,
    auto_rotate: bool,
    rotation_step: f32,
    speed: f32,
    uniforms: Uniforms,
    phase: DriverPhase,
    frames: u64,
}

impl FrameDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            state: RenderState::default(),
            camera: Camera::looking_at_origin(config.profile.eye),
            profile: config.profile,
            fill: config.fill,
            auto_rotate: config.auto_rotate,
            rotation_step: config.rotation_step,
            speed: clamp_speed(config.speed).unwrap_or(1.0),
            uniforms: Uniforms::default(),
            phase: DriverPhase::Uninitialized,
            frames: 0,
        }
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn profile(&self) -> MotionProfile {
        self.profile
    }

    pub fn fill(&self) -> FillMode {
        self.fill
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Last uniforms written by `update_uniforms`.
    pub fn uniforms(&self) -> Uniforms {
        self.uniforms
    }

    /// Ticks that produced commands.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Marks GPU resources as built. Later calls are no-ops.
    pub fn mark_ready(&mut self) {
        if self.phase == DriverPhase::Uninitialized {
            self.phase = DriverPhase::Ready;
            log::debug!("frame driver ready");
        }
    }

    /// Switches presentation profile. Resets the camera, keeps the angle.
    pub fn set_profile(&mut self, profile: MotionProfile) {
        self.profile = profile;
        self.camera = Camera::looking_at_origin(profile.eye);
    }

    pub fn set_fill(&mut self, fill: FillMode) {
        self.fill = fill;
    }

    pub fn toggle_fill(&mut self) -> FillMode {
        self.fill = self.fill.toggled();
        self.fill
    }

    pub fn set_auto_rotate(&mut self, on: bool) {
        self.auto_rotate = on;
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Non-finite values are ignored.
    pub fn set_speed(&mut self, speed: f32) {
        if let Some(speed) = clamp_speed(speed) {
            self.speed = speed;
        }
    }

    pub fn adjust_speed(&mut self, delta: f32) -> f32 {
        self.set_speed(self.speed + delta);
        self.speed
    }

    pub fn set_rotation_angle(&mut self, angle: f32) {
        self.state.rotation_angle = angle;
    }

    /// Angle increment applied by the next tick.
    pub fn effective_step(&self) -> f32 {
        if self.auto_rotate {
            self.rotation_step * self.speed
        } else {
            0.0
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        model_matrix(self.state.rotation_angle, self.profile.x_ratio)
    }

    /// `projection * (view * model)` for the current state.
    pub fn compute_mvp(&self) -> Mat4 {
        let projection = self.camera.projection(self.state.aspect_ratio);
        let view = self.camera.view();
        projection * (view * self.model_matrix())
    }

    /// Overwrites the uniform block from the current state, then advances the
    /// angle by one step.
    pub fn update_uniforms(&mut self) -> Uniforms {
        self.uniforms = Uniforms::from_mat4(self.compute_mvp());
        self.state.advance(self.effective_step());
        self.uniforms
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

impl RenderLoop for FrameDriver {
    fn on_resize(&mut self, width: u32, height: u32) {
        self.state.resize(width, height);
        log::debug!("surface resized to {width}x{height}, aspect {:.3}", self.state.aspect_ratio);
    }

    fn on_tick(&mut self) -> Option<FrameCommands> {
        if self.phase == DriverPhase::Uninitialized {
            return None;
        }

        let uniforms = self.update_uniforms();
        self.phase = DriverPhase::Rendering;
        self.frames += 1;

        Some(FrameCommands {
            uniforms,
            fill: self.fill,
            clear: self.profile.clear,
            frame: self.frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::geometry::Solid;

    fn ready_driver() -> FrameDriver {
        let mut d = FrameDriver::default();
        d.mark_ready();
        d
    }

    fn bits(m: Mat4) -> Vec<u32> {
        m.to_cols_array().iter().map(|f| f.to_bits()).collect()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn ticks_are_skipped_until_ready() {
        let mut d = FrameDriver::default();
        assert_eq!(d.phase(), DriverPhase::Uninitialized);
        assert!(d.on_tick().is_none());
        assert_eq!(d.state().rotation_angle, 0.0);

        d.mark_ready();
        assert_eq!(d.phase(), DriverPhase::Ready);
        assert!(d.on_tick().is_some());
        assert_eq!(d.phase(), DriverPhase::Rendering);
    }

    #[test]
    fn mark_ready_does_not_rewind_rendering() {
        let mut d = ready_driver();
        d.on_tick();
        d.mark_ready();
        assert_eq!(d.phase(), DriverPhase::Rendering);
    }

    // ── matrices ──────────────────────────────────────────────────────────

    #[test]
    fn angle_zero_gives_identity_model() {
        let d = ready_driver();
        assert_eq!(d.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn angle_zero_mvp_is_projection_times_view() {
        let d = ready_driver();
        let cam = d.camera();
        let expected = cam.projection(1.0) * cam.view();
        assert_eq!(d.compute_mvp(), expected);
    }

    #[test]
    fn mvp_is_projection_view_model_in_that_order() {
        let mut d = ready_driver();
        d.set_rotation_angle(0.9);
        d.on_resize(1280, 720);

        let cam = *d.camera();
        let p = cam.projection(d.state().aspect_ratio);
        let v = cam.view();
        let m = d.model_matrix();

        assert_eq!(d.compute_mvp(), p * (v * m));
        assert_ne!(d.compute_mvp(), m * (v * p));
        assert_ne!(d.compute_mvp(), p * (m * v));
    }

    #[test]
    fn model_ties_x_rotation_to_a_fraction_of_y() {
        let angle = 1.1;
        let expected = Mat4::from_rotation_y(angle) * Mat4::from_rotation_x(angle * 0.5);
        assert_eq!(model_matrix(angle, 0.5), expected);
        assert_ne!(model_matrix(angle, 0.5), model_matrix(angle, 0.6));
    }

    #[test]
    fn update_uniforms_is_bit_identical_for_same_state() {
        let mut d = ready_driver();
        d.on_resize(800, 600);
        d.set_rotation_angle(0.42);

        let first = d.update_uniforms();
        d.set_rotation_angle(0.42);
        let second = d.update_uniforms();

        assert_eq!(bits(first.to_mat4()), bits(second.to_mat4()));
    }

    #[test]
    fn update_uniforms_uses_angle_before_increment() {
        let mut d = ready_driver();
        let u = d.update_uniforms();
        let cam = d.camera();
        assert_eq!(u.to_mat4(), cam.projection(1.0) * cam.view());
        assert_eq!(d.state().rotation_angle, DEFAULT_ROTATION_STEP);
    }

    // ── ticking ───────────────────────────────────────────────────────────

    #[test]
    fn hundred_ticks_reach_point_eight_radians() {
        let mut d = ready_driver();
        d.on_resize(1, 1);
        for i in 0..100 {
            let cmd = d.on_tick();
            assert!(cmd.is_some(), "tick {i} skipped");
        }
        assert!((d.state().rotation_angle - 0.8).abs() < 1e-4);
        assert_eq!(d.frames(), 100);
    }

    #[test]
    fn paused_driver_keeps_angle() {
        let mut d = ready_driver();
        d.set_auto_rotate(false);
        for _ in 0..10 {
            d.on_tick();
        }
        assert_eq!(d.state().rotation_angle, 0.0);
        assert!(d.toggle_auto_rotate());
        d.on_tick();
        assert_eq!(d.state().rotation_angle, DEFAULT_ROTATION_STEP);
    }

    #[test]
    fn speed_scales_step_and_is_clamped() {
        let mut d = ready_driver();
        d.set_speed(2.0);
        assert_eq!(d.effective_step(), DEFAULT_ROTATION_STEP * 2.0);
        assert_eq!(d.adjust_speed(10.0), MAX_SPEED);
        assert_eq!(d.adjust_speed(-100.0), 0.0);
        d.set_speed(f32::NAN);
        assert_eq!(d.speed(), 0.0);
    }

    #[test]
    fn configured_speed_is_sanitized() {
        let nan = FrameDriver::new(DriverConfig {
            speed: f32::NAN,
            ..DriverConfig::default()
        });
        assert_eq!(nan.speed(), 1.0);
        assert!(nan.effective_step().is_finite());

        let fast = FrameDriver::new(DriverConfig {
            speed: f32::INFINITY,
            ..DriverConfig::default()
        });
        assert_eq!(fast.speed(), 1.0);

        let over = FrameDriver::new(DriverConfig {
            speed: 9.0,
            ..DriverConfig::default()
        });
        assert_eq!(over.speed(), MAX_SPEED);
    }

    #[test]
    fn commands_carry_fill_and_profile_background() {
        let mut d = ready_driver();
        d.set_profile(MotionProfile::for_solid(Solid::Icosahedron));
        d.toggle_fill();

        let cmd = d.on_tick().unwrap();
        assert_eq!(cmd.fill, FillMode::Solid);
        assert_eq!(cmd.clear, MotionProfile::for_solid(Solid::Icosahedron).clear);
        assert_eq!(cmd.frame, 1);
        assert_eq!(cmd.uniforms, d.uniforms());
    }

    #[test]
    fn set_profile_resets_camera_but_keeps_angle() {
        let mut d = ready_driver();
        d.set_rotation_angle(2.0);
        d.camera_mut().orbit(1.0, 0.2);

        let profile = MotionProfile::for_solid(Solid::Dodecahedron);
        d.set_profile(profile);

        assert_eq!(d.camera().eye, Vec3::new(0.0, 0.5, -4.5));
        assert_eq!(d.state().rotation_angle, 2.0);
    }

    #[test]
    fn resize_updates_aspect_used_by_projection() {
        let mut d = ready_driver();
        d.on_resize(300, 0);
        assert_eq!(d.state().aspect_ratio, 300.0);
        assert!(d.compute_mvp().is_finite());
    }
}
