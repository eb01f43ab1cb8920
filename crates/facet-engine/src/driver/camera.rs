use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

use glam::{Mat4, Vec3};

const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.2;
const MIN_DISTANCE: f32 = 1.5;
const MAX_DISTANCE: f32 = 20.0;

/// Left-handed perspective camera.
///
/// Clip space follows wgpu: depth in `[0, 1]`, +Y up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// 60 degree camera at `eye` looking at the origin with +Y up.
    pub fn looking_at_origin(eye: Vec3) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: FRAC_PI_3,
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        // Zero-width surfaces (minimized windows) would otherwise produce inf.
        Mat4::perspective_lh(self.fov_y, aspect_ratio.max(f32::EPSILON), self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye, self.target, self.up)
    }

    pub fn distance(&self) -> f32 {
        (self.eye - self.target).length()
    }

    /// Angle around +Y, zero when the eye sits on the -Z side of the target.
    pub fn yaw(&self) -> f32 {
        let d = self.eye - self.target;
        d.x.atan2(-d.z)
    }

    /// Elevation above the XZ plane.
    pub fn pitch(&self) -> f32 {
        let d = self.eye - self.target;
        let r = d.length();
        if r <= f32::EPSILON {
            return 0.0;
        }
        (d.y / r).clamp(-1.0, 1.0).asin()
    }

    /// Orbits the eye around the target. Pitch is clamped short of the poles
    /// so the look-at basis never degenerates.
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        let r = self.distance();
        if r <= f32::EPSILON {
            return;
        }
        let pitch = (self.pitch() + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.place(self.yaw() + d_yaw, pitch, r);
    }

    /// Scales the eye distance by `factor`, clamped to `[1.5, 20]`.
    pub fn zoom(&mut self, factor: f32) {
        let r = self.distance();
        if r <= f32::EPSILON || !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let pitch = self.pitch();
        self.place(self.yaw(), pitch, (r * factor).clamp(MIN_DISTANCE, MAX_DISTANCE));
    }

    fn place(&mut self, yaw: f32, pitch: f32, distance: f32) {
        let (sp, cp) = pitch.sin_cos();
        let (sy, cy) = yaw.sin_cos();
        self.eye = self.target + Vec3::new(distance * cp * sy, distance * sp, -distance * cp * cy);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_at_origin(Vec3::new(0.0, 0.5, -4.0))
    }
}
