use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Uniform block bound at `@group(0) @binding(0)`.
///
/// A single column-major 4x4 matrix, 64 bytes. `Mat4` is stored as-is;
/// glam lays it out column by column.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub mvp: Mat4,
}

impl Uniforms {
    pub const SIZE: u64 = std::mem::size_of::<Uniforms>() as u64;

    /// Minimum binding size for the bind group layout entry.
    pub const MIN_BINDING_SIZE: NonZeroU64 = match NonZeroU64::new(Self::SIZE) {
        Some(size) => size,
        None => panic!("Uniforms must not be zero-sized"),
    };

    #[inline]
    pub fn from_mat4(mvp: Mat4) -> Self {
        Self { mvp }
    }

    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        self.mvp
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::from_mat4(Mat4::IDENTITY)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec3, Vec4};

    use super::*;

    #[test]
    fn block_is_sixteen_floats() {
        assert_eq!(Uniforms::SIZE, 64);
        assert_eq!(Uniforms::MIN_BINDING_SIZE.get(), 64);
        assert_eq!(Uniforms::default().as_bytes().len(), 64);
    }

    #[test]
    fn layout_is_column_major() {
        let u = Uniforms::from_mat4(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        // Translation lives in the fourth column, i.e. floats 12..15.
        let floats: &[f32] = bytemuck::cast_slice(u.as_bytes());
        assert_eq!(&floats[12..16], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.mvp.w_axis, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn mat4_conversion_is_lossless() {
        let m = Mat4::from_rotation_z(0.3) * Mat4::from_scale(Vec3::splat(2.0));
        assert_eq!(Uniforms::from_mat4(m).to_mat4(), m);
    }
}
