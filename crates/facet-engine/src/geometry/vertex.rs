use bytemuck::{Pod, Zeroable};

/// Interleaved vertex record: position followed by straight RGBA color.
///
/// The record is 28 bytes with no padding between fields. The layout must stay
/// in sync with `VertexIn` in `render/shaders/wireframe.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Model-space position.
    pub position: [f32; 3],
    /// Straight-alpha RGBA.
    pub color: [f32; 4],
}

impl Vertex {
    /// Size in bytes of one vertex record.
    pub const STRIDE: u64 = std::mem::size_of::<Vertex>() as u64;

    /// Byte offset of `color` within the record.
    pub const COLOR_OFFSET: u64 = std::mem::size_of::<[f32; 3]>() as u64;

    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];

    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Vertex buffer layout bound at slot 0.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_28_bytes() {
        assert_eq!(Vertex::STRIDE, 28);
        assert_eq!(std::mem::size_of::<Vertex>(), 7 * std::mem::size_of::<f32>());
    }

    #[test]
    fn color_follows_position_without_padding() {
        assert_eq!(Vertex::COLOR_OFFSET, 12);
        assert_eq!(Vertex::ATTRS[0].offset, 0);
        assert_eq!(Vertex::ATTRS[1].offset, Vertex::COLOR_OFFSET);
        assert_eq!(Vertex::ATTRS[1].shader_location, 1);
    }

    #[test]
    fn bytes_are_little_endian_floats_in_field_order() {
        let v = Vertex::new([1.0, 2.0, 3.0], [0.25, 0.5, 0.75, 1.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 28);

        let floats: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        assert_eq!(floats, vec![1.0, 2.0, 3.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
