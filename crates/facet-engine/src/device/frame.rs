/// A single acquired swapchain image plus the encoder recording into it.
///
/// Finalize promptly with `Gpu::submit` (presents) or `Gpu::discard`
/// (drops without presenting). Holding the surface texture blocks
/// acquisition of the next one.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
