use crate::coords::Viewport;

/// Everything a renderer needs to record into the current frame.
pub struct DrawTarget<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Format of `view`; pipelines are built against it.
    pub format: wgpu::TextureFormat,
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub view: &'a wgpu::TextureView,
    /// Logical size of the frame, for hosts converting pixel layouts.
    pub viewport: Viewport,
}
