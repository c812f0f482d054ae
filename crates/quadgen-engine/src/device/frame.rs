use crate::coords::ColorRgba;

/// One acquired swapchain image plus the encoder recording into it.
///
/// Hand it back to [`Gpu::submit`](super::Gpu::submit) promptly; while it is
/// alive the next image cannot be acquired.
pub struct GpuFrame {
    pub(crate) surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Records a pass that fills the whole image with `color`.
    pub fn clear(&mut self, color: ColorRgba) {
        let _pass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("quadgen clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color.into()),
                    store: wgpu::StoreOp::Store,
                },
            })],
            ..Default::default()
        });
    }
}
