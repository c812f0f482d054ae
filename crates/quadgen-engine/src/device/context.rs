use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::WindowSurface;
use super::{GpuFrame, GpuInit, SurfaceErrorAction};

/// Device, queue and the surface of the window they draw into.
///
/// `'w` is the window borrow held by the surface.
pub struct Gpu<'w> {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: WindowSurface<'w>,
}

impl<'w> Gpu<'w> {
    /// Picks an adapter able to present to `window` and configures its surface.
    ///
    /// A window that starts out 0x0 is fine; drawing resumes once it is resized.
    pub async fn new(window: &'w Window, init: &GpuInit) -> Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .context("cannot create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?}, {:?})", info.name, info.backend, info.device_type);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("quadgen device"),
                required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                ..Default::default()
            })
            .await
            .context("adapter refused to open a device")?;

        let surface = WindowSurface::configure_new(surface, &adapter, &device, window.inner_size(), init)?;

        Ok(Self { device, queue, surface })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface.format()
    }

    /// Window size in physical pixels; 0x0 while minimized.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.surface.size()
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.surface.resize(&self.device, size);
    }

    /// Acquires the next swapchain image and opens an encoder for it.
    pub fn begin_frame(&self) -> Result<GpuFrame, wgpu::SurfaceError> {
        let surface_texture = self.surface.acquire()?;
        let view = surface_texture.texture.create_view(&Default::default());
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("quadgen frame"),
        });
        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits the recorded commands, then presents the image.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit([encoder.finish()]);
        drop(view);
        surface_texture.present();
    }

    /// Reconfigures the surface when that is the remedy for `err`.
    pub fn handle_surface_error(&self, err: &wgpu::SurfaceError) -> SurfaceErrorAction {
        self.surface.recover(&self.device, err)
    }
}
