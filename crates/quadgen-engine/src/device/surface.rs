use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;

use super::GpuInit;

/// What the frame loop should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was (or must be) reconfigured; rendering resumes next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Unrecoverable (commonly OOM); terminate gracefully.
    Fatal,
}

/// Maps a wgpu surface error to the action the frame loop takes.
pub fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

const SRGB_PREFERENCE: [wgpu::TextureFormat; 2] = [
    wgpu::TextureFormat::Bgra8UnormSrgb,
    wgpu::TextureFormat::Rgba8UnormSrgb,
];

fn choose_format(offered: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    let srgb = SRGB_PREFERENCE.into_iter().find(|f| offered.contains(f));
    match (prefer_srgb, srgb) {
        (true, Some(f)) => Some(f),
        _ => offered.first().copied(),
    }
}

fn choose_alpha_mode(
    offered: &[wgpu::CompositeAlphaMode],
    wanted: wgpu::CompositeAlphaMode,
) -> wgpu::CompositeAlphaMode {
    if offered.contains(&wanted) {
        wanted
    } else {
        offered.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

/// Extent the swapchain is configured with. wgpu rejects zero-sized surfaces,
/// so a minimized (0x0) window is configured at 1x1 until it gets a real size.
fn swapchain_extent(size: PhysicalSize<u32>) -> (u32, u32) {
    (size.width.max(1), size.height.max(1))
}

/// A window surface and its live configuration.
pub(super) struct WindowSurface<'w> {
    surface: wgpu::Surface<'w>,
    config: wgpu::SurfaceConfiguration,
    /// Real window size; may be 0x0 while minimized.
    size: PhysicalSize<u32>,
}

impl<'w> WindowSurface<'w> {
    pub(super) fn configure_new(
        surface: wgpu::Surface<'w>,
        adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        size: PhysicalSize<u32>,
        init: &GpuInit,
    ) -> Result<Self> {
        let caps = surface.get_capabilities(adapter);
        let format = choose_format(&caps.formats, init.prefer_srgb)
            .context("surface is not compatible with the selected adapter")?;
        let (width, height) = swapchain_extent(size);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: init.present_mode(),
            alpha_mode: choose_alpha_mode(&caps.alpha_modes, init.alpha_mode()),
            view_formats: Vec::new(),
            desired_maximum_frame_latency: init.frame_latency,
        };
        surface.configure(device, &config);
        log::debug!("surface {format:?} configured at {width}x{height}");

        Ok(Self { surface, config, size })
    }

    pub(super) fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub(super) fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    fn has_area(&self) -> bool {
        self.size.width > 0 && self.size.height > 0
    }

    /// Tracks the new size; reconfigures only when it has area.
    pub(super) fn resize(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) {
        self.size = size;
        if !self.has_area() {
            return;
        }
        (self.config.width, self.config.height) = swapchain_extent(size);
        self.surface.configure(device, &self.config);
    }

    pub(super) fn acquire(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    pub(super) fn recover(&self, device: &wgpu::Device, err: &wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = classify_surface_error(err);
        match action {
            SurfaceErrorAction::Reconfigured if self.has_area() => {
                self.surface.configure(device, &self.config);
            }
            SurfaceErrorAction::Reconfigured => {}
            SurfaceErrorAction::SkipFrame => log::debug!("skipping frame: {err}"),
            SurfaceErrorAction::Fatal => log::error!("fatal surface error: {err}"),
        }
        action
    }
}
