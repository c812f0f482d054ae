/// Startup knobs for [`Gpu`](super::Gpu). Everything else uses wgpu defaults.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format if the surface offers one.
    pub prefer_srgb: bool,
    /// Wait for vertical blank (FIFO) instead of presenting as soon as possible.
    pub vsync: bool,
    /// Favor the integrated adapter on hybrid systems.
    pub low_power: bool,
    /// Composite the window with premultiplied alpha when the platform allows it.
    pub transparent: bool,
    /// Frames the CPU may queue ahead of the GPU (a hint).
    pub frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            vsync: true,
            low_power: false,
            transparent: false,
            frame_latency: 2,
        }
    }
}

impl GpuInit {
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    pub fn power_preference(&self) -> wgpu::PowerPreference {
        if self.low_power {
            wgpu::PowerPreference::LowPower
        } else {
            wgpu::PowerPreference::HighPerformance
        }
    }

    pub fn alpha_mode(&self) -> wgpu::CompositeAlphaMode {
        if self.transparent {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            wgpu::CompositeAlphaMode::Opaque
        }
    }
}
