/// RGBA color carried through the quad stage untouched.
///
/// Channels are plain `f32`s. Nothing here clamps or converts them: whatever the
/// host stores is exactly what the fragment stage receives. Renderers blend with
/// premultiplied alpha, so hosts normally store premultiplied values.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Premultiplies straight-alpha components. Inputs are not clamped.
    #[inline]
    pub fn premultiplied(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(r * a, g * a, b * a, a)
    }

    /// Builds a color from a `0xRRGGBB` literal with full alpha.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xFF) as f32 / 255.0,
            ((rgb >> 8) & 0xFF) as f32 / 255.0,
            (rgb & 0xFF) as f32 / 255.0,
            1.0,
        )
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<ColorRgba> for wgpu::Color {
    fn from(c: ColorRgba) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}
