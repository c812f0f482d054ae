use super::Vec2;

/// Viewport size in logical pixels.
///
/// The quad stage itself never sees this type; it is the host's bridge from
/// pixel layout to the clip-space values stored in instance records.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Size used as the conversion basis. Invalid viewports behave as 1x1.
    #[inline]
    fn basis(self) -> Vec2 {
        if self.is_valid() {
            Vec2::new(self.width, self.height)
        } else {
            Vec2::new(1.0, 1.0)
        }
    }

    /// Maps a logical-pixel point to clip space.
    ///
    /// `(0, 0)` (top-left) maps to `(-1, 1)`; `(width, height)` maps to `(1, -1)`.
    #[inline]
    pub fn pixel_to_clip(self, p: Vec2) -> Vec2 {
        let b = self.basis();
        Vec2::new(2.0 * p.x / b.x - 1.0, 1.0 - 2.0 * p.y / b.y)
    }

    /// Maps a logical-pixel extent (width, height) to a clip-space extent.
    ///
    /// Extents keep their sign; only points get the Y flip.
    #[inline]
    pub fn pixel_extent_to_clip(self, extent: Vec2) -> Vec2 {
        let b = self.basis();
        Vec2::new(2.0 * extent.x / b.x, 2.0 * extent.y / b.y)
    }
}
