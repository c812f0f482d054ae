use super::Vec2;

/// Pixel-space layout box (top-left origin, +Y down) that hosts turn into quads.
///
/// Width and height may be negative; [`Rect::normalized`] flips such a box
/// back onto a top-left origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_origin_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// The point a quad built from this box is anchored at.
    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// True when the box covers no pixels (including negative extents).
    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Same area, with the origin moved to the top-left corner.
    pub fn normalized(self) -> Self {
        let far = self.origin + self.size;
        Self::new(
            self.origin.x.min(far.x),
            self.origin.y.min(far.y),
            self.size.x.abs(),
            self.size.y.abs(),
        )
    }

    /// Shrinks (positive `by`) or grows (negative `by`) every side around the
    /// center. Shrinking past zero leaves an empty box at the center.
    pub fn inset(self, by: f32) -> Self {
        let base = self.normalized();
        let size = Vec2::new(
            (base.size.x - 2.0 * by).max(0.0),
            (base.size.y - 2.0 * by).max(0.0),
        );
        Self::from_origin_size(base.center() - size * 0.5, size)
    }
}
