use crate::coords::Vec2;

use super::InstanceRecord;

/// Per-instance affine map: scale by `(width, height)`, then translate by `anchor`.
///
/// Kept as a scale/translate pair; there is no rotation or projection, so a full
/// matrix is only materialized on request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadTransform {
    pub scale: Vec2,
    pub translate: Vec2,
}

impl QuadTransform {
    #[inline]
    pub const fn new(scale: Vec2, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    #[inline]
    pub fn for_instance(instance: &InstanceRecord) -> Self {
        Self::new(instance.size(), instance.anchor())
    }

    /// Maps a corner offset `(x, y, 0, 1)` to a homogeneous clip position.
    #[inline]
    pub fn apply(self, offset: Vec2) -> [f32; 4] {
        let p = offset.scale(self.scale) + self.translate;
        [p.x, p.y, 0.0, 1.0]
    }

    /// Equivalent 4x4 matrix, column-major (`m[col][row]`), as WGSL/wgpu expect.
    #[rustfmt::skip]
    pub fn to_cols_array_2d(self) -> [[f32; 4]; 4] {
        [
            [self.scale.x, 0.0,          0.0, 0.0],
            [0.0,          self.scale.y, 0.0, 0.0],
            [0.0,          0.0,          1.0, 0.0],
            [self.translate.x, self.translate.y, 0.0, 1.0],
        ]
    }

    /// Multiplies a homogeneous point by the matrix form.
    pub fn transform_point4(self, p: [f32; 4]) -> [f32; 4] {
        let m = self.to_cols_array_2d();
        let mut out = [0.0f32; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = m[0][row] * p[0] + m[1][row] * p[1] + m[2][row] * p[2] + m[3][row] * p[3];
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ColorRgba;
    use crate::quad::CORNER_OFFSETS;

    #[test]
    fn matrix_form_agrees_with_scale_translate() {
        let inst = InstanceRecord::new(Vec2::new(10.0, 20.0), 4.0, 2.0, ColorRgba::white());
        let t = QuadTransform::for_instance(&inst);
        for c in CORNER_OFFSETS {
            assert_eq!(t.transform_point4([c.x, c.y, 0.0, 1.0]), t.apply(c));
        }
    }

    #[test]
    fn z_stays_zero_and_w_one() {
        let t = QuadTransform::new(Vec2::new(3.0, -7.0), Vec2::new(0.25, 0.5));
        let p = t.transform_point4([0.5, -0.5, 0.0, 1.0]);
        assert_eq!(p[2], 0.0);
        assert_eq!(p[3], 1.0);
    }

    #[test]
    fn origin_maps_to_anchor() {
        let t = QuadTransform::new(Vec2::new(9.0, 9.0), Vec2::new(-3.0, 4.0));
        assert_eq!(t.apply(Vec2::zero()), [-3.0, 4.0, 0.0, 1.0]);
    }
}
